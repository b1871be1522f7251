use std::io::{self, BufRead, Write};

use chess_core::{
    is_check_mated, is_checked, is_stale_mated, parse_move, valid_next_positions, Board, Color,
};
use chess_engine::{EngineError, GreedyAi};
use log::info;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut board = Board::initial();
    let mut ai = GreedyAi::new();

    println!("You play White. Enter moves like e2e4, or 'quit'.");

    loop {
        println!("\n{board}");

        match verdict(&board, Color::White) {
            Some(Verdict::Mate) => {
                println!("Checkmate. Black wins.");
                return Ok(());
            }
            Some(Verdict::Stalemate) => {
                println!("Stalemate.");
                return Ok(());
            }
            Some(Verdict::Check) => println!("You are in check."),
            None => {}
        }

        print!("your move> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };
        let input = line.trim();

        if input.is_empty() {
            continue;
        }
        if input == "quit" {
            return Ok(());
        }

        let (from, to) = match parse_move(input) {
            Ok(squares) => squares,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        let piece = board.at(from);
        if !piece.present || piece.color != Color::White {
            println!("there is no White piece on {from}");
            continue;
        }
        if !valid_next_positions(&board, from).contains(&to) {
            println!("{piece} cannot move from {from} to {to}");
            continue;
        }

        if let Some(captured) = board.move_piece(from, to) {
            println!("you captured {captured}");
        }
        info!("White played {from} -> {to}");

        match verdict(&board, Color::Black) {
            Some(Verdict::Mate) => {
                println!("\n{board}\nCheckmate. You win.");
                return Ok(());
            }
            Some(Verdict::Stalemate) => {
                println!("\n{board}\nStalemate.");
                return Ok(());
            }
            Some(Verdict::Check) => println!("Black is in check."),
            None => {}
        }

        board = match ai.best_next_board(&board, Color::Black) {
            Ok(next_board) => next_board,
            Err(EngineError::NoLegalMoves(_)) => {
                println!("Black has no move left.");
                return Ok(());
            }
        };
        info!("Black replied");
    }
}

enum Verdict {
    Check,
    Mate,
    Stalemate,
}

fn verdict(board: &Board, player: Color) -> Option<Verdict> {
    if is_check_mated(board, player) {
        Some(Verdict::Mate)
    } else if is_stale_mated(board, player) {
        Some(Verdict::Stalemate)
    } else if is_checked(board, player) {
        Some(Verdict::Check)
    } else {
        None
    }
}
