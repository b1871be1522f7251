use chess_core::{valid_next_boards, Board, Color};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use thiserror::Error;

use crate::evaluation::score;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("{0} has no legal move to pick from")]
    NoLegalMoves(Color),
}

/// The computer opponent: a greedy one-ply searcher. Owns the random
/// source used to break ties between equally good moves, so the rules
/// engine itself stays free of global state.
pub struct GreedyAi {
    rng: StdRng,
}

impl GreedyAi {
    /// An engine seeded once from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// An engine with a fixed seed, for reproducible games and tests.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick the best board reachable in one move of `player`, breaking
    /// ties uniformly at random. Calling this for a player with no legal
    /// moves is a contract violation and yields an error.
    pub fn best_next_board(
        &mut self,
        board: &Board,
        player: Color,
    ) -> Result<Board, EngineError> {
        let candidates = valid_next_boards(board, player);
        let best = boards_with_best_score(&candidates, player);

        debug!(
            "{player}: {} candidate moves, {} tied for the best score",
            candidates.len(),
            best.len()
        );

        best.choose(&mut self.rng)
            .copied()
            .ok_or(EngineError::NoLegalMoves(player))
    }
}

impl Default for GreedyAi {
    fn default() -> Self {
        Self::new()
    }
}

/// All boards achieving the maximum score from `player`'s perspective.
/// Empty only when `boards` is empty.
fn boards_with_best_score(boards: &[Board], player: Color) -> Vec<Board> {
    let mut best_boards = Vec::new();
    let mut best_score = i32::MIN;

    for &board in boards {
        let board_score = score(&board, player);

        if board_score > best_score {
            best_score = board_score;
            best_boards.clear();
            best_boards.push(board);
        } else if board_score == best_score {
            best_boards.push(board);
        }
    }

    best_boards
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Kind, Piece, Pos};

    #[test]
    fn a_hanging_queen_is_always_taken() {
        let mut board = Board::empty();
        board.set(Pos::new(4, 0), Piece::new(Color::Black, Kind::King));
        board.set(Pos::new(0, 0), Piece::new(Color::Black, Kind::Rook));
        board.set(Pos::new(0, 5), Piece::new(Color::White, Kind::Queen));
        board.set(Pos::new(4, 7), Piece::new(Color::White, Kind::King));

        let mut ai = GreedyAi::from_seed(7);
        let chosen = ai.best_next_board(&board, Color::Black).unwrap();

        assert_eq!(
            chosen.at(Pos::new(0, 5)),
            Piece::new(Color::Black, Kind::Rook)
        );
        assert_eq!(score(&chosen, Color::Black), score(&board, Color::Black) + 9);
    }

    #[test]
    fn the_chosen_board_scores_no_worse_than_any_alternative() {
        let board = Board::initial();
        let mut ai = GreedyAi::from_seed(42);
        let chosen = ai.best_next_board(&board, Color::White).unwrap();

        let best = valid_next_boards(&board, Color::White)
            .iter()
            .map(|candidate| score(candidate, Color::White))
            .max()
            .unwrap();
        assert_eq!(score(&chosen, Color::White), best);
    }

    #[test]
    fn the_chosen_board_is_one_move_away() {
        let board = Board::initial();
        let mut ai = GreedyAi::from_seed(3);
        let chosen = ai.best_next_board(&board, Color::Black).unwrap();

        assert!(valid_next_boards(&board, Color::Black).contains(&chosen));
    }

    #[test]
    fn a_player_without_moves_is_rejected() {
        let mut board = Board::empty();
        board.set(Pos::new(0, 0), Piece::new(Color::White, Kind::King));

        let mut ai = GreedyAi::from_seed(0);
        assert_eq!(
            ai.best_next_board(&board, Color::Black),
            Err(EngineError::NoLegalMoves(Color::Black))
        );
    }

    #[test]
    fn identical_seeds_pick_identical_boards() {
        let board = Board::initial();
        let a = GreedyAi::from_seed(99).best_next_board(&board, Color::White);
        let b = GreedyAi::from_seed(99).best_next_board(&board, Color::White);
        assert_eq!(a, b);
    }
}
