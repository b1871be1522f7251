//! End-to-end play from the starting position: a human-style White move
//! followed by an engine reply for Black.

use chess_core::{valid_next_positions, Board, Color, Pos};
use chess_engine::{score, GreedyAi};

#[test]
fn opening_exchange_from_the_initial_board() {
    let mut board = Board::initial();

    // The king's pawn may advance one or two squares.
    let mut destinations = valid_next_positions(&board, Pos::new(4, 6));
    destinations.sort_by_key(|pos| (pos.y, pos.x));
    assert_eq!(destinations, vec![Pos::new(4, 4), Pos::new(4, 5)]);

    let captured = board.move_piece(Pos::new(4, 6), Pos::new(4, 4));
    assert_eq!(captured, None);

    let mut ai = GreedyAi::from_seed(2024);
    let reply = ai.best_next_board(&board, Color::Black).unwrap();

    // Black moved something, and nothing Black owns could be captured on
    // move one, so material stays level.
    assert_ne!(reply, board);
    assert_eq!(score(&reply, Color::Black), 0);
    assert_eq!(score(&reply, Color::White), 0);

    // Exactly one Black piece changed its square: one origin emptied and
    // one destination filled.
    let mut vacated = 0;
    let mut entered = 0;
    for (pos, piece) in board.squares() {
        let after = reply.at(pos);
        if piece != after {
            if piece.present && !after.present {
                vacated += 1;
                assert_eq!(piece.color, Color::Black);
            } else {
                entered += 1;
                assert_eq!(after.color, Color::Black);
            }
        }
    }
    assert_eq!(vacated, 1);
    assert_eq!(entered, 1);
}
