use chess_core::{Board, Color, Kind};

// Material weights, in pawns. The king's weight only has to dwarf
// everything else so that losing it dominates any exchange.
const KING_VALUE: i32 = 18;
const QUEEN_VALUE: i32 = 9;
const ROOK_VALUE: i32 = 5;
const BISHOP_VALUE: i32 = 3;
const KNIGHT_VALUE: i32 = 3;
const PAWN_VALUE: i32 = 1;

/// The material weight of a piece kind, regardless of whose it is.
pub fn piece_value(kind: Kind) -> i32 {
    match kind {
        Kind::King => KING_VALUE,
        Kind::Queen => QUEEN_VALUE,
        Kind::Rook => ROOK_VALUE,
        Kind::Bishop => BISHOP_VALUE,
        Kind::Knight => KNIGHT_VALUE,
        Kind::Pawn => PAWN_VALUE,
    }
}

/// Material balance of the board from `player`'s point of view: own
/// pieces count positively, the opponent's negatively. Higher is better
/// for `player`.
pub fn score(board: &Board, player: Color) -> i32 {
    let mut accumulated = 0;

    for (_, piece) in board.squares() {
        if !piece.present {
            continue;
        }

        let value = piece_value(piece.kind);
        if piece.color == player {
            accumulated += value;
        } else {
            accumulated -= value;
        }
    }

    accumulated
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Piece, Pos};

    #[test]
    fn the_initial_board_is_balanced() {
        let board = Board::initial();
        assert_eq!(score(&board, Color::White), 0);
        assert_eq!(score(&board, Color::Black), 0);
    }

    #[test]
    fn scoring_is_antisymmetric_in_the_player() {
        let mut board = Board::initial();
        board.set(Pos::new(0, 1), Piece::absent());
        board.set(Pos::new(3, 7), Piece::absent());

        assert_eq!(score(&board, Color::White), -score(&board, Color::Black));
    }

    #[test]
    fn a_missing_pawn_costs_one_point() {
        let mut board = Board::initial();
        board.set(Pos::new(0, 1), Piece::absent());

        assert_eq!(score(&board, Color::White), 1);
        assert_eq!(score(&board, Color::Black), -1);
    }

    #[test]
    fn piece_values_follow_the_material_table() {
        assert_eq!(piece_value(Kind::King), 18);
        assert_eq!(piece_value(Kind::Queen), 9);
        assert_eq!(piece_value(Kind::Rook), 5);
        assert_eq!(piece_value(Kind::Bishop), 3);
        assert_eq!(piece_value(Kind::Knight), 3);
        assert_eq!(piece_value(Kind::Pawn), 1);
    }
}
