// Core chess game logic modules
pub mod board;
pub mod moves;
pub mod piece;
pub mod position;

// Re-export main types for convenience
pub use board::Board;
pub use moves::{
    is_check_mated, is_checked, is_stale_mated, parse_move, valid_next_boards,
    valid_next_positions, ParseMoveError,
};
pub use piece::{Color, Kind, Piece};
pub use position::Pos;
