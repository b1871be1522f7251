pub mod ai;
pub mod evaluation;

pub use ai::{EngineError, GreedyAi};
pub use evaluation::score;
