//! Game core
//!
//! All gameplay logic lives here and has no rendering or platform dependencies:
//! - `line`, `board`, `spawn`: the stateless board engine
//! - `state`: the game session driving it
//!
//! Randomness only enters through the generator passed in by the caller.

pub mod board;
pub mod line;
pub mod spawn;
pub mod state;

pub use board::{Board, Direction, MoveOutcome, apply_move, is_terminal};
pub use line::{Line, LineMerge, merge_line};
pub use spawn::{random_tile_value, spawn_random_tile};
pub use state::{GamePhase, GameSession, SessionUpdate};
