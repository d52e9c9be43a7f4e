//! Twenty48 - A 4x4 sliding-tile merge puzzle
//!
//! Core modules:
//! - `sim`: Pure board engine (line merge, moves, spawning) and the game session
//! - `highscores`: High score persistence behind a load/save interface
//! - `settings`: Player preferences
//! - `ui`: Text rendering for the terminal shell

pub mod error;
pub mod highscores;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::{InvalidDirection, NoEmptyCellError, SessionError, SettingsError, StoreError};
pub use highscores::{JsonFileStore, MemoryStore, ScoreStore};
pub use settings::Settings;
pub use sim::{Board, Direction, GamePhase, GameSession, SessionUpdate};

/// Game configuration constants
pub mod consts {
    /// Board edge length
    pub const BOARD_SIZE: usize = 4;
    /// Tile value that counts as a win
    pub const TARGET_TILE: u32 = 2048;
    /// Chance that a spawned tile is a 4 instead of a 2
    pub const SPAWN_FOUR_PROBABILITY: f64 = 0.1;
    /// Tiles placed on a fresh board
    pub const INITIAL_TILES: usize = 2;
}
