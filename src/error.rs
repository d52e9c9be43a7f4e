use std::path::PathBuf;

/// Returned when a tile is requested on a board with no empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no empty cell left to spawn a tile")]
pub struct NoEmptyCellError;

/// Returned when input does not name one of the four directions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a move direction: {0:?}")]
pub struct InvalidDirection(pub String);

/// Errors that can occur while writing the high score.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to write high score to {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode high score: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the game session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("board invariant violated after an effective move: {0}")]
    Invariant(#[from] NoEmptyCellError),
}

/// Errors that can occur when loading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}
