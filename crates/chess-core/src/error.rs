//! Game generation error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A square-pair string could not be turned into a move. This is a bug in
    /// the catalog or the caller, never a runtime condition.
    #[error("Malformed move '{uci}': {reason}")]
    MalformedMove { uci: String, reason: String },

    #[error("Invalid FEN: {0}")]
    InvalidFen(String),

    #[error("Unknown opening: {0}")]
    UnknownOpening(String),

    #[error("Level must be between 1 and 3, got {0}")]
    InvalidLevel(i64),
}
