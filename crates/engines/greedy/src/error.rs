//! Error types for the greedy engine.

use chess_core::SanError;
use thiserror::Error;

/// Errors raised by move selection, turn handling and configuration.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The selector was handed an empty candidate list
    #[error("no candidate moves to choose from")]
    InvalidInput,

    /// Notation that does not resolve to exactly one legal move
    #[error("illegal move '{notation}'")]
    IllegalMove {
        notation: String,
        #[source]
        source: SanError,
    },

    /// Malformed weights or an unreadable configuration file
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The side to move has no legal moves
    #[error("game is over, no legal moves remain")]
    GameOver,
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
