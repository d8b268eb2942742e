//! Error types for the fiction engine.

use tale_core::{CoreError, LocationId};
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while running a story.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A location id was referenced that the world graph does not contain.
    #[error("location not found: {0}")]
    NotFound(LocationId),

    /// A command was issued before the player was placed anywhere.
    #[error("you are nowhere yet; no current location is set")]
    NoCurrentLocation,

    /// The player's answer does not fit the prompt.
    #[error("{0}")]
    InvalidInput(String),

    /// The input stream ended.
    #[error("input stream closed")]
    InputClosed,

    /// Terminal I/O failed.
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    /// Story state or save file error.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl EngineError {
    /// Whether the turn loop can report this error and carry on.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InputClosed | Self::Io(_))
    }
}
