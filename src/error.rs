//! Error types shared by every layer of the crate.

use crate::host::ShapeId;
use thiserror::Error;

/// Errors raised by geometry utilities, host adapters and the command layer.
#[derive(Error, Debug)]
pub enum Error {
    /// A caller passed an argument the operation cannot work with.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The host adapter failed to read or write slide state.
    #[error("Host error: {0}")]
    Host(String),

    /// A command referenced a shape the host does not know.
    #[error("Unknown shape: {0:?}")]
    UnknownShape(ShapeId),

    /// A key chord string could not be parsed.
    #[error("Invalid key chord: {0}")]
    InvalidChord(String),

    /// Configuration document could not be decoded.
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for deckhand operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Shorthand for [`Error::InvalidArgument`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
