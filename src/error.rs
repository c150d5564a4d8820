//! Error type shared by emitters, streams and stream files.

use thiserror::Error;

/// Errors that can occur while building or replaying drawing operations.
#[derive(Debug, Error)]
pub enum EmitError {
    /// An emitter or stream file was given parameters the engine cannot accept.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Status reported by Cairo while executing a delegated call.
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to read stream file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse stream file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl EmitError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        EmitError::InvalidConfiguration(message.into())
    }
}
