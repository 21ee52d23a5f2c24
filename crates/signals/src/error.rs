//! Signal error types.

use crate::ConfigError;
use thiserror::Error;
use tools::ToolError;

/// Signal errors.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The tool input does not satisfy the signal's schema.
    #[error("invalid input for {signal}: {reason}")]
    InvalidInput {
        signal: &'static str,
        reason: String,
    },

    /// The signal fired before and its refire policy forbids firing again
    /// until it is reset.
    #[error("{signal} already fired; reset it before firing again")]
    AlreadyFired { signal: &'static str },

    /// No signal with this name is registered.
    #[error("unknown signal: {0}")]
    UnknownSignal(String),

    /// Two signals with the same name were registered in one host.
    #[error("duplicate signal: {0}")]
    DuplicateSignal(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for ToolError {
    fn from(err: Error) -> Self {
        match err {
            Error::UnknownSignal(name) => ToolError::NotFound(name),
            Error::InvalidInput { .. } | Error::AlreadyFired { .. } => {
                ToolError::InvalidInput(err.to_string())
            }
            other => ToolError::Execution(other.to_string()),
        }
    }
}
