//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Separates decode, shape and persistence failures so callers can decide how to
//! report them; no operation retries internally.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode {}: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("Dimension error in {op}: {reason}")]
    Dimension { op: &'static str, reason: String },

    #[error("Failed to persist {}: {reason}", .path.display())]
    Persist { path: PathBuf, reason: String },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    pub fn decode<E: std::fmt::Display>(path: impl Into<PathBuf>, e: E) -> Self {
        Error::Decode {
            path: path.into(),
            reason: e.to_string(),
        }
    }

    pub fn persist<E: std::fmt::Display>(path: impl Into<PathBuf>, e: E) -> Self {
        Error::Persist {
            path: path.into(),
            reason: e.to_string(),
        }
    }

    pub fn dimension(op: &'static str, reason: impl Into<String>) -> Self {
        Error::Dimension {
            op,
            reason: reason.into(),
        }
    }
}
