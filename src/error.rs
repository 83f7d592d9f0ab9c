//! Errors surfaced by the brightness tool.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Every failure the tool can run into. All of them are fatal to the
/// current invocation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BrightnessError {
    #[error("couldn't determine the home directory and no config path was given")]
    PathResolution,

    #[error("couldn't {operation} config file {}: {source}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("couldn't parse config file {}: {source}", path.display())]
    Deserialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{program} failed: {message}")]
    ExternalCommand { program: String, message: String },

    #[error("usage error: {0}")]
    Usage(String),
}

impl BrightnessError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        BrightnessError::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BrightnessError>;
