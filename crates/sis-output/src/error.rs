//! Error types for SIS output generation.

use std::path::PathBuf;
use thiserror::Error;

use sif_reader::ReadError;

/// Errors that abort converting a file.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Reading or decoding the SIF input failed.
    #[error(transparent)]
    Read(#[from] ReadError),

    /// Output or intermediate file could not be created.
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// XML serialization or re-parsing failed.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Serialized XML was not valid UTF-8.
    #[error("XML output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

impl OutputError {
    pub fn create(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Create {
            path: path.into(),
            source,
        }
    }
}
