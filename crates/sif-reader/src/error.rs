//! Error types for reading SIF files.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Why a line was skipped.
///
/// Rejections are not errors: the line is reported and the next line is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRejection {
    /// Line is shorter than the base block plus one address block.
    TooShort {
        line: usize,
        required: usize,
        actual: usize,
    },
    /// Address-count byte is not a digit from 1 to 9.
    InvalidAddressCount { line: usize, found: u8 },
}

impl LineRejection {
    /// Input line number (1-based) the rejection refers to.
    pub fn line(&self) -> usize {
        match self {
            Self::TooShort { line, .. } | Self::InvalidAddressCount { line, .. } => *line,
        }
    }
}

impl fmt::Display for LineRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort {
                line,
                required,
                actual,
            } => write!(
                f,
                "record {line} does not have minimum SIF record length of {required}; length is {actual}"
            ),
            Self::InvalidAddressCount { line, found } => write!(
                f,
                "address count of record {line} is {:?}, expected a digit from 1 to 9",
                char::from(*found)
            ),
        }
    }
}

/// Errors that abort reading a SIF file.
#[derive(Debug, Error)]
pub enum ReadError {
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// A field's bytes could not be decoded from the legacy encoding.
    #[error("cannot decode field '{field}' on line {line} from the legacy encoding")]
    Encoding { line: usize, field: String },

    /// The line failed validation.
    #[error("{0}")]
    Rejected(LineRejection),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<LineRejection> for ReadError {
    fn from(rejection: LineRejection) -> Self {
        Self::Rejected(rejection)
    }
}

/// Result type alias for SIF reading.
pub type Result<T> = std::result::Result<T, ReadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_display() {
        let short = LineRejection::TooShort {
            line: 3,
            required: 874,
            actual: 12,
        };
        assert_eq!(
            short.to_string(),
            "record 3 does not have minimum SIF record length of 874; length is 12"
        );
        let count = LineRejection::InvalidAddressCount {
            line: 7,
            found: b'0',
        };
        assert_eq!(count.line(), 7);
        assert!(count.to_string().contains("'0'"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: ReadError = io_err.into();
        assert!(matches!(err, ReadError::Io(_)));
    }
}
