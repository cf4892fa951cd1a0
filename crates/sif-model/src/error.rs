//! Error types for loading conversion configuration.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or validating a [`crate::ConversionConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration text is not valid TOML for the expected shape.
    #[error("failed to parse config {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    /// A layout has no fields.
    #[error("{layout} layout has no fields")]
    EmptyLayout { layout: &'static str },

    /// Two fields in one layout share a name.
    #[error("duplicate field '{name}' in {layout} layout")]
    DuplicateField { layout: &'static str, name: String },

    /// A field has zero width.
    #[error("field '{name}' in {layout} layout has zero width")]
    ZeroWidth { layout: &'static str, name: String },

    /// A field the mapper reads is absent from the layout.
    #[error("{layout} layout is missing required field '{name}'")]
    MissingField { layout: &'static str, name: String },

    /// A code table lacks its `DEFAULT` fallback entry.
    #[error("code table '{table}' has no DEFAULT entry")]
    MissingDefault { table: &'static str },
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    /// Create an Io error for the given path.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a MissingField error.
    pub fn missing_field(layout: &'static str, name: impl Into<String>) -> Self {
        Self::MissingField {
            layout,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::missing_field("address", "city");
        assert_eq!(
            format!("{err}"),
            "address layout is missing required field 'city'"
        );

        let err = ConfigError::MissingDefault {
            table: "barcode_status",
        };
        assert_eq!(
            format!("{err}"),
            "code table 'barcode_status' has no DEFAULT entry"
        );
    }
}
