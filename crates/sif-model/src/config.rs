//! Conversion configuration.
//!
//! Loaded once from TOML and passed by reference to the validator, decoder
//! and mapper. The built-in configuration describes the Voyager patron SIF
//! layout and a set of Alma codes; a site-specific file can replace it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::code_table::CodeTable;
use crate::error::{ConfigError, Result};
use crate::layout::SifLayout;
use crate::record::fields;

const BUILTIN_CONFIG: &str = include_str!("../config/default.toml");

/// Default date strings used when a SIF date field is blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultDates {
    pub patron_expiry: String,
    pub patron_purge: String,
    pub address_begin: String,
    pub address_end: String,
}

/// Constant codes written into every user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSettings {
    pub user_status: String,
    pub note_type: String,
    pub identifier_type: String,
    pub primary_email_type: String,
    pub default_email_type: String,
}

/// Code tables translating SIF codes to target codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeTables {
    pub address_type: CodeTable,
    pub barcode_status: CodeTable,
}

/// Everything the conversion needs besides the input itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionConfig {
    pub layout: SifLayout,
    pub defaults: DefaultDates,
    pub codes: CodeSettings,
    pub tables: CodeTables,
}

impl ConversionConfig {
    /// The embedded Voyager → Alma configuration.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CONFIG, "<builtin>")
    }

    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::from_toml_str(&contents, &path.display().to_string())
    }

    /// Load `path` when given, otherwise the built-in configuration.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    /// Parse and validate TOML text; `origin` names the source in errors.
    pub fn from_toml_str(contents: &str, origin: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(|e| ConfigError::Toml {
            origin: origin.to_string(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check layouts and code tables for internal consistency.
    pub fn validate(&self) -> Result<()> {
        self.layout.base.validate("base")?;
        self.layout.address.validate("address")?;
        self.layout.base.require("base", fields::REQUIRED_BASE)?;
        self.layout
            .address
            .require("address", fields::REQUIRED_ADDRESS)?;
        if !self.tables.address_type.has_default() {
            return Err(ConfigError::MissingDefault {
                table: "address_type",
            });
        }
        if !self.tables.barcode_status.has_default() {
            return Err(ConfigError::MissingDefault {
                table: "barcode_status",
            });
        }
        Ok(())
    }

    /// Serialize back to TOML (used by `sif2sis layout --dump`).
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_config_is_valid() {
        let config = ConversionConfig::builtin().unwrap();
        assert_eq!(config.layout.base.width(), 455);
        assert_eq!(config.layout.address.width(), 419);
        assert_eq!(config.layout.note_max_len, 1000);
        assert_eq!(config.tables.address_type.lookup("1"), "home");
        assert_eq!(config.tables.barcode_status.lookup("x"), "ACTIVE");
    }

    #[test]
    fn builtin_config_round_trips_through_toml() {
        let config = ConversionConfig::builtin().unwrap();
        let text = config.to_toml_string().unwrap();
        let reparsed = ConversionConfig::from_toml_str(&text, "dump").unwrap();
        assert_eq!(config, reparsed);
    }
}
