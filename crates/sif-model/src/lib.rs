//! Data model for Voyager patron SIF conversion.
//!
//! This crate holds the pieces shared by the reader and the XML output:
//!
//! - **Layouts**: ordered fixed-width field definitions for the base record
//!   and the repeated address block
//! - **Code tables**: SIF code → target code lookups with a `DEFAULT` fallback
//! - **Configuration**: default dates, constant codes and tables, loaded from TOML
//! - **Records**: the decoded [`PatronRecord`] handed from the reader to the mapper

pub mod code_table;
pub mod config;
pub mod error;
pub mod layout;
pub mod record;

pub use code_table::{CodeTable, DEFAULT_KEY};
pub use config::{CodeSettings, CodeTables, ConversionConfig, DefaultDates};
pub use error::{ConfigError, Result};
pub use layout::{DEFAULT_NOTE_MAX_LEN, FieldLayout, FieldSpec, SifLayout};
pub use record::{ADDRESS_TYPE_EMAIL, ADDRESS_TYPE_POSTAL, Address, FieldValues, PatronRecord, fields};
