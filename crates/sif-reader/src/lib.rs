//! Voyager patron SIF reader.
//!
//! A SIF file holds one patron per line: fixed-width base fields, a single
//! address-count digit, that many fixed-width address blocks and an optional
//! free-text note. Character data is in a legacy single-byte encoding.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use sif_model::ConversionConfig;
//! use sif_reader::{LineOutcome, SifReader, parse_line};
//!
//! let config = ConversionConfig::builtin().unwrap();
//! for line in SifReader::open(Path::new("patrons.sif")).unwrap() {
//!     let line = line.unwrap();
//!     if let LineOutcome::Record(record) =
//!         parse_line(&line.bytes, line.number, &config.layout).unwrap()
//!     {
//!         println!("{} has {} addresses", record.patron_id(), record.addresses.len());
//!     }
//! }
//! ```

mod assemble;
pub mod decode;
mod error;
mod reader;
pub mod validate;

pub use assemble::{LineOutcome, assemble_record, parse_line};
pub use decode::{decode_fields, decode_text};
pub use error::{LineRejection, ReadError, Result};
pub use reader::{SifLine, SifReader};
pub use validate::{LineCheck, MAX_ADDRESS_COUNT, check_line, is_valid};
