//! Alma SIS user XML generation.
//!
//! This crate turns decoded Voyager patron records into Alma SIS user XML:
//!
//! - **Mapping**: [`map_user`] builds a [`User`] tree from a [`sif_model::PatronRecord`]
//! - **Serialization**: compact `<user>` fragments and indented previews
//! - **Document**: [`SisDocumentWriter`] streams users and writes the
//!   `<users total_record_count="N">` root once the count is known
//! - **Conversion**: [`convert_file`] runs the whole pipeline for one file
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use sif_model::ConversionConfig;
//! use sis_output::{ConvertOptions, convert_file, output_path_for};
//!
//! let config = ConversionConfig::builtin().unwrap();
//! let input = Path::new("patrons.sif");
//! let summary = convert_file(
//!     input,
//!     &output_path_for(input, None),
//!     &config,
//!     &ConvertOptions::default(),
//! )
//! .unwrap();
//! println!("{} users written", summary.records_written);
//! ```

mod convert;
mod document;
mod error;
pub mod mapper;
mod user;
pub mod xml;

pub use convert::{
    ConversionSummary, ConvertOptions, OUTPUT_EXTENSION, PROGRESS_INTERVAL, REDACTED_VALUE,
    convert_file, output_path_for,
};
pub use document::{LINE_END, SisDocumentWriter};
pub use error::{OutputError, Result};
pub use mapper::{alma_date, clean_phone, map_user};
pub use user::{
    ContactInfo, PhoneType, User, UserAddress, UserEmail, UserIdentifier, UserNote, UserPhone,
};
pub use xml::{user_fragment, user_preview, write_user};
