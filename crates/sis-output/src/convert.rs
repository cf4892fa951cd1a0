//! Whole-file SIF → SIS conversion.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use sif_model::ConversionConfig;
use sif_reader::{LineOutcome, SifReader, parse_line};
use tracing::{debug, info, info_span};

use crate::document::SisDocumentWriter;
use crate::error::Result;
use crate::mapper::map_user;
use crate::xml::user_preview;

/// Extension appended to the input file name to form the output name.
pub const OUTPUT_EXTENSION: &str = "sis.xml";

/// Number of converted records between progress events.
pub const PROGRESS_INTERVAL: usize = 100;

/// Placeholder logged instead of patron identifiers.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Options for [`convert_file`].
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Number of converted users to keep as indented XML for display.
    pub preview_limit: usize,
    /// Whether patron identifiers may appear in log events.
    pub log_patron_data: bool,
}

/// Outcome of converting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub lines_read: usize,
    pub records_written: usize,
    pub records_rejected: usize,
    pub blank_lines: usize,
    pub elapsed: Duration,
    /// Indented XML of the first `preview_limit` users.
    pub preview: Vec<String>,
}

/// Default output path: `<input file name>.sis.xml`, in `output_dir` when
/// given, otherwise next to the input.
pub fn output_path_for(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|name| format!("{}.{OUTPUT_EXTENSION}", name.to_string_lossy()))
        .unwrap_or_else(|| format!("output.{OUTPUT_EXTENSION}"));
    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

/// Convert one SIF file into one SIS document.
///
/// Invalid lines are logged and skipped. Read, decode and write failures
/// abort the file; the output is only created once every line is converted.
pub fn convert_file(
    input: &Path,
    output: &Path,
    config: &ConversionConfig,
    options: &ConvertOptions,
) -> Result<ConversionSummary> {
    let span = info_span!("convert", file = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let mut reader = SifReader::open(input)?;
    let mut document = SisDocumentWriter::create(output)?;
    let mut records_rejected = 0usize;
    let mut blank_lines = 0usize;
    let mut preview = Vec::new();

    while let Some(line) = reader.next_line()? {
        let record = match parse_line(&line.bytes, line.number, &config.layout)? {
            LineOutcome::Record(record) => record,
            LineOutcome::Rejected(_) => {
                records_rejected += 1;
                continue;
            }
            LineOutcome::Blank => {
                blank_lines += 1;
                continue;
            }
        };
        let user = map_user(&record, config);
        let patron = if options.log_patron_data {
            user.primary_id.as_str()
        } else {
            REDACTED_VALUE
        };
        debug!(
            line = line.number,
            patron,
            addresses = record.addresses.len(),
            "converted record"
        );
        document.append(&user)?;
        if preview.len() < options.preview_limit {
            preview.push(user_preview(&user)?);
        }
        if document.count() % PROGRESS_INTERVAL == 0 {
            info!(records = document.count(), "records converted");
        }
    }

    let lines_read = reader.lines_read();
    let records_written = document.finish()?;
    let elapsed = start.elapsed();
    info!(
        lines_read,
        records_written,
        records_rejected,
        duration_ms = elapsed.as_millis(),
        output = %output.display(),
        "conversion complete"
    );
    Ok(ConversionSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        lines_read,
        records_written,
        records_rejected,
        blank_lines,
        elapsed,
        preview,
    })
}
