//! Assembly of one SIF line into a [`PatronRecord`].

use sif_model::{Address, PatronRecord, SifLayout};
use tracing::{trace, warn};

use crate::decode::{decode_fields, decode_text, slice};
use crate::error::{ReadError, Result};
use crate::validate::{LineCheck, check_line};

/// Result of parsing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Empty line.
    Blank,
    /// Line was skipped; the rejection has been logged.
    Rejected(crate::LineRejection),
    /// Line decoded into a record.
    Record(PatronRecord),
}

/// Validate and decode one line, logging rejections.
pub fn parse_line(line: &[u8], line_number: usize, layout: &SifLayout) -> Result<LineOutcome> {
    match check_line(line, line_number, layout) {
        LineCheck::Blank => Ok(LineOutcome::Blank),
        LineCheck::Rejected(rejection) => {
            warn!(line = line_number, "{rejection}");
            Ok(LineOutcome::Rejected(rejection))
        }
        LineCheck::Valid { address_count } => {
            assemble(line, line_number, layout, address_count).map(LineOutcome::Record)
        }
    }
}

/// Decode a line into a record.
///
/// The line is validated first; an invalid line yields
/// [`ReadError::Rejected`].
pub fn assemble_record(line: &[u8], line_number: usize, layout: &SifLayout) -> Result<PatronRecord> {
    match check_line(line, line_number, layout) {
        LineCheck::Valid { address_count } => assemble(line, line_number, layout, address_count),
        LineCheck::Rejected(rejection) => Err(ReadError::Rejected(rejection)),
        LineCheck::Blank => Err(ReadError::Rejected(crate::LineRejection::TooShort {
            line: line_number,
            required: layout.min_record_len(),
            actual: 0,
        })),
    }
}

fn assemble(
    line: &[u8],
    line_number: usize,
    layout: &SifLayout,
    address_count: usize,
) -> Result<PatronRecord> {
    let (base, base_end) = decode_fields(&layout.base, line, 0, line_number)?;

    // Skip the address-count digit.
    let mut pos = base_end + 1;
    let mut addresses = Vec::with_capacity(address_count);
    for _ in 0..address_count {
        let (fields, end) = decode_fields(&layout.address, line, pos, line_number)?;
        addresses.push(Address::new(fields));
        pos = end;
    }

    let note = if pos < line.len() {
        let text = decode_text(slice(line, pos, layout.note_max_len)).ok_or_else(|| {
            ReadError::Encoding {
                line: line_number,
                field: "note".to_string(),
            }
        })?;
        Some(text)
    } else {
        None
    };

    trace!(
        line = line_number,
        addresses = addresses.len(),
        has_note = note.as_deref().is_some_and(|text| !text.is_empty()),
        "assembled record"
    );
    Ok(PatronRecord {
        base,
        addresses,
        note,
    })
}
