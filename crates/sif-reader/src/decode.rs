//! Fixed-width field decoding.
//!
//! Every field is sliced by byte width, stripped of trailing whitespace and
//! converted from ISO-8859-1 on its own, so a bad byte only ever affects
//! the field that holds it.

use encoding_rs::mem::decode_latin1;
use sif_model::{FieldLayout, FieldValues};

use crate::error::{ReadError, Result};

/// Bytes removed from the end of every field.
const TRAILING_WHITESPACE: &[u8] = b" \t\n\r\0\x0b";

/// Decode `layout` from `data` starting at `start`.
///
/// Returns the decoded fields and the offset just past the block. The cursor
/// advances by each field's full width whether or not the line is long
/// enough to hold it; missing bytes decode as empty strings.
pub fn decode_fields(
    layout: &FieldLayout,
    data: &[u8],
    start: usize,
    line_number: usize,
) -> Result<(FieldValues, usize)> {
    let mut fields = FieldValues::new();
    let mut pos = start;
    for field in layout.iter() {
        let value = decode_text(slice(data, pos, field.width)).ok_or_else(|| {
            ReadError::Encoding {
                line: line_number,
                field: field.name.clone(),
            }
        })?;
        fields.insert(field.name.as_str(), value);
        pos += field.width;
    }
    Ok((fields, pos))
}

/// Bytes `data[pos..pos + width]`, clamped to the end of `data`.
pub fn slice(data: &[u8], pos: usize, width: usize) -> &[u8] {
    if pos >= data.len() {
        return &[];
    }
    let end = pos.saturating_add(width).min(data.len());
    &data[pos..end]
}

/// Trim trailing whitespace and convert one field from ISO-8859-1 to UTF-8.
///
/// Every byte maps to the code point of the same value. Returns `None` when
/// the field holds a character XML 1.0 cannot carry (C0 controls other than
/// tab, line feed and carriage return).
pub fn decode_text(bytes: &[u8]) -> Option<String> {
    let text = decode_latin1(trim_end(bytes));
    text.chars()
        .all(is_xml_char)
        .then(|| text.into_owned())
}

/// XML 1.0 `Char` production, restricted to what ISO-8859-1 can produce.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r') || c >= ' '
}

fn trim_end(bytes: &[u8]) -> &[u8] {
    let keep = bytes
        .iter()
        .rposition(|byte| !TRAILING_WHITESPACE.contains(byte))
        .map_or(0, |idx| idx + 1);
    &bytes[..keep]
}
