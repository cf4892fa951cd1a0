//! Structural checks run before a line is decoded.

use sif_model::SifLayout;
use tracing::warn;

use crate::error::LineRejection;

/// Largest number of address blocks a line may carry.
pub const MAX_ADDRESS_COUNT: usize = 9;

/// Outcome of validating one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCheck {
    /// Empty line; skipped silently.
    Blank,
    /// Line can be decoded; carries the address count.
    Valid { address_count: usize },
    /// Line must be skipped.
    Rejected(LineRejection),
}

/// Check `line` (without its terminator) against the layout.
///
/// `line_number` is 1-based and only used in the rejection.
pub fn check_line(line: &[u8], line_number: usize, layout: &SifLayout) -> LineCheck {
    if line.is_empty() {
        return LineCheck::Blank;
    }
    let required = layout.min_record_len();
    if line.len() < required {
        return LineCheck::Rejected(LineRejection::TooShort {
            line: line_number,
            required,
            actual: line.len(),
        });
    }
    let digit = line[layout.address_count_offset()];
    match address_count(digit) {
        Some(address_count) => LineCheck::Valid { address_count },
        None => LineCheck::Rejected(LineRejection::InvalidAddressCount {
            line: line_number,
            found: digit,
        }),
    }
}

/// Boolean form of [`check_line`] that logs rejections.
pub fn is_valid(line: &[u8], line_number: usize, layout: &SifLayout) -> bool {
    match check_line(line, line_number, layout) {
        LineCheck::Valid { .. } => true,
        LineCheck::Blank => false,
        LineCheck::Rejected(rejection) => {
            warn!(line = rejection.line(), "{rejection}");
            false
        }
    }
}

/// Parse an address-count digit, accepting `'1'..='9'` only.
pub fn address_count(digit: u8) -> Option<usize> {
    match digit {
        b'1'..=b'9' => Some(usize::from(digit - b'0')),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sif_model::{DEFAULT_NOTE_MAX_LEN, FieldSpec};

    fn layout() -> SifLayout {
        SifLayout {
            base: vec![FieldSpec::new("id", 4)].into_iter().collect(),
            address: vec![FieldSpec::new("type", 1), FieldSpec::new("line", 5)]
                .into_iter()
                .collect(),
            note_max_len: DEFAULT_NOTE_MAX_LEN,
        }
    }

    #[test]
    fn empty_line_is_blank() {
        assert_eq!(check_line(b"", 1, &layout()), LineCheck::Blank);
        assert!(!is_valid(b"", 1, &layout()));
    }

    #[test]
    fn short_line_is_rejected() {
        assert_eq!(
            check_line(b"0001", 2, &layout()),
            LineCheck::Rejected(LineRejection::TooShort {
                line: 2,
                required: 10,
                actual: 4,
            })
        );
    }

    #[test]
    fn address_count_must_be_one_to_nine() {
        assert_eq!(
            check_line(b"00012abcdef", 1, &layout()),
            LineCheck::Valid { address_count: 2 }
        );
        for digit in [b'0', b'x', b' '] {
            let mut line = b"0001_1abcde".to_vec();
            line[4] = digit;
            assert_eq!(
                check_line(&line, 5, &layout()),
                LineCheck::Rejected(LineRejection::InvalidAddressCount {
                    line: 5,
                    found: digit,
                })
            );
        }
    }

    #[test]
    fn address_count_digits() {
        assert_eq!(address_count(b'1'), Some(1));
        assert_eq!(address_count(b'9'), Some(MAX_ADDRESS_COUNT));
        assert_eq!(address_count(b'0'), None);
        assert_eq!(address_count(b'a'), None);
    }
}
