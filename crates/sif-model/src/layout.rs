//! Fixed-width field layouts.
//!
//! A SIF line is a base block, a single address-count digit, 1 to 9 address
//! blocks and an optional free-text note:
//!
//! | Offset                 | Width                    | Content              |
//! |------------------------|--------------------------|----------------------|
//! | 0                      | `base.width()`           | base fields          |
//! | `base.width()`         | 1                        | address count digit  |
//! | `base.width() + 1`     | `n * address.width()`    | address blocks       |
//! | after last address     | up to `note_max_len`     | note                 |

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default maximum byte span of the trailing note.
pub const DEFAULT_NOTE_MAX_LEN: usize = 1000;

/// One named fixed-width field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub width: usize,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, width: usize) -> Self {
        Self {
            name: name.into(),
            width,
        }
    }
}

/// Ordered list of fields making up one fixed-width block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldLayout {
    fields: Vec<FieldSpec>,
}

impl FieldLayout {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// Total byte width of the block.
    pub fn width(&self) -> usize {
        self.fields.iter().map(|field| field.width).sum()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name == name)
    }

    /// Fields paired with their offset relative to the start of the block.
    pub fn with_offsets(&self) -> Vec<(usize, &FieldSpec)> {
        let mut offset = 0;
        self.fields
            .iter()
            .map(|field| {
                let start = offset;
                offset += field.width;
                (start, field)
            })
            .collect()
    }

    pub(crate) fn validate(&self, layout: &'static str) -> Result<()> {
        if self.fields.is_empty() {
            return Err(ConfigError::EmptyLayout { layout });
        }
        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.width == 0 {
                return Err(ConfigError::ZeroWidth {
                    layout,
                    name: field.name.clone(),
                });
            }
            if !seen.insert(field.name.as_str()) {
                return Err(ConfigError::DuplicateField {
                    layout,
                    name: field.name.clone(),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn require(&self, layout: &'static str, names: &[&str]) -> Result<()> {
        match names.iter().find(|name| !self.contains(name)) {
            Some(name) => Err(ConfigError::missing_field(layout, *name)),
            None => Ok(()),
        }
    }
}

impl FromIterator<FieldSpec> for FieldLayout {
    fn from_iter<I: IntoIterator<Item = FieldSpec>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// The complete line layout: base block, repeated address block and note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SifLayout {
    pub base: FieldLayout,
    pub address: FieldLayout,
    #[serde(default = "default_note_max_len")]
    pub note_max_len: usize,
}

fn default_note_max_len() -> usize {
    DEFAULT_NOTE_MAX_LEN
}

impl SifLayout {
    /// Offset of the address-count digit.
    pub fn address_count_offset(&self) -> usize {
        self.base.width()
    }

    /// Shortest line that can hold the base block and one address block.
    pub fn min_record_len(&self) -> usize {
        self.base.width() + self.address.width()
    }
}
