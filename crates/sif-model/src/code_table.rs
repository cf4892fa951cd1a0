use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Key of the mandatory fallback entry.
pub const DEFAULT_KEY: &str = "DEFAULT";

/// Key → value translation table with a `DEFAULT` fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeTable {
    entries: BTreeMap<String, String>,
}

impl CodeTable {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Exact entry for `code`, if any.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    /// Entry for `code`, falling back to the `DEFAULT` entry.
    pub fn lookup(&self, code: &str) -> &str {
        self.get(code)
            .or_else(|| self.get(DEFAULT_KEY))
            .unwrap_or_default()
    }

    pub fn has_default(&self) -> bool {
        self.entries.contains_key(DEFAULT_KEY)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}
