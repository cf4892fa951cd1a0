use std::path::PathBuf;

use sis_output::ConversionSummary;

/// Outcome of one `convert` invocation.
#[derive(Debug, Default)]
pub struct ConvertReport {
    pub files: Vec<ConversionSummary>,
    pub failures: Vec<FileFailure>,
}

impl ConvertReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

#[derive(Debug)]
pub struct FileFailure {
    pub input: PathBuf,
    pub error: String,
}
