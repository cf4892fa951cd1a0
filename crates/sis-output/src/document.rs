//! Two-stage SIS document writer.
//!
//! The root element carries the number of users, which is only known once
//! the last record is converted. Users are therefore streamed to an
//! intermediate file first; [`SisDocumentWriter::finish`] then writes the
//! root start tag with the final count to the real output and copies the
//! intermediate contents after it.

use std::fs::File;
use std::io::{self, BufWriter, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::{OutputError, Result};
use crate::user::User;
use crate::xml::{RECORD_COUNT_ATTRIBUTE, ROOT_ELEMENT, write_user};

/// Terminator written after the root start tag and after every user.
pub const LINE_END: &[u8] = b"\r\n";

/// Streams users to an intermediate file, then composes the final document.
pub struct SisDocumentWriter {
    output_path: PathBuf,
    scratch: BufWriter<NamedTempFile>,
    count: usize,
}

impl SisDocumentWriter {
    /// Create the intermediate file next to `output_path`.
    ///
    /// Nothing is written to `output_path` until [`Self::finish`].
    pub fn create(output_path: &Path) -> Result<Self> {
        let dir = match output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let prefix = output_path
            .file_name()
            .map(|name| format!(".{}.", name.to_string_lossy()))
            .unwrap_or_else(|| ".sis.".to_string());
        let scratch = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|e| OutputError::create(dir, e))?;
        debug!(scratch = %scratch.path().display(), "created intermediate file");
        Ok(Self {
            output_path: output_path.to_path_buf(),
            scratch: BufWriter::new(scratch),
            count: 0,
        })
    }

    /// Append one user to the intermediate file.
    pub fn append(&mut self, user: &User) -> Result<()> {
        write_user(&mut Writer::new(&mut self.scratch), user)?;
        self.scratch.write_all(LINE_END)?;
        self.count += 1;
        Ok(())
    }

    /// Number of users appended so far.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Close the root element, write the final document and delete the
    /// intermediate file. Returns the number of users written.
    pub fn finish(self) -> Result<usize> {
        let Self {
            output_path,
            mut scratch,
            count,
        } = self;

        Writer::new(&mut scratch).write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))?;
        let mut scratch = scratch.into_inner().map_err(io::IntoInnerError::into_error)?;
        scratch.flush()?;
        scratch.seek(SeekFrom::Start(0))?;

        let file = File::create(&output_path).map_err(|e| OutputError::create(&output_path, e))?;
        let mut xml = Writer::new(BufWriter::new(file));
        let mut root = BytesStart::new(ROOT_ELEMENT);
        root.push_attribute((RECORD_COUNT_ATTRIBUTE, count.to_string().as_str()));
        xml.write_event(Event::Start(root))?;
        xml.get_mut().write_all(LINE_END)?;
        io::copy(&mut scratch, xml.get_mut())?;
        xml.into_inner().flush()?;

        let scratch_path = scratch.path().to_path_buf();
        if let Err(error) = scratch.close() {
            warn!(
                path = %scratch_path.display(),
                %error,
                "failed to delete intermediate file; remove it manually"
            );
        }
        debug!(output = %output_path.display(), users = count, "wrote SIS document");
        Ok(count)
    }
}
