//! Line-oriented SIF file reader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{ReadError, Result};

/// One raw input line without its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SifLine {
    /// 1-based line number.
    pub number: usize,
    pub bytes: Vec<u8>,
}

/// Reads a SIF file one line at a time.
///
/// Lines are returned as raw bytes; `\n` and `\r\n` terminators are removed.
pub struct SifReader<R: BufRead> {
    reader: R,
    line_number: usize,
}

impl<R: BufRead> SifReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
        }
    }

    /// Read the next line, or `None` at end of input.
    pub fn next_line(&mut self) -> Result<Option<SifLine>> {
        let mut bytes = Vec::new();
        let read = self.reader.read_until(b'\n', &mut bytes)?;
        if read == 0 {
            return Ok(None);
        }
        if bytes.last() == Some(&b'\n') {
            bytes.pop();
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
        }
        self.line_number += 1;
        Ok(Some(SifLine {
            number: self.line_number,
            bytes,
        }))
    }

    /// Number of lines read so far.
    pub fn lines_read(&self) -> usize {
        self.line_number
    }
}

impl SifReader<BufReader<File>> {
    /// Open a SIF file for reading.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ReadError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ReadError::Io(e)
            }
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Iterator for SifReader<R> {
    type Item = Result<SifLine>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}
