/*!
 * Output document writer for textdump
 */

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, ResultExt};
use crate::types::Record;

/// Separator written after every record's content
pub const RECORD_SEPARATOR: &str = "\n\n";

/// Append-only writer for the output document
///
/// The file is truncated on creation. Dropping the writer closes it;
/// call [`RecordWriter::finish`] to surface flush errors.
pub struct RecordWriter<W: Write = BufWriter<File>> {
    inner: W,
    path: PathBuf,
    bytes_written: u64,
}

impl RecordWriter {
    /// Create (or truncate) the output document at `path`
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        Ok(Self::from_writer(BufWriter::new(file), path))
    }
}

impl<W: Write> RecordWriter<W> {
    /// Wrap an arbitrary sink
    pub fn from_writer(inner: W, path: &Path) -> Self {
        Self {
            inner,
            path: path.to_path_buf(),
            bytes_written: 0,
        }
    }

    /// Append one record: header, content, blank-line separator
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        let header = record.header();
        for part in [header.as_str(), record.content.as_str(), RECORD_SEPARATOR] {
            self.inner
                .write_all(part.as_bytes())
                .with_context(|| format!("writing {}", self.path.display()))?;
            self.bytes_written += part.len() as u64;
        }
        Ok(())
    }

    /// Total bytes written so far
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flush and hand back the sink
    pub fn finish(mut self) -> Result<W> {
        self.inner
            .flush()
            .with_context(|| format!("flushing {}", self.path.display()))?;
        Ok(self.inner)
    }
}

/// Decode UTF-8, dropping invalid byte sequences
///
/// Line endings are kept as-is; `\r\n` and bare `\r` are not normalized.
pub fn decode_ignoring_errors(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}
