/*!
 * Text/binary classification heuristic
 *
 * Only the first [`SNIFF_LEN`] bytes of a file are inspected: a NUL byte or
 * invalid UTF-8 in that prefix marks the file as binary. Files that cannot
 * be opened or read are treated as binary too.
 */

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::types::FileType;

/// Number of leading bytes inspected by the classifier
pub const SNIFF_LEN: usize = 1024;

/// Classify an in-memory prefix
pub fn classify_bytes(prefix: &[u8]) -> FileType {
    if prefix.contains(&0) {
        return FileType::Binary;
    }

    match std::str::from_utf8(prefix) {
        Ok(_) => FileType::Text,
        Err(_) => FileType::Binary,
    }
}

/// Classify the file at `path`, never failing
pub fn classify(path: &Path) -> FileType {
    match read_prefix(path) {
        Ok(prefix) => {
            let verdict = classify_bytes(&prefix);
            debug!(path = %path.display(), ?verdict, "classified");
            verdict
        }
        // Unreadable files are skipped, not reported
        Err(e) => {
            debug!(path = %path.display(), error = %e, "unreadable, treating as binary");
            FileType::Binary
        }
    }
}

/// Returns true if the file at `path` looks like text
pub fn is_text_file(path: &Path) -> bool {
    classify(path).is_text()
}

/// Read up to SNIFF_LEN bytes, looping over short reads
fn read_prefix(path: &Path) -> io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut prefix = Vec::with_capacity(SNIFF_LEN);
    file.take(SNIFF_LEN as u64).read_to_end(&mut prefix)?;
    Ok(prefix)
}
