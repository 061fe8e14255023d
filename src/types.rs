/*!
 * Core types and data structures for the textdump application
 */

use std::path::PathBuf;

/// Verdict of the text classifier for a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// Text file whose content goes into the output document
    Text,
    /// Binary or unreadable file (skipped)
    Binary,
}

impl FileType {
    /// Whether the file should be concatenated
    pub fn is_text(self) -> bool {
        self == FileType::Text
    }
}

/// A regular file found directly inside the target directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// File name as listed in the directory
    pub name: String,
    /// Full path used to open the file
    pub path: PathBuf,
}

/// One file's block inside the output document
#[derive(Debug, Clone)]
pub struct Record {
    /// Name of the source file, used in the header line
    pub name: String,
    /// Decoded file content
    pub content: String,
}

impl Record {
    /// Header line written before the content
    pub fn header(&self) -> String {
        format!("--- Contents of {} ---\n", self.name)
    }
}
