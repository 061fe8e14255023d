/*!
 * textdump - Concatenate the text files of a directory into one document
 *
 * The top level of a directory is scanned, files that look like UTF-8 text
 * are kept, and their contents are written one after another into
 * `<dir>_all_text_files.txt`, each under a `--- Contents of <name> ---`
 * header.
 */

pub mod aggregator;
pub mod classifier;
pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;

#[cfg(test)]
mod tests;

// Re-export main components for easier access
pub use aggregator::{extract_text_files, Aggregator};
pub use classifier::{classify, is_text_file};
pub use config::{output_file_name, Config};
pub use error::{Result, TextDumpError};
pub use report::{ExtractionReport, FileReportInfo, ReportFormat, Reporter};
pub use scanner::Scanner;
pub use types::{CandidateFile, FileType, Record};
pub use writer::RecordWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
