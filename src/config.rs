/*!
 * Configuration handling for textdump
 */

use std::path::PathBuf;

use clap::Parser;

use crate::ensure;
use crate::error::Result;

/// Suffix appended to the directory's base name to form the output file name
pub const OUTPUT_SUFFIX: &str = "_all_text_files.txt";

/// Command-line arguments for textdump
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "textdump",
    version = env!("CARGO_PKG_VERSION"),
    about = "Concatenate the text files of a directory into a single document",
    long_about = "Scans the top level of a directory, keeps the files that look like UTF-8 text and writes them into <dir>_all_text_files.txt in the working directory."
)]
pub struct Args {
    /// Directory to scan (prompted for when omitted)
    pub directory: Option<String>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory to scan, as given by the user
    pub target_dir: PathBuf,

    /// Directory the output document is written to
    pub output_dir: PathBuf,

    /// Output document file name (no directory component)
    pub output_file: String,
}

impl Config {
    /// Configuration writing into the current working directory
    pub fn from_directory(directory: &str) -> Self {
        Self::with_output_dir(directory, PathBuf::from("."))
    }

    /// Configuration writing into `output_dir`
    pub fn with_output_dir(directory: &str, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: PathBuf::from(directory),
            output_dir: output_dir.into(),
            output_file: output_file_name(directory),
        }
    }

    /// Full path of the output document
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.target_dir.is_dir(),
            InvalidTarget,
            "{}",
            self.target_dir.display()
        );
        Ok(())
    }
}

/// Derive `<basename>_all_text_files.txt` from a directory argument
///
/// Trailing separators are stripped first, so `docs/` and `docs` agree.
/// The base name is the last literal component, `.` and `..` included.
pub fn output_file_name(directory: &str) -> String {
    let trimmed = directory.trim_end_matches(std::path::MAIN_SEPARATOR);
    let base = trimmed
        .rsplit(std::path::MAIN_SEPARATOR)
        .next()
        .unwrap_or_default();
    format!("{}{}", base, OUTPUT_SUFFIX)
}
