/*!
 * Directory scanning functionality
 */

use std::path::Path;

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error;
use crate::error::Result;
use crate::types::CandidateFile;

/// Scanner for the top level of the target directory
pub struct Scanner {
    /// Scanner configuration
    config: Config,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// List the candidate files in directory-listing order
    ///
    /// Only regular files directly inside the target are returned (links are
    /// followed, so a symlink to a regular file counts). The output document
    /// is excluded by name.
    pub fn scan(&self) -> Result<Vec<CandidateFile>> {
        let root = &self.config.target_dir;
        let mut candidates = Vec::new();

        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = match entry {
                Ok(entry) => entry,
                // The root itself failing to list is fatal
                Err(e) if e.depth() == 0 => {
                    return Err(error!(Scanner, "cannot list {}: {}", root.display(), e));
                }
                // Broken links and vanished entries are simply not files
                Err(e) => {
                    debug!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };

            if let Some(candidate) = self.candidate(&entry) {
                candidates.push(candidate);
            }
        }

        debug!(
            dir = %root.display(),
            count = candidates.len(),
            "scan complete"
        );
        Ok(candidates)
    }

    /// Turn a listing entry into a candidate, if it qualifies
    fn candidate(&self, entry: &DirEntry) -> Option<CandidateFile> {
        if !entry.file_type().is_file() {
            return None;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if self.is_output_file(&name) {
            debug!(name = %name, "skipping output document");
            return None;
        }
        if entry.file_name().to_str().is_none() {
            warn!(path = %entry.path().display(), "file name is not valid UTF-8");
        }

        Some(CandidateFile {
            name,
            path: entry.path().to_path_buf(),
        })
    }

    /// Don't process the output file itself
    pub fn is_output_file(&self, name: &str) -> bool {
        name == self.config.output_file
    }

    /// Directory being scanned
    pub fn root(&self) -> &Path {
        &self.config.target_dir
    }
}
