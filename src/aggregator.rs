/*!
 * Concatenation of a directory's text files into one output document
 */

use std::fs;
use std::time::Instant;

use indicatif::ProgressBar;
use tracing::{debug, info, warn};

use crate::classifier;
use crate::config::Config;
use crate::error::Result;
use crate::report::{ExtractionReport, FileReportInfo};
use crate::scanner::Scanner;
use crate::types::{CandidateFile, Record};
use crate::writer::{decode_ignoring_errors, RecordWriter};

/// Drives one extraction run: scan, classify, write
pub struct Aggregator {
    /// Run configuration
    config: Config,
    /// Progress bar
    progress: ProgressBar,
}

impl Aggregator {
    /// Create a new aggregator
    pub fn new(config: Config, progress: ProgressBar) -> Self {
        Self { config, progress }
    }

    /// Produce the output document and report what went into it
    ///
    /// Nothing is created when the target is not a directory.
    pub fn run(&self) -> Result<ExtractionReport> {
        let start_time = Instant::now();
        self.config.validate()?;

        let scanner = Scanner::new(self.config.clone());
        let candidates = scanner.scan()?;
        self.progress.set_length(candidates.len() as u64);

        let output_path = self.config.output_path();
        let mut writer = RecordWriter::create(&output_path)?;
        let mut report = ExtractionReport {
            output_file: output_path.clone(),
            source_dir: scanner.root().to_path_buf(),
            files_inspected: candidates.len(),
            ..ExtractionReport::default()
        };

        for candidate in &candidates {
            self.progress.inc(1);
            self.progress
                .set_message(format!("Current file: {}", candidate.name));

            match self.load_record(candidate) {
                Some(record) => {
                    writer.write_record(&record)?;
                    report
                        .records
                        .push(FileReportInfo::measure(&record.name, &record.content));
                }
                None => report.skipped.push(candidate.name.clone()),
            }
        }

        report.bytes_written = writer.bytes_written();
        writer.finish()?;
        report.duration = start_time.elapsed();

        info!(
            output = %output_path.display(),
            written = report.records.len(),
            skipped = report.skipped.len(),
            "extraction complete"
        );
        Ok(report)
    }

    /// Classify a candidate and read it fully if it is text
    fn load_record(&self, candidate: &CandidateFile) -> Option<Record> {
        if !classifier::is_text_file(&candidate.path) {
            debug!(name = %candidate.name, "skipping binary file");
            return None;
        }

        match fs::read(&candidate.path) {
            Ok(bytes) => Some(Record {
                name: candidate.name.clone(),
                content: decode_ignoring_errors(&bytes),
            }),
            Err(e) => {
                warn!(name = %candidate.name, error = %e, "failed to read text file, skipping");
                None
            }
        }
    }
}

/// Extract the text files of `directory` into the working directory
pub fn extract_text_files(directory: &str) -> Result<ExtractionReport> {
    Aggregator::new(Config::from_directory(directory), ProgressBar::hidden()).run()
}
