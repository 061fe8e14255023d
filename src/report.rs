/*!
 * Reporting functionality for textdump
 *
 * Renders the result of an extraction run as console tables using the
 * tabled library.
 */

use std::path::PathBuf;
use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::utils::format_file_size;

/// Information about one record in the report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReportInfo {
    /// Source file name
    pub name: String,
    /// Number of lines in the decoded content
    pub lines: usize,
    /// Number of characters in the decoded content
    pub chars: usize,
}

impl FileReportInfo {
    /// Measure decoded content
    pub fn measure(name: &str, content: &str) -> Self {
        Self {
            name: name.to_string(),
            lines: content.lines().count(),
            chars: content.chars().count(),
        }
    }
}

/// Outcome of one extraction run
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Output document path
    pub output_file: PathBuf,
    /// Directory that was scanned
    pub source_dir: PathBuf,
    /// Time taken for the whole run
    pub duration: Duration,
    /// Number of candidate files inspected
    pub files_inspected: usize,
    /// Records written, in output order
    pub records: Vec<FileReportInfo>,
    /// Files skipped as binary or unreadable, in listing order
    pub skipped: Vec<String>,
    /// Size of the output document in bytes
    pub bytes_written: u64,
}

impl ExtractionReport {
    /// Total lines across all records
    pub fn total_lines(&self) -> usize {
        self.records.iter().map(|r| r.lines).sum()
    }

    /// Total characters across all records
    pub fn total_chars(&self) -> usize {
        self.records.iter().map(|r| r.chars).sum()
    }
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for extraction results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Confirmation line naming the output file and source directory
    pub fn confirmation(&self, report: &ExtractionReport) -> String {
        let output_name = report
            .output_file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        format!(
            "Text files have been extracted to '{}' from the directory: {}",
            output_name,
            report.source_dir.display()
        )
    }

    /// Generate a report string
    pub fn generate_report(&self, report: &ExtractionReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the confirmation and the report to stdout
    pub fn print_report(&self, report: &ExtractionReport) {
        println!("{}", self.confirmation(report));
        println!("\n{}", self.generate_report(report));
    }

    // Create a summary table using the tabled crate
    fn create_summary_table(&self, report: &ExtractionReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let rows = vec![
            SummaryRow {
                key: "📂 Output File".to_string(),
                value: report.output_file.display().to_string(),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "🔎 Files Inspected".to_string(),
                value: self.format_number(report.files_inspected),
            },
            SummaryRow {
                key: "📄 Files Written".to_string(),
                value: self.format_number(report.records.len()),
            },
            SummaryRow {
                key: "🚫 Files Skipped".to_string(),
                value: self.format_number(report.skipped.len()),
            },
            SummaryRow {
                key: "📝 Total Lines".to_string(),
                value: self.format_number(report.total_lines()),
            },
            SummaryRow {
                key: "🔤 Total Characters".to_string(),
                value: self.format_number(report.total_chars()),
            },
            SummaryRow {
                key: "📦 Output Size".to_string(),
                value: format_file_size(report.bytes_written),
            },
        ];

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Create a files table using the tabled crate
    fn create_files_table(&self, report: &ExtractionReport) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File")]
            name: String,

            #[tabled(rename = "Lines")]
            lines: String,

            #[tabled(rename = "Chars")]
            chars: String,
        }

        let rows: Vec<FileRow> = report
            .records
            .iter()
            .map(|info| FileRow {
                name: info.name.clone(),
                lines: self.format_number(info.lines),
                chars: self.format_number(info.chars),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Generate a console table report
    fn generate_console_report(&self, report: &ExtractionReport) -> String {
        let summary_title = "✅  EXTRACTION COMPLETE";

        if report.records.is_empty() {
            return format!(
                "📋  NO TEXT FILES FOUND\n\n{}\n{}",
                summary_title,
                self.create_summary_table(report)
            );
        }

        format!(
            "📋  EXTRACTED FILES\n{}\n\n{}\n{}",
            self.create_files_table(report),
            summary_title,
            self.create_summary_table(report)
        )
    }
}
