/*!
 * Command-line interface for textdump
 */

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{fmt, EnvFilter};

use textdump::config::{Args, Config};
use textdump::report::{ReportFormat, Reporter};
use textdump::Aggregator;

fn main() -> ExitCode {
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let directory = match args.directory {
        Some(directory) => directory,
        None => match prompt_for_directory() {
            Ok(directory) => directory,
            Err(e) => {
                eprintln!("Error: failed to read directory path: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    progress.set_prefix("📄 Extracting");

    let aggregator = Aggregator::new(Config::from_directory(&directory), progress.clone());
    let result = aggregator.run();
    progress.finish_and_clear();

    match result {
        Ok(report) => {
            Reporter::new(ReportFormat::ConsoleTable).print_report(&report);
            ExitCode::SUCCESS
        }
        // A bad target is reported, not treated as a crash
        Err(e) if e.is_invalid_target() => {
            println!("{}", e);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Ask for the directory on stdin, without the trailing newline
fn prompt_for_directory() -> io::Result<String> {
    print!("Please enter the directory path: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}
