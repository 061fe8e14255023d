/*!
 * Tests for textdump extraction runs
 */

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use tempfile::{tempdir, TempDir};

use crate::aggregator::Aggregator;
use crate::config::Config;
use crate::report::ExtractionReport;

// Helper: a `docs` directory plus a separate output directory
fn setup_docs_directory() -> io::Result<(TempDir, PathBuf, PathBuf)> {
    let temp_dir = tempdir()?;
    let docs = temp_dir.path().join("docs");
    let out = temp_dir.path().join("out");
    fs::create_dir(&docs)?;
    fs::create_dir(&out)?;
    Ok((temp_dir, docs, out))
}

fn run_into(docs: &Path, out: &Path) -> crate::Result<ExtractionReport> {
    let config = Config::with_output_dir(docs.to_str().unwrap(), out);
    Aggregator::new(config, ProgressBar::hidden()).run()
}

// Split the output document back into (name, content) pairs
fn parse_records(output: &str) -> Vec<(String, String)> {
    output
        .split("--- Contents of ")
        .skip(1)
        .map(|block| {
            let (name, rest) = block.split_once(" ---\n").unwrap();
            let content = rest.strip_suffix("\n\n").unwrap();
            (name.to_string(), content.to_string())
        })
        .collect()
}

#[test]
fn test_docs_scenario() -> io::Result<()> {
    let (_tmp, docs, out) = setup_docs_directory()?;
    fs::write(docs.join("a.txt"), "hello")?;
    fs::write(docs.join("image.bin"), [0u8, 1, 2])?;

    let report = run_into(&docs, &out).unwrap();

    let output = fs::read_to_string(out.join("docs_all_text_files.txt"))?;
    assert_eq!(output, "--- Contents of a.txt ---\nhello\n\n");
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.skipped, vec!["image.bin".to_string()]);
    assert_eq!(report.files_inspected, 2);
    assert_eq!(report.bytes_written, output.len() as u64);
    Ok(())
}

#[test]
fn test_one_record_per_text_file() -> io::Result<()> {
    let (_tmp, docs, out) = setup_docs_directory()?;
    let files = [
        ("notes.md", "# Notes\n\n- one\n- two\n"),
        ("main.rs", "fn main() {}\n"),
        ("unicode.txt", "héllo ✓\n"),
        ("empty.txt", ""),
    ];
    for (name, content) in files {
        fs::write(docs.join(name), content)?;
    }

    run_into(&docs, &out).unwrap();

    let output = fs::read_to_string(out.join("docs_all_text_files.txt"))?;
    let mut records = parse_records(&output);
    records.sort();
    let mut expected: Vec<(String, String)> = files
        .iter()
        .map(|(n, c)| (n.to_string(), c.to_string()))
        .collect();
    expected.sort();
    assert_eq!(records, expected);
    Ok(())
}

#[test]
fn test_binary_and_invalid_utf8_excluded() -> io::Result<()> {
    let (_tmp, docs, out) = setup_docs_directory()?;
    fs::write(docs.join("keep.txt"), "keep me")?;
    fs::write(docs.join("nul.dat"), b"looks like text\0but is not")?;
    fs::write(docs.join("latin1.txt"), [b'c', b'a', b'f', 0xe9])?;

    let report = run_into(&docs, &out).unwrap();

    let output = fs::read_to_string(out.join("docs_all_text_files.txt"))?;
    assert_eq!(output, "--- Contents of keep.txt ---\nkeep me\n\n");
    let mut skipped = report.skipped.clone();
    skipped.sort();
    assert_eq!(skipped, vec!["latin1.txt", "nul.dat"]);
    Ok(())
}

#[test]
fn test_invalid_bytes_after_prefix_are_dropped() -> io::Result<()> {
    let (_tmp, docs, out) = setup_docs_directory()?;
    let mut bytes = vec![b'x'; 2048];
    bytes.extend_from_slice(&[0xff, 0xfe]);
    bytes.extend_from_slice(b"end");
    fs::write(docs.join("mostly.txt"), &bytes)?;

    run_into(&docs, &out).unwrap();

    let output = fs::read_to_string(out.join("docs_all_text_files.txt"))?;
    let expected = format!("--- Contents of mostly.txt ---\n{}end\n\n", "x".repeat(2048));
    assert_eq!(output, expected);
    Ok(())
}

#[test]
fn test_nested_directories_not_traversed() -> io::Result<()> {
    let (_tmp, docs, out) = setup_docs_directory()?;
    fs::create_dir(docs.join("sub"))?;
    fs::write(docs.join("sub").join("inner.txt"), "inner")?;
    fs::write(docs.join("top.txt"), "top")?;

    run_into(&docs, &out).unwrap();

    let output = fs::read_to_string(out.join("docs_all_text_files.txt"))?;
    assert!(output.contains("--- Contents of top.txt ---"));
    assert!(!output.contains("inner"));
    Ok(())
}

#[test]
fn test_output_inside_target_excluded_on_rerun() -> io::Result<()> {
    let (_tmp, docs, _out) = setup_docs_directory()?;
    fs::write(docs.join("a.txt"), "hello")?;
    fs::write(docs.join("b.txt"), "world")?;

    // Writing into the scanned directory itself
    let first = run_into(&docs, &docs).unwrap();
    let output_path = docs.join("docs_all_text_files.txt");
    let first_output = fs::read(&output_path)?;

    let second = run_into(&docs, &docs).unwrap();
    let second_output = fs::read(&output_path)?;

    assert_eq!(first.records.len(), 2);
    assert_eq!(second.records.len(), 2);
    assert_eq!(second.files_inspected, 2);
    assert!(!String::from_utf8_lossy(&second_output).contains("--- Contents of docs_all_text_files.txt"));
    assert_eq!(first_output, second_output);
    Ok(())
}

#[test]
fn test_rerun_is_byte_identical() -> io::Result<()> {
    let (_tmp, docs, out) = setup_docs_directory()?;
    for i in 0..5 {
        let mut file = File::create(docs.join(format!("file{}.txt", i)))?;
        writeln!(file, "line one of {}", i)?;
        writeln!(file, "line two of {}", i)?;
    }

    run_into(&docs, &out).unwrap();
    let first = fs::read(out.join("docs_all_text_files.txt"))?;
    run_into(&docs, &out).unwrap();
    let second = fs::read(out.join("docs_all_text_files.txt"))?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_existing_output_truncated() -> io::Result<()> {
    let (_tmp, docs, out) = setup_docs_directory()?;
    fs::write(out.join("docs_all_text_files.txt"), "x".repeat(10_000))?;
    fs::write(docs.join("only.bin"), [0u8; 8])?;

    let report = run_into(&docs, &out).unwrap();

    assert_eq!(fs::read(out.join("docs_all_text_files.txt"))?, b"");
    assert!(report.records.is_empty());
    assert_eq!(report.bytes_written, 0);
    Ok(())
}

#[test]
fn test_missing_directory_creates_nothing() -> io::Result<()> {
    let (_tmp, docs, out) = setup_docs_directory()?;
    let missing = docs.join("missing");

    let err = run_into(&missing, &out).unwrap_err();

    assert!(err.is_invalid_target());
    assert!(err.to_string().contains("does not exist"));
    assert_eq!(fs::read_dir(&out)?.count(), 0);
    Ok(())
}

#[test]
fn test_regular_file_target_rejected() -> io::Result<()> {
    let (_tmp, docs, out) = setup_docs_directory()?;
    let file = docs.join("plain.txt");
    fs::write(&file, "not a dir")?;

    let err = run_into(&file, &out).unwrap_err();

    assert!(err.is_invalid_target());
    assert!(!out.join("plain.txt_all_text_files.txt").exists());
    Ok(())
}

#[test]
fn test_trailing_separator_uses_base_name() -> io::Result<()> {
    let (_tmp, docs, out) = setup_docs_directory()?;
    fs::write(docs.join("a.txt"), "hello")?;
    let with_slash = format!("{}{}", docs.display(), std::path::MAIN_SEPARATOR);

    let config = Config::with_output_dir(&with_slash, &out);
    let report = Aggregator::new(config, ProgressBar::hidden()).run().unwrap();

    assert_eq!(report.output_file, out.join("docs_all_text_files.txt"));
    assert!(report.output_file.exists());
    Ok(())
}

#[test]
fn test_report_measures_records() -> io::Result<()> {
    let (_tmp, docs, out) = setup_docs_directory()?;
    fs::write(docs.join("three.txt"), "a\nb\nc\n")?;

    let report = run_into(&docs, &out).unwrap();

    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].name, "three.txt");
    assert_eq!(report.records[0].lines, 3);
    assert_eq!(report.records[0].chars, 6);
    assert_eq!(report.total_lines(), 3);
    assert_eq!(report.source_dir, docs);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_skipped() -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let (_tmp, docs, out) = setup_docs_directory()?;
    fs::write(docs.join("open.txt"), "open")?;
    let locked = docs.join("locked.txt");
    fs::write(&locked, "locked")?;
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

    // root ignores file modes
    if File::open(&locked).is_ok() {
        return Ok(());
    }

    let report = run_into(&docs, &out).unwrap();

    let output = fs::read_to_string(out.join("docs_all_text_files.txt"))?;
    assert_eq!(output, "--- Contents of open.txt ---\nopen\n\n");
    assert_eq!(report.skipped, vec!["locked.txt".to_string()]);
    Ok(())
}
