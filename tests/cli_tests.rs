//! Integration tests for the bitmap CLI
//!
//! These tests run the built binary against fixture files and check exit
//! codes, stdout, and the diagnostic log.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Get the path to the bitmap binary
fn bitmap_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_bitmap"))
}

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

/// Run `bitmap run` with the log redirected into `dir`
fn run_bitmap(input: &Path, dir: &TempDir) -> (Output, PathBuf) {
    let log_path = dir.path().join("error_log.txt");
    let output = Command::new(bitmap_binary())
        .current_dir(dir.path())
        .arg("run")
        .arg(input)
        .arg("--log")
        .arg(&log_path)
        .output()
        .expect("Failed to execute bitmap");
    (output, log_path)
}

#[test]
fn test_run_sample_renders_bitmap() {
    let temp = TempDir::new().unwrap();
    let (output, log_path) = run_bitmap(&fixture("sample.txt"), &temp);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "OOOOOO\nOOOOOO\nAZZZZO\nOWOOOO\nOWOOOO\n"
    );
    assert_eq!(fs::read_to_string(log_path).unwrap(), "");
}

#[test]
fn test_run_invalid_lines_are_logged() {
    let temp = TempDir::new().unwrap();
    let (output, log_path) = run_bitmap(&fixture("invalid.txt"), &temp);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "OOOOOO\nOOOOOO\nOOOOOO\nOOOOOO\nOOOOOO\n"
    );

    let log = fs::read_to_string(log_path).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Line 2 : Command key L requires 3 parameters",
            "Line 3 : Unsupported command key X",
            "Line 4 : Unsupported command (empty line)",
            "Line 5 : Third parameter with Command key L should not be numeric",
            "Line 6 : Pixels value out of valid range",
        ]
    );
}

#[test]
fn test_run_missing_file() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.txt");
    let (output, log_path) = run_bitmap(&missing, &temp);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(
        fs::read_to_string(log_path).unwrap(),
        format!("Commands file not present at {}\n", missing.display())
    );
}

#[test]
fn test_run_truncates_previous_log() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("commands.txt");
    fs::write(&input, "S\n").unwrap();
    fs::write(temp.path().join("error_log.txt"), "Line 9 : stale\n").unwrap();

    let (output, log_path) = run_bitmap(&input, &temp);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "No bitmap created yet\n");
    assert_eq!(fs::read_to_string(log_path).unwrap(), "");
}

#[test]
fn test_run_uses_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("bitmap.toml"), "[log]\npath = \"from_config.log\"\nformat = \"json\"\n")
        .unwrap();
    let input = temp.path().join("commands.txt");
    fs::write(&input, "Q\n").unwrap();

    let output = Command::new(bitmap_binary())
        .current_dir(temp.path())
        .arg("run")
        .arg(&input)
        .output()
        .expect("Failed to execute bitmap");

    assert!(output.status.success());
    let log = fs::read_to_string(temp.path().join("from_config.log")).unwrap();
    let entry: serde_json::Value = serde_json::from_str(log.trim()).unwrap();
    assert_eq!(entry["line"], 1);
    assert_eq!(entry["issue_type"], "unsupported");
}

#[test]
fn test_run_invalid_config() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("broken.toml");
    fs::write(&config, "[log]\npath = \"\"\n").unwrap();

    let output = Command::new(bitmap_binary())
        .current_dir(temp.path())
        .arg("run")
        .arg(fixture("sample.txt"))
        .arg("--config")
        .arg(&config)
        .output()
        .expect("Failed to execute bitmap");

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("log.path"));
}

#[test]
fn test_check_reports_issues() {
    let output = Command::new(bitmap_binary())
        .arg("check")
        .arg(fixture("invalid.txt"))
        .output()
        .expect("Failed to execute bitmap");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Line 2 : Command key L requires 3 parameters"));
    assert!(stdout.contains("Found 5 errors."));
}

#[test]
fn test_check_clean_file_json() {
    let output = Command::new(bitmap_binary())
        .arg("check")
        .arg(fixture("sample.txt"))
        .arg("--json")
        .output()
        .expect("Failed to execute bitmap");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["valid"], true);
    assert_eq!(value["errors"].as_array().map(Vec::len), Some(0));
}
