//! End-to-end tests for the `dq-score` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const EXAMPLE_CSV: &str = "A,B \n1,1\n2,\n";

/// A command isolated from the user's home directory and environment.
fn dq_score(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dq-score").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("DATAQUALITY_OUTPUT_FORMAT")
        .env_remove("DATAQUALITY_DEBUG")
        .env_remove("DATAQUALITY_CONFIG")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_score_table_output() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "example.csv", EXAMPLE_CSV);

    dq_score(&dir)
        .arg("score")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Uploaded Dataset:"))
        .stdout(predicate::str::contains("Data Quality Scores:"))
        .stdout(predicate::str::contains("66.67%"))
        .stdout(predicate::str::contains("75.00%"))
        .stdout(predicate::str::contains("73.23%"))
        .stdout(predicate::str::contains("Feature Definitions:"));
}

#[test]
fn test_score_json_output() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "example.csv", EXAMPLE_CSV);

    let output = dq_score(&dir)
        .args(["--format", "json", "score"])
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["Metadata"].as_f64(), Some(70.0));
    assert_eq!(report["Freshness"].as_f64(), Some(80.0));
    assert_eq!(report["Completeness"].as_f64(), Some(75.0));
    assert_eq!(report["Accessibility"].as_f64(), Some(100.0));
    let overall = report["Overall Score"].as_f64().unwrap();
    assert!((overall - 0.7323333).abs() < 1e-6);
}

#[test]
fn test_score_plain_detailed() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "example.csv", EXAMPLE_CSV);

    dq_score(&dir)
        .args(["-o", "plain", "score", "--detailed", "--no-definitions"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usability: 66.67%"))
        .stdout(predicate::str::contains("Constant columns: 50.00%"))
        .stdout(predicate::str::contains("Feature Definitions").not());
}

#[test]
fn test_score_semicolon_delimiter() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "semi.csv", "A;B \n1;1\n2;\n");

    dq_score(&dir)
        .args(["-o", "plain", "score", "--delimiter", ";", "--no-definitions"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Completeness: 75.00%"));
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    dq_score(&dir)
        .args(["score", "does-not-exist.csv"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_unsupported_extension_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "notes.txt", "hello");

    dq_score(&dir)
        .arg("score")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn test_header_only_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "empty.csv", "a,b\n");

    dq_score(&dir)
        .arg("score")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Division by zero"));
}

#[test]
fn test_definitions() {
    let dir = TempDir::new().unwrap();

    dq_score(&dir)
        .arg("definitions")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Assesses how easy it is to access the data. For this MVP, it checks whether the data can be accessed via the DataStore API.",
        ));
}

#[test]
fn test_config_set_get_reset() {
    let dir = TempDir::new().unwrap();

    dq_score(&dir)
        .args(["config", "set", "preview_rows", "2"])
        .assert()
        .success();
    assert!(dir.path().join(".dataquality/config.toml").exists());

    dq_score(&dir)
        .args(["config", "get", "preview_rows"])
        .assert()
        .success()
        .stdout("2\n");

    dq_score(&dir).args(["config", "reset"]).assert().success();

    dq_score(&dir)
        .args(["config", "get", "preview_rows"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_config_unknown_key_fails() {
    let dir = TempDir::new().unwrap();

    dq_score(&dir)
        .args(["config", "set", "api_endpoint", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key"));
}

#[test]
fn test_app_config_file() {
    let dir = TempDir::new().unwrap();
    let data = write_file(&dir, "example.csv", "A|B \n1|1\n2|\n");
    let config = write_file(&dir, "dq.toml", "[ingestion]\ndelimiter = \"|\"\n");

    dq_score(&dir)
        .args(["-o", "plain", "--config"])
        .arg(&config)
        .args(["score", "--no-definitions"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Completeness: 75.00%"));
}

const WORKBOOK: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../infrastructure/tests/fixtures/example.xlsx"
);

#[test]
fn test_score_workbook() {
    let dir = TempDir::new().unwrap();

    dq_score(&dir)
        .args(["-o", "plain", "score", "--no-definitions", WORKBOOK])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usability: 66.67%"))
        .stdout(predicate::str::contains("Completeness: 75.00%"));
}

#[test]
fn test_score_workbook_sheet() {
    let dir = TempDir::new().unwrap();

    dq_score(&dir)
        .args(["-o", "plain", "score", "--no-definitions", "--sheet", "Dates", WORKBOOK])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completeness: 100.00%"));
}

#[test]
fn test_score_workbook_unknown_sheet_fails() {
    let dir = TempDir::new().unwrap();

    dq_score(&dir)
        .args(["score", "--sheet", "Budget", WORKBOOK])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Worksheet not found: Budget"));
}

#[test]
fn test_completions() {
    let dir = TempDir::new().unwrap();

    dq_score(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dq-score"));
}
