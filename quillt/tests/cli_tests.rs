//! CLI Interface E2E Tests
//!
//! These tests run the quillt binary against fixture files and check its
//! output streams and exit status.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// A quillt command isolated from the caller's environment and config files
fn quillt(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_quillt"));
    cmd.current_dir(home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .env_remove("QUILLT_VERBOSE")
        .env_remove("QUILLT_CONFIG")
        .env_remove("QUILLT_NO_COLOR");
    cmd
}

#[test]
fn test_cli_help() {
    let home = TempDir::new().unwrap();
    quillt(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tokens").and(predicate::str::contains("check")));
}

#[test]
fn test_cli_version() {
    let home = TempDir::new().unwrap();
    quillt(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quillt"));
}

#[test]
fn test_tokens_text_listing() {
    let home = TempDir::new().unwrap();
    quillt(&home)
        .arg("tokens")
        .arg(fixtures_dir().join("clean.ql"))
        .assert()
        .success()
        .stdout(predicate::str::contains("2:1  left_paren  \"(\""))
        .stdout(predicate::str::contains("2:13  number  \"0x1A\"  26 (hexadecimal)"))
        .stdout(predicate::str::contains(
            "123456789012345678901234567890n (decimal)",
        ))
        .stdout(predicate::str::contains("  1000n (exponential)"))
        .stdout(predicate::str::contains("6:1  string  \"done\""))
        .stdout(predicate::str::contains("7:1  eof  \"\""))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_tokens_no_eof() {
    let home = TempDir::new().unwrap();
    quillt(&home)
        .args(["tokens", "--no-eof"])
        .arg(fixtures_dir().join("clean.ql"))
        .assert()
        .success()
        .stdout(predicate::str::contains("eof").not());
}

#[test]
fn test_tokens_json() {
    let home = TempDir::new().unwrap();
    let output = quillt(&home)
        .args(["tokens", "--format", "json"])
        .arg(fixtures_dir().join("clean.ql"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.first().unwrap()["kind"], "left_paren");
    assert_eq!(records.last().unwrap()["kind"], "eof");
    assert!(records
        .iter()
        .any(|r| r["format"] == "hexadecimal" && r["value"] == "26"));
}

#[test]
fn test_tokens_with_errors_exits_one() {
    let home = TempDir::new().unwrap();
    quillt(&home)
        .arg("tokens")
        .arg(fixtures_dir().join("broken.ql"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("1:5  number  \"2\""))
        .stderr(predicate::str::contains("error[E1001]: unknown character `x`"))
        .stderr(predicate::str::contains("error[E1003]: expected binary digit after `0b`"))
        .stderr(predicate::str::contains("error[E1002]: unterminated string literal"));
}

#[test]
fn test_check_clean_file() {
    let home = TempDir::new().unwrap();
    quillt(&home)
        .arg("check")
        .arg(fixtures_dir().join("clean.ql"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_check_clean_file_verbose() {
    let home = TempDir::new().unwrap();
    quillt(&home)
        .args(["--verbose", "check"])
        .arg(fixtures_dir().join("clean.ql"))
        .assert()
        .success()
        .stdout(predicate::str::contains("clean.ql: ok ("));
}

#[test]
fn test_check_broken_file() {
    let home = TempDir::new().unwrap();
    quillt(&home)
        .arg("check")
        .arg(fixtures_dir().join("clean.ql"))
        .arg(fixtures_dir().join("broken.ql"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("broken.ql:2:5"))
        .stderr(predicate::str::contains("2 | x = 0b2;"))
        .stderr(predicate::str::contains("error: aborting due to 3 previous errors"))
        .stderr(predicate::str::contains("error: could not tokenize `"))
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_check_missing_file_exits_two() {
    let home = TempDir::new().unwrap();
    quillt(&home)
        .args(["check", "does-not-exist.ql"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Input path does not exist"));
}

#[test]
fn test_config_file_sets_format() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("quill.toml"),
        "[output]\nformat = \"json\"\nshow_eof = false\n",
    )
    .unwrap();

    quillt(&home)
        .arg("tokens")
        .arg(fixtures_dir().join("clean.ql"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stdout(predicate::str::contains("\"eof\"").not());
}

#[test]
fn test_flag_overrides_config_format() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    std::fs::write(&config, "[output]\nformat = \"json\"\n").unwrap();

    quillt(&home)
        .arg("--config")
        .arg(&config)
        .args(["tokens", "--format", "text"])
        .arg(fixtures_dir().join("clean.ql"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2:1  left_paren"));
}

#[test]
fn test_invalid_config_exits_two() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("quill.toml"), "[output]\ncolor = \"sometimes\"\n").unwrap();

    quillt(&home)
        .arg("check")
        .arg(fixtures_dir().join("clean.ql"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid color"));
}

#[test]
fn test_unknown_format_exits_two() {
    let home = TempDir::new().unwrap();
    quillt(&home)
        .args(["tokens", "--format", "xml"])
        .arg(fixtures_dir().join("clean.ql"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown format"));
}
