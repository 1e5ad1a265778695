//! Integration tests for the receipt-points CLI
//!
//! These tests run the built binary against receipt files on disk.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper function to create a receipt-points command
fn receipt_points() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("receipt-points"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Helper to write a receipt file into the temp dir
fn write_receipt(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

const TARGET: &str = r#"{
  "retailer": "Target",
  "purchaseDate": "2022-01-01",
  "purchaseTime": "13:01",
  "items": [
    {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
    {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
    {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
    {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
    {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
  ],
  "total": "35.35"
}"#;

const BAD_TIME: &str = r#"{
  "retailer": "Target",
  "purchaseDate": "2022-01-01",
  "purchaseTime": "25:00",
  "items": [{"shortDescription": "Pepsi", "price": "1.25"}],
  "total": "1.25"
}"#;

// =============================================================================
// BASICS
// =============================================================================

#[test]
fn test_version() {
    receipt_points()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_json() {
    receipt_points()
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_help_lists_commands() {
    receipt_points()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("score"))
        .stdout(predicate::str::contains("validate"));
}

// =============================================================================
// SCORE / VALIDATE
// =============================================================================

#[test]
fn test_score_file() {
    let temp = TempDir::new().unwrap();
    let path = write_receipt(&temp, "target.json", TARGET);

    receipt_points()
        .arg("score")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("28 points"));
}

#[test]
fn test_score_file_json() {
    let temp = TempDir::new().unwrap();
    let path = write_receipt(&temp, "target.json", TARGET);

    receipt_points()
        .args(["--json", "score"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"points\": 28"))
        .stdout(predicate::str::contains("\"retailer_name\""));
}

#[test]
fn test_score_rejected_file_fails() {
    let temp = TempDir::new().unwrap();
    let path = write_receipt(&temp, "bad.json", BAD_TIME);

    receipt_points()
        .arg("score")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("rejected"));
}

#[test]
fn test_validate_good_file() {
    let temp = TempDir::new().unwrap();
    let path = write_receipt(&temp, "target.json", TARGET);

    receipt_points()
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn test_validate_rejected_file_json() {
    let temp = TempDir::new().unwrap();
    let path = write_receipt(&temp, "bad.json", BAD_TIME);

    receipt_points()
        .args(["--json", "validate"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"valid\": false"))
        .stdout(predicate::str::contains("\"field\": \"purchaseTime\""));
}

#[test]
fn test_malformed_file_fails() {
    let temp = TempDir::new().unwrap();
    let path = write_receipt(&temp, "junk.json", "{ retailer: Target");

    receipt_points()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid receipt JSON"));
}

#[test]
fn test_missing_file_fails() {
    let temp = TempDir::new().unwrap();

    receipt_points()
        .arg("score")
        .arg(temp.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

// =============================================================================
// SERVE
// =============================================================================

#[test]
fn test_serve_rejects_zero_workers() {
    let temp = TempDir::new().unwrap();

    receipt_points()
        .env("HOME", temp.path())
        .args(["serve", "--workers", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("workers"));
}

#[test]
fn test_serve_missing_config_fails() {
    let temp = TempDir::new().unwrap();

    receipt_points()
        .env("HOME", temp.path())
        .arg("serve")
        .arg("--config")
        .arg(temp.path().join("missing.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn test_serve_invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    let path = write_receipt(&temp, "config.toml", "[server]\nworkers = 0\n");

    receipt_points()
        .env("HOME", temp.path())
        .arg("serve")
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("workers"));
}
