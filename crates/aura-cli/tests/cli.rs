use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Write a config pointing the store and ledger into `dir`.
fn write_config(dir: &Path) -> PathBuf {
    let config = serde_json::json!({
        "ledger": {
            "output_dir": dir.join("out"),
            "file_name": "ledger.csv"
        },
        "store": {
            "path": dir.join("out").join("invoices.json")
        },
        "extraction": {
            "log_raw_text": false
        }
    });
    let path = dir.join("config.json");
    fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
    path
}

fn aura(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("aura").unwrap();
    cmd.arg("--config").arg(config);
    cmd
}

const CSV: &str = "userId,invoiceDate,metalType,amountWithoutGst,gstAmount,totalAmount\n\
                   7,15/01/2024,GOLD22K,1000.00,30.00,1030.00\n\
                   8,2024-02-01,SILVER24,,15.00,515.00\n";

#[test]
fn upload_csv_stores_record_and_appends_ledger() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());
    let input = dir.path().join("invoices.csv");
    fs::write(&input, CSV).unwrap();

    aura(&config)
        .arg("upload")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("GOLD22K"));

    let ledger = fs::read_to_string(dir.path().join("out").join("ledger.csv")).unwrap();
    assert_eq!(
        ledger,
        "invoiceDate,metalType,amountWithoutGst,gstAmount,totalAmount\n\
         2024-01-15,GOLD22K,1000.00,30.00,1030.00\n"
    );

    aura(&config)
        .args(["list", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1,7,2024-01-15,GOLD22K,1000.00,30.00,1030.00"));
}

#[test]
fn upload_all_rows_backfills_missing_net() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());
    let input = dir.path().join("invoices.csv");
    fs::write(&input, CSV).unwrap();

    aura(&config)
        .args(["upload", "--all-rows"])
        .arg(&input)
        .assert()
        .success();

    aura(&config)
        .args(["list", "--user", "8", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2,8,2024-02-01,SILVER24,500.00,15.00,515.00"));
}

#[test]
fn manual_entry_shows_in_summary() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());

    aura(&config)
        .args([
            "manual", "--date", "10/03/2024", "--metal", "GOLD", "--gst", "3.00", "--total",
            "103.00",
        ])
        .assert()
        .success();

    aura(&config)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total revenue: 103.00"))
        .stdout(predicate::str::contains("Total GST:     3.00"));

    // Manual entries skip the ledger
    assert!(!dir.path().join("out").join("ledger.csv").exists());
}

#[test]
fn manual_rejects_bad_date() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());

    aura(&config)
        .args(["manual", "--date", "2024/13/45"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn delete_unknown_id_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());

    aura(&config)
        .args(["delete", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No invoice with id 42"));
}

#[test]
fn upload_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());

    aura(&config)
        .arg("upload")
        .arg(dir.path().join("nope.pdf"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn config_get_reads_explicit_file() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());

    aura(&config)
        .args(["config", "get", "ledger.file_name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ledger.csv\""));
}
