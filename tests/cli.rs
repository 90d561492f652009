use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sqlite_config(dir: &TempDir) -> PathBuf {
    let db_path = dir.path().join("people.db");
    let config = serde_json::json!({
        "Mysql": {
            "User": "root",
            "Password": "secret",
            "Host": "localhost",
            "Port": 3306,
            "Database": db_path,
            "Driver": "sqlite"
        }
    });
    let path = dir.path().join("config.json");
    std::fs::write(&path, config.to_string()).unwrap();
    path
}

fn rowtrace(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rowtrace").unwrap();
    cmd.env_remove("RUST_BACKTRACE")
        .env_remove("RUST_LOG")
        .env_remove("ROWTRACE_CONFIG")
        .arg("--config")
        .arg(config);
    cmd
}

#[test]
fn test_lookup_existing_row_prints_name() {
    let dir = tempfile::tempdir().unwrap();
    let config = sqlite_config(&dir);

    rowtrace(&config)
        .args(["init", "--seed", "1=Alice"])
        .assert()
        .success();

    rowtrace(&config)
        .args(["lookup", "--id", "1"])
        .assert()
        .success()
        .stdout("Alice\n");
}

#[test]
fn test_lookup_missing_row_is_terse() {
    let dir = tempfile::tempdir().unwrap();
    let config = sqlite_config(&dir);

    rowtrace(&config).arg("init").assert().success();

    rowtrace(&config)
        .args(["lookup", "--id", "5"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("no id=5: no rows in result set"))
        .stderr(predicate::str::contains("caused by").not());
}

#[test]
fn test_missing_config_prints_full_trace() {
    let dir = tempfile::tempdir().unwrap();

    rowtrace(&dir.path().join("absent.json"))
        .arg("lookup")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with(
            "failed to read config\n  caused by: open failed\n  caused by: ",
        ))
        .stderr(predicate::function(|err: &str| {
            err.matches("failed to read config").count() == 1
        }));
}

#[test]
fn test_refused_connection_reports_driver_error_quickly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let config = serde_json::json!({
        "Mysql": {"User": "u", "Password": "p", "Host": "127.0.0.1", "Port": 1, "Database": "d"}
    });
    std::fs::write(&path, config.to_string()).unwrap();

    let started = std::time::Instant::now();
    rowtrace(&path)
        .arg("lookup")
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with(
            "failed to connect to u:***@127.0.0.1:1/d\n  caused by: failed to open connection",
        ))
        .stderr(predicate::str::contains("pool timed out").not());
    assert!(started.elapsed() < std::time::Duration::from_secs(10));
}

#[test]
fn test_config_show_password_on_request() {
    let dir = tempfile::tempdir().unwrap();
    let config = sqlite_config(&dir);

    rowtrace(&config)
        .args(["config", "show", "--show-password"])
        .assert()
        .success()
        .stdout(predicate::str::contains("root:secret@localhost:3306/"));
}

#[test]
fn test_malformed_config_prints_full_trace() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    rowtrace(&path)
        .arg("lookup")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to load json\n  caused by: "));
}

#[test]
fn test_config_show_masks_password() {
    let dir = tempfile::tempdir().unwrap();
    let config = sqlite_config(&dir);

    rowtrace(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("root:***@localhost:3306/"))
        .stdout(predicate::str::contains("secret").not());
}
