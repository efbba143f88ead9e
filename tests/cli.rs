use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

const BINARY_NAME: &str = "docentes-panel";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("docentes"))
        .stdout(contains("--endpoint"))
        .stdout(contains("--headless"));
}

#[test]
/// An endpoint that is not a URL is rejected before anything starts.
fn invalid_endpoint_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["--headless", "--endpoint", "not a url"])
        .env("HOME", tmp.path())
        .env_remove("DOCENTES_API_URL")
        .assert()
        .failure()
        .stderr(contains("Invalid endpoint"))
        // Reported once, without the runtime's Debug dump.
        .stderr(contains("InvalidEndpoint").not())
        .stderr(contains("Error: ").not());
}

#[test]
/// An endpoint from the environment is validated the same way.
fn invalid_env_endpoint_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--headless")
        .env("HOME", tmp.path())
        .env("DOCENTES_API_URL", "ftp://escuela/api.php")
        .assert()
        .failure()
        .stderr(contains("unsupported scheme"));
}

#[test]
/// A config file named on the command line must exist.
fn missing_config_file_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--headless")
        .arg("--config")
        .arg(tmp.path().join("missing.json"))
        .env_remove("DOCENTES_API_URL")
        .assert()
        .failure()
        .stderr(contains("Could not read config file"));
}

#[test]
/// A malformed config file is reported instead of silently ignored.
fn malformed_config_file_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--headless")
        .arg("--config")
        .arg(&path)
        .env_remove("DOCENTES_API_URL")
        .assert()
        .failure()
        .stderr(contains("Invalid config file"));
}

#[test]
fn zero_poll_interval_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["--headless", "--poll-interval-ms", "0"])
        .env("HOME", tmp.path())
        .env_remove("DOCENTES_API_URL")
        .assert()
        .failure()
        .stderr(contains("poll interval"));
}
