use std::process::{Command as StdCommand, Stdio};

use crate::common::{fixture, BINARY_PATH, CONFIG_ENV};

#[test]
fn duplicate_dataset_ids_abort_startup() {
    let status = StdCommand::new(BINARY_PATH)
        .env(CONFIG_ENV, fixture("tests/fixtures/config_duplicate_ids.toml"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .status()
        .expect("process should start");
    assert_eq!(status.code(), Some(3), "catalog exit code (3) expected");
}

#[test]
fn invalid_config_aborts_startup() {
    let status = StdCommand::new(BINARY_PATH)
        .env(CONFIG_ENV, fixture("tests/fixtures/config_invalid_port.toml"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .status()
        .expect("process should start");
    assert_eq!(status.code(), Some(2), "config exit code (2) expected");
}

#[test]
fn missing_explicit_config_aborts_startup() {
    let status = StdCommand::new(BINARY_PATH)
        .arg("--config")
        .arg(fixture("tests/fixtures/does_not_exist.toml"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .status()
        .expect("process should start");
    assert_eq!(status.code(), Some(2), "config exit code (2) expected");
}

#[test]
fn call_command_with_duplicate_dataset_ids_uses_catalog_exit_code() {
    let output = StdCommand::new(BINARY_PATH)
        .env(CONFIG_ENV, fixture("tests/fixtures/config_duplicate_ids.toml"))
        .args(["call", "get_presentations"])
        .output()
        .expect("process should start");
    assert_eq!(output.status.code(), Some(3), "catalog exit code (3) expected");
    assert!(output.stdout.is_empty(), "no result is printed on failure");
}
