//! Startup behavior of the monitor binary.

use std::process::Command;

#[test]
fn test_missing_targets_exits_with_config_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_linkwatch"))
        .env_remove("PING_TARGETS")
        .env_remove("RUST_LOG")
        .output()
        .expect("binary should spawn");

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let first = stdout.lines().next().expect("a config_error log line");
    let record: serde_json::Value = serde_json::from_str(first).unwrap();
    assert_eq!(record["event"], "config_error");
    assert_eq!(record["level"], "error");
}

#[test]
fn test_whitespace_only_targets_exit_with_config_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_linkwatch"))
        .env("PING_TARGETS", " , , ")
        .env_remove("RUST_LOG")
        .output()
        .expect("binary should spawn");

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let first = stdout.lines().next().expect("a config_error log line");
    let record: serde_json::Value = serde_json::from_str(first).unwrap();
    assert_eq!(record["event"], "config_error");
}
