//! Recovery action execution tests against real subprocesses.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use linkwatch::action::{ActionOutcome, ActionRunner, ExecActionRunner};

fn write_script(path: &Path, body: &str) {
    fs::write(path, body).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[tokio::test]
async fn test_missing_executable_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.sh");

    let runner = ExecActionRunner::new(&path);
    let outcome = runner.run_action().await;

    assert!(matches!(outcome, ActionOutcome::NotFound { .. }));
    assert_eq!(outcome.exit_code(), 127);
}

#[tokio::test]
async fn test_captures_exit_code_and_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("action.sh");
    write_script(
        &path,
        "#!/bin/sh\necho restarting interface\necho device busy >&2\nexit 7\n",
    );

    let runner = ExecActionRunner::new(&path);
    let outcome = runner.run_action().await;

    match outcome {
        ActionOutcome::Completed {
            exit_code,
            stdout,
            stderr,
            ..
        } => {
            assert_eq!(exit_code, 7);
            assert_eq!(stdout.trim(), "restarting interface");
            assert_eq!(stderr.trim(), "device busy");
        }
        other => panic!("expected Completed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_successful_action() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("action.sh");
    write_script(&path, "#!/bin/sh\nexit 0\n");

    let runner = ExecActionRunner::new(&path);
    let outcome = runner.run_action().await;

    assert_eq!(outcome.exit_code(), 0);
}

#[tokio::test]
async fn test_unexecutable_file_reports_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("action.sh");
    fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
    // No execute bit.

    let runner = ExecActionRunner::new(&path);
    let outcome = runner.run_action().await;

    assert!(matches!(outcome, ActionOutcome::Failed { .. }));
    assert_eq!(outcome.exit_code(), 1);
}
