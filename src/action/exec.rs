//! Recovery action execution via subprocess.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use tokio::process::Command;

use crate::action::{ActionOutcome, ActionRunner};

/// Runs the configured executable with no arguments and captures its output.
#[derive(Debug, Clone)]
pub struct ExecActionRunner {
    path: PathBuf,
}

impl ExecActionRunner {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ActionRunner for ExecActionRunner {
    async fn run_action(&self) -> ActionOutcome {
        let started = Instant::now();

        let result = Command::new(&self.path)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await;

        let duration_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(output) => ActionOutcome::Completed {
                // A signal-terminated action has no exit code; report it
                // as a plain failure.
                exit_code: output.status.code().unwrap_or(1),
                duration_ms,
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            },
            Err(error) if error.kind() == ErrorKind::NotFound => ActionOutcome::NotFound {
                path: self.path.display().to_string(),
                duration_ms,
            },
            Err(error) => ActionOutcome::Failed {
                error: error.to_string(),
                duration_ms,
            },
        }
    }
}
