//! Recovery action subsystem.
//!
//! # Data Flow
//! ```text
//! Breach (failure counter reaches threshold)
//!     → ActionRunner::run_action()
//!     → ActionOutcome (exit code, duration, captured output)
//!     → logged by the monitor, then cooldown regardless of outcome
//! ```
//!
//! # Design Decisions
//! - The runner is a trait so tests substitute counting fakes for the
//!   real subprocess
//! - A missing executable is distinguished from a failing one and maps
//!   to the reserved exit code 127
//! - No timeout on the action: the operator controls the script and can
//!   self-timeout

use async_trait::async_trait;

pub mod exec;

pub use exec::ExecActionRunner;

/// Result of one recovery action invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The executable ran to completion.
    Completed {
        exit_code: i32,
        duration_ms: u64,
        stdout: String,
        stderr: String,
    },
    /// Nothing exists at the configured path.
    NotFound { path: String, duration_ms: u64 },
    /// The executable could not be spawned for another reason.
    Failed { error: String, duration_ms: u64 },
}

impl ActionOutcome {
    /// Effective exit code: 127 reserved for a missing executable, 1 for
    /// any other invocation failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ActionOutcome::Completed { exit_code, .. } => *exit_code,
            ActionOutcome::NotFound { .. } => 127,
            ActionOutcome::Failed { .. } => 1,
        }
    }
}

/// One invocation of the external recovery executable.
///
/// The action receives no parameters. Implementations must not propagate
/// errors; every failure mode collapses into an [`ActionOutcome`].
#[async_trait]
pub trait ActionRunner: Send + Sync {
    async fn run_action(&self) -> ActionOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_exit_codes() {
        let completed = ActionOutcome::Completed {
            exit_code: 3,
            duration_ms: 10,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert_eq!(completed.exit_code(), 3);

        let missing = ActionOutcome::NotFound {
            path: "/action.sh".into(),
            duration_ms: 0,
        };
        assert_eq!(missing.exit_code(), 127);

        let failed = ActionOutcome::Failed {
            error: "permission denied".into(),
            duration_ms: 0,
        };
        assert_eq!(failed.exit_code(), 1);
    }
}
