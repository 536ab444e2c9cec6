//! The monitor loop itself.
//!
//! # Responsibilities
//! - Drive the check → evaluate → act → cooldown → wait cycle
//! - Emit one structured event per significant occurrence
//! - Keep running through probe and action failures; only a shutdown
//!   signal ends the loop

use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time;

use crate::action::{ActionOutcome, ActionRunner};
use crate::config::MonitorConfig;
use crate::health::HealthFile;
use crate::monitor::state::{MonitorState, RoundEvaluation};
use crate::probe::{ProbeOutcome, Prober};

/// The monitor loop, generic over its probe and action capabilities so
/// tests can script both.
pub struct Monitor<P, A> {
    config: MonitorConfig,
    prober: P,
    action: A,
    health: HealthFile,
    state: MonitorState,
}

impl<P, A> Monitor<P, A>
where
    P: Prober,
    A: ActionRunner,
{
    pub fn new(config: MonitorConfig, prober: P, action: A, health: HealthFile) -> Self {
        Self {
            config,
            prober,
            action,
            health,
            state: MonitorState::new(),
        }
    }

    /// Run until the shutdown signal fires.
    ///
    /// Shutdown is observed at the two sleep points; an in-flight round
    /// always completes first.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        let interval = Duration::from_secs(self.config.check_interval_seconds);

        loop {
            let evaluation = self.round().await;

            if evaluation.breach {
                if !self.breach_recovery(&mut shutdown).await {
                    break;
                }
                // Straight into the next round, no inter-round delay.
                continue;
            }

            tokio::select! {
                _ = time::sleep(interval) => {}
                _ = shutdown.recv() => break,
            }
        }
    }

    /// One full pass over all targets plus the resulting state update.
    async fn round(&mut self) -> RoundEvaluation {
        tracing::info!(event = "check_started", targets = %self.config.targets.join(","));

        let timeout = Duration::from_secs(self.config.probe_timeout_seconds);
        let mut reachable = false;

        // Every target is probed and logged even after the round outcome
        // is already decided by an earlier success.
        for target in &self.config.targets {
            let result = self.prober.probe(target, timeout).await;
            match &result.outcome {
                ProbeOutcome::Reachable { latency_ms } => {
                    tracing::info!(
                        event = "check_result",
                        target = %result.target,
                        success = true,
                        latency_ms = *latency_ms,
                    );
                    reachable = true;
                }
                outcome => {
                    tracing::info!(
                        event = "check_result",
                        target = %result.target,
                        success = false,
                        error = outcome.error_label().unwrap_or("unknown"),
                    );
                }
            }
        }

        let evaluation = self
            .state
            .record_round(reachable, self.config.failure_threshold);

        // Severity tracks how close the counter is to the threshold; it
        // affects only the log level.
        if evaluation.reachable {
            tracing::info!(
                event = "check_complete",
                all_failed = false,
                failure_count = evaluation.failure_count,
            );
        } else if evaluation.breach {
            tracing::error!(
                event = "check_complete",
                all_failed = true,
                failure_count = evaluation.failure_count,
            );
        } else {
            tracing::warn!(
                event = "check_complete",
                all_failed = true,
                failure_count = evaluation.failure_count,
            );
        }

        self.publish(evaluation.reachable).await;
        evaluation
    }

    /// Action plus cooldown. Returns false if shutdown interrupted the
    /// cooldown sleep.
    async fn breach_recovery(&mut self, shutdown: &mut broadcast::Receiver<()>) -> bool {
        self.trigger_action().await;

        tracing::warn!(
            event = "cooldown_started",
            cooldown_seconds = self.config.cooldown_seconds,
        );

        let cooldown = Duration::from_secs(self.config.cooldown_seconds);
        tokio::select! {
            _ = time::sleep(cooldown) => {}
            _ = shutdown.recv() => return false,
        }

        self.state.finish_cooldown();
        // Health is not re-evaluated until the next probing round.
        self.publish(false).await;
        tracing::info!(event = "cooldown_complete");
        true
    }

    /// Invoke the recovery action exactly once and log its outcome. A
    /// failing action never aborts the loop; cooldown proceeds regardless.
    async fn trigger_action(&self) {
        tracing::error!(event = "action_triggered");

        match self.action.run_action().await {
            ActionOutcome::Completed {
                exit_code,
                duration_ms,
                stdout,
                stderr,
            } => {
                tracing::info!(
                    event = "action_complete",
                    exit_code = exit_code,
                    duration_ms = duration_ms,
                );
                let stdout = stdout.trim();
                if !stdout.is_empty() {
                    tracing::info!(event = "action_stdout", output = %stdout);
                }
                let stderr = stderr.trim();
                if !stderr.is_empty() {
                    tracing::warn!(event = "action_stderr", output = %stderr);
                }
            }
            ActionOutcome::NotFound { path, .. } => {
                tracing::error!(
                    event = "action_failed",
                    error = "action executable not found",
                    path = %path,
                );
            }
            ActionOutcome::Failed { error, .. } => {
                tracing::error!(event = "action_failed", error = %error);
            }
        }
    }

    async fn publish(&self, healthy: bool) {
        if let Err(error) = self.health.publish(healthy).await {
            tracing::warn!(
                event = "health_write_failed",
                path = %self.health.path().display(),
                error = %error,
            );
        }
    }
}
