//! Ping-based reachability probe.
//!
//! # Responsibilities
//! - Shell out to the system ping utility for one echo request
//! - Enforce the configured timeout plus a fixed grace period
//! - Classify every failure mode, never propagate an error

use std::process::Stdio;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time;

use crate::probe::{ProbeOutcome, ProbeResult, Prober};

/// Extra headroom on top of ping's own timeout before the child is killed.
const PROBE_GRACE: Duration = Duration::from_secs(1);

/// Probes targets with a single ICMP echo request via the ping binary.
#[derive(Debug, Default)]
pub struct PingProber;

impl PingProber {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Prober for PingProber {
    async fn probe(&self, target: &str, timeout: Duration) -> ProbeResult {
        let started = Instant::now();

        // ping -W takes whole seconds; the configured timeout is whole
        // seconds already (positive by validation).
        let mut command = Command::new("ping");
        command
            .arg("-c")
            .arg("1")
            .arg("-W")
            .arg(timeout.as_secs().to_string())
            .arg(target)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        let outcome = match time::timeout(timeout + PROBE_GRACE, command.status()).await {
            Ok(Ok(status)) if status.success() => ProbeOutcome::Reachable {
                latency_ms: started.elapsed().as_millis() as u64,
            },
            Ok(Ok(_)) => ProbeOutcome::Unreachable,
            Ok(Err(error)) => ProbeOutcome::Error {
                message: error.to_string(),
            },
            // Deadline elapsed; the dropped future kills the child.
            Err(_) => ProbeOutcome::TimedOut,
        };

        ProbeResult {
            target: target.to_string(),
            outcome,
        }
    }
}
