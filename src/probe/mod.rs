//! Reachability probing subsystem.
//!
//! # Data Flow
//! ```text
//! Monitor round
//!     → Prober::probe(target, timeout) for each target, in order
//!     → ProbeResult per target
//!     → aggregated by the monitor (any success = reachable round)
//! ```
//!
//! # Design Decisions
//! - The prober is a trait so tests substitute scripted fakes for the
//!   real ping subprocess
//! - A probe never returns an error: every failure mode collapses into
//!   a failure outcome and the loop keeps running
//! - Failure outcomes carry a classification (unreachable, timeout, or
//!   the underlying message) that surfaces verbatim in check_result logs

use std::time::Duration;

use async_trait::async_trait;

pub mod pinger;

pub use pinger::PingProber;

/// Outcome of probing a single target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    /// Target address as configured.
    pub target: String,
    /// What happened.
    pub outcome: ProbeOutcome,
}

/// Classification of a single probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Target answered within the timeout.
    Reachable { latency_ms: u64 },
    /// Probe ran to completion but the target did not answer.
    Unreachable,
    /// Probe exceeded its deadline.
    TimedOut,
    /// Probe could not be carried out at all.
    Error { message: String },
}

impl ProbeOutcome {
    pub fn is_reachable(&self) -> bool {
        matches!(self, ProbeOutcome::Reachable { .. })
    }

    /// Failure classification as it appears in log output.
    pub fn error_label(&self) -> Option<&str> {
        match self {
            ProbeOutcome::Reachable { .. } => None,
            ProbeOutcome::Unreachable => Some("unreachable"),
            ProbeOutcome::TimedOut => Some("timeout"),
            ProbeOutcome::Error { message } => Some(message),
        }
    }
}

/// A single reachability check against one target.
///
/// Implementations must not block longer than the timeout plus a small
/// fixed grace period, and must not propagate errors.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, target: &str, timeout: Duration) -> ProbeResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_labels() {
        assert_eq!(ProbeOutcome::Reachable { latency_ms: 4 }.error_label(), None);
        assert_eq!(ProbeOutcome::Unreachable.error_label(), Some("unreachable"));
        assert_eq!(ProbeOutcome::TimedOut.error_label(), Some("timeout"));
        let err = ProbeOutcome::Error {
            message: "no such file".into(),
        };
        assert_eq!(err.error_label(), Some("no such file"));
    }
}
