//! Shared fakes for the integration tests.

use std::collections::VecDeque;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use linkwatch::action::{ActionOutcome, ActionRunner};
use linkwatch::probe::{ProbeOutcome, ProbeResult, Prober};

/// Prober that pops one scripted outcome per probe call, then repeats the
/// fallback once the script runs dry.
pub struct ScriptedProber {
    script: Mutex<VecDeque<ProbeOutcome>>,
    fallback: ProbeOutcome,
}

impl ScriptedProber {
    pub fn new(script: Vec<ProbeOutcome>, fallback: ProbeOutcome) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback,
        }
    }

    pub fn always(outcome: ProbeOutcome) -> Self {
        Self::new(Vec::new(), outcome)
    }
}

#[async_trait]
impl Prober for ScriptedProber {
    async fn probe(&self, target: &str, _timeout: Duration) -> ProbeResult {
        let outcome = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        ProbeResult {
            target: target.to_string(),
            outcome,
        }
    }
}

/// Action runner that counts invocations and returns a fixed outcome.
pub struct CountingAction {
    invocations: Arc<AtomicUsize>,
    outcome: ActionOutcome,
}

impl CountingAction {
    pub fn new(outcome: ActionOutcome) -> Self {
        Self {
            invocations: Arc::new(AtomicUsize::new(0)),
            outcome,
        }
    }

    pub fn succeeding() -> Self {
        Self::new(ActionOutcome::Completed {
            exit_code: 0,
            duration_ms: 1,
            stdout: String::new(),
            stderr: String::new(),
        })
    }

    /// Handle onto the invocation counter, valid after the runner moves
    /// into the monitor.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        self.invocations.clone()
    }
}

#[async_trait]
impl ActionRunner for CountingAction {
    async fn run_action(&self) -> ActionOutcome {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}
