//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the monitor.
//! All types derive Serde traits so the effective configuration can be
//! serialized for diagnostics.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default health file location, shared with the healthcheck binary.
pub const DEFAULT_HEALTH_FILE: &str = "/tmp/health_status";

/// Default recovery action location.
pub const DEFAULT_ACTION_PATH: &str = "/action.sh";

/// Root configuration for the connectivity monitor.
///
/// Immutable once loaded; the monitor never mutates it.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Probe targets, in declared order. Must not be empty.
    pub targets: Vec<String>,

    /// Delay between probing rounds in seconds.
    pub check_interval_seconds: u64,

    /// Consecutive all-failed rounds before the recovery action fires.
    pub failure_threshold: u32,

    /// Delay after a recovery action before probing resumes, in seconds.
    pub cooldown_seconds: u64,

    /// Per-probe timeout in seconds.
    pub probe_timeout_seconds: u64,

    /// Where the healthy/unhealthy status is published.
    pub health_file: PathBuf,

    /// Recovery action executable, invoked with no arguments.
    pub action_path: PathBuf,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            check_interval_seconds: 30,
            failure_threshold: 3,
            cooldown_seconds: 300,
            probe_timeout_seconds: 5,
            health_file: PathBuf::from(DEFAULT_HEALTH_FILE),
            action_path: PathBuf::from(DEFAULT_ACTION_PATH),
        }
    }
}
