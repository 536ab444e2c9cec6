//! Configuration loading from the environment.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::schema::MonitorConfig;

/// Comma-separated probe targets. Required.
pub const ENV_TARGETS: &str = "PING_TARGETS";
/// Delay between probing rounds in seconds.
pub const ENV_CHECK_INTERVAL: &str = "CHECK_INTERVAL_SECONDS";
/// Consecutive all-failed rounds before the action fires.
pub const ENV_FAILURE_THRESHOLD: &str = "FAILURE_THRESHOLD";
/// Post-action cooldown in seconds.
pub const ENV_COOLDOWN: &str = "COOLDOWN_SECONDS";
/// Per-probe timeout in seconds.
pub const ENV_PROBE_TIMEOUT: &str = "PING_TIMEOUT_SECONDS";
/// Health file path override.
pub const ENV_HEALTH_FILE: &str = "HEALTH_FILE";
/// Recovery action path override.
pub const ENV_ACTION_PATH: &str = "ACTION_PATH";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is required")]
    MissingTargets(&'static str),

    #[error("{0} must contain at least one target")]
    EmptyTargets(&'static str),

    #[error("{var} must be a positive integer (got {value:?})")]
    InvalidNumber { var: &'static str, value: String },
}

/// Load and validate configuration from process environment variables.
pub fn load_from_env() -> Result<MonitorConfig, ConfigError> {
    load_from(|var| env::var(var).ok())
}

/// Load configuration through an arbitrary variable lookup.
///
/// Tests inject a map here instead of mutating process-global state.
pub fn load_from<F>(lookup: F) -> Result<MonitorConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw_targets = lookup(ENV_TARGETS).unwrap_or_default();
    if raw_targets.is_empty() {
        return Err(ConfigError::MissingTargets(ENV_TARGETS));
    }

    let targets: Vec<String> = raw_targets
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect();
    if targets.is_empty() {
        return Err(ConfigError::EmptyTargets(ENV_TARGETS));
    }

    let defaults = MonitorConfig::default();

    let threshold = positive(&lookup, ENV_FAILURE_THRESHOLD, u64::from(defaults.failure_threshold))?;
    let failure_threshold = u32::try_from(threshold).map_err(|_| ConfigError::InvalidNumber {
        var: ENV_FAILURE_THRESHOLD,
        value: threshold.to_string(),
    })?;

    Ok(MonitorConfig {
        targets,
        check_interval_seconds: positive(&lookup, ENV_CHECK_INTERVAL, defaults.check_interval_seconds)?,
        failure_threshold,
        cooldown_seconds: positive(&lookup, ENV_COOLDOWN, defaults.cooldown_seconds)?,
        probe_timeout_seconds: positive(&lookup, ENV_PROBE_TIMEOUT, defaults.probe_timeout_seconds)?,
        health_file: lookup(ENV_HEALTH_FILE)
            .map(PathBuf::from)
            .unwrap_or(defaults.health_file),
        action_path: lookup(ENV_ACTION_PATH)
            .map(PathBuf::from)
            .unwrap_or(defaults.action_path),
    })
}

/// Parse an optional positive-integer variable, falling back to its default.
fn positive<F>(lookup: &F, var: &'static str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(ConfigError::InvalidNumber { var, value: raw }),
        },
    }
}
