//! Health publication subsystem.
//!
//! # Design Decisions
//! - Health is a single binary signal; the file holds the literal text
//!   `healthy` or `unhealthy`, nothing else
//! - Last write wins; no history is retained
//! - The out-of-process reader (container runtime) polls at arbitrary
//!   intervals, so every round overwrites the file

pub mod file;

pub use file::HealthFile;

/// File contents while the monitor considers connectivity up.
pub const HEALTHY: &str = "healthy";

/// File contents while connectivity is down or cooling down.
pub const UNHEALTHY: &str = "unhealthy";
