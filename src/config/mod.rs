//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! environment variables
//!     → loader.rs (read & parse)
//!     → validation inline (targets non-empty, integers positive)
//!     → MonitorConfig (validated, immutable)
//!     → owned by the monitor for the process lifetime
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - Every setting except the target list has a default
//! - Loading is factored over a variable lookup so tests never touch
//!   process-global environment state

pub mod loader;
pub mod schema;

pub use loader::{load_from_env, ConfigError};
pub use schema::MonitorConfig;
pub use schema::{DEFAULT_ACTION_PATH, DEFAULT_HEALTH_FILE};
