//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger()
//!
//! Shutdown (shutdown.rs):
//!     broadcast to subscribers → monitor exits between sleeps → exit 0
//! ```
//!
//! # Design Decisions
//! - The monitor has no termination condition of its own; the signal is
//!   the only way out
//! - Shutdown never cancels an in-flight probe or action; the loop drains
//!   to its next sleep point first

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
