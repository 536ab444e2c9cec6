//! Monitor loop subsystem.
//!
//! # Data Flow
//! ```text
//! Round (engine.rs):
//!     Probe every target in order
//!     → any success? (state.rs folds it into the failure counter)
//!     → publish healthy/unhealthy
//!     → on breach: run action, cool down, reset counter
//!     → sleep until the next round
//!
//! State machine (state.rs):
//!     counter 0 ←→ counter n → breach at threshold → reset after cooldown
//! ```
//!
//! # Design Decisions
//! - State lives in an explicit struct owned by the engine, never shared
//! - The per-round transition is a pure function of "was anything
//!   reachable", unit-testable without I/O
//! - The engine checks for shutdown only at its sleep points; an
//!   in-flight round always completes

pub mod engine;
pub mod state;

pub use engine::Monitor;
pub use state::{MonitorState, RoundEvaluation};
