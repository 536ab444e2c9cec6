//! Observability subsystem.
//!
//! # Design Decisions
//! - The JSON event stream on stdout is the monitor's only observability
//!   surface; there is no metrics endpoint
//! - Events carry an `event` name plus event-specific fields; the
//!   formatter owns the envelope (`ts`, `level`)

pub mod logging;
