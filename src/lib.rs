//! Internet connectivity watchdog.
//!
//! Probes a set of external targets on a fixed interval and, when every
//! target has been unreachable for a sustained run of rounds, invokes a
//! recovery action and cools down before probing resumes. Health is
//! published to a file the container runtime can poll.
//!
//! # Architecture Overview
//!
//! ```text
//!            ┌────────────────────────────────────────────────┐
//!            │                   MONITOR                       │
//!            │                                                 │
//!            │  ┌─────────┐   ┌─────────┐   ┌──────────────┐  │
//!   targets ─┼─▶│  probe  │──▶│ monitor │──▶│    health    │──┼─▶ health file
//!            │  │ (ping)  │   │  engine │   │  publisher   │  │
//!            │  └─────────┘   └────┬────┘   └──────────────┘  │
//!            │                     │ breach                    │
//!            │                     ▼                           │
//!            │              ┌──────────────┐                   │
//!            │              │    action    │──────────────────┼─▶ recovery script
//!            │              │    runner    │                   │
//!            │              └──────────────┘                   │
//!            │                                                 │
//!            │  ┌────────────────────────────────────────────┐ │
//!            │  │          Cross-Cutting Concerns            │ │
//!            │  │  ┌────────┐ ┌───────────┐ ┌─────────────┐  │ │
//!            │  │  │ config │ │ lifecycle │ │observability│  │ │
//!            │  │  └────────┘ └───────────┘ └─────────────┘  │ │
//!            │  └────────────────────────────────────────────┘ │
//!            └────────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod action;
pub mod config;
pub mod health;
pub mod monitor;
pub mod probe;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::MonitorConfig;
pub use lifecycle::Shutdown;
pub use monitor::Monitor;
