//! OS signal handling.
//!
//! # Responsibilities
//! - Wait for SIGTERM or SIGINT (async-safe, via Tokio)
//! - Translate the first signal into the internal shutdown event

use tokio::signal;

/// Resolve when the process receives a termination signal.
pub async fn wait_for_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal as unix_signal, SignalKind};

        match unix_signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = signal::ctrl_c() => {}
                    _ = term.recv() => {}
                }
            }
            // No SIGTERM handler available; SIGINT still works.
            Err(_) => {
                let _ = signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = signal::ctrl_c().await;
    }
}
