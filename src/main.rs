//! Monitor entry point: load config, wire up collaborators, run the loop.

use linkwatch::action::ExecActionRunner;
use linkwatch::config;
use linkwatch::health::HealthFile;
use linkwatch::lifecycle::Shutdown;
use linkwatch::monitor::Monitor;
use linkwatch::observability::logging;
use linkwatch::probe::PingProber;

#[tokio::main]
async fn main() {
    logging::init();

    let config = match config::load_from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(event = "config_error", message = %error);
            std::process::exit(1);
        }
    };

    tracing::info!(
        event = "startup",
        targets = %config.targets.join(","),
        check_interval_seconds = config.check_interval_seconds,
        failure_threshold = config.failure_threshold,
        cooldown_seconds = config.cooldown_seconds,
        probe_timeout_seconds = config.probe_timeout_seconds,
        health_file = %config.health_file.display(),
        action_path = %config.action_path.display(),
    );

    let shutdown = Shutdown::new();
    let monitor_shutdown = shutdown.subscribe();
    shutdown.trigger_on_signal();

    let health = HealthFile::new(config.health_file.clone());
    let action = ExecActionRunner::new(config.action_path.clone());
    let monitor = Monitor::new(config, PingProber::new(), action, health);

    monitor.run(monitor_shutdown).await;
}
