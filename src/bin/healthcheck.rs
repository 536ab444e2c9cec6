use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use linkwatch::config::DEFAULT_HEALTH_FILE;
use linkwatch::health::HEALTHY;

/// Container healthcheck probe: exits 0 iff the monitor reports healthy.
#[derive(Parser)]
#[command(name = "healthcheck")]
#[command(about = "Read the linkwatch health file", long_about = None)]
struct Cli {
    /// Path to the health file written by the monitor.
    #[arg(short, long, default_value = DEFAULT_HEALTH_FILE)]
    file: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match std::fs::read_to_string(&cli.file) {
        Ok(contents) if contents.trim() == HEALTHY => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("error: could not read {}: {}", cli.file.display(), error);
            ExitCode::FAILURE
        }
    }
}
