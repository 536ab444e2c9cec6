//! File-backed health signal.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::health::{HEALTHY, UNHEALTHY};

/// Publishes the latest healthy/unhealthy value to a well-known path.
#[derive(Debug, Clone)]
pub struct HealthFile {
    path: PathBuf,
}

impl HealthFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the file with the latest value.
    pub async fn publish(&self, healthy: bool) -> io::Result<()> {
        let status = if healthy { HEALTHY } else { UNHEALTHY };
        fs::write(&self.path, status).await
    }
}
