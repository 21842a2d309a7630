//! File-backed tracing setup.
//!
//! The TUI owns stdout and stderr while running, so log records go to a file
//! under the config directory. Filtering follows `FOLIO_LOG` (same syntax as
//! `RUST_LOG`) and defaults to `info`.

use crate::error::{FolioError, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "FOLIO_LOG";

pub fn log_path() -> PathBuf {
    crate::config::config_dir().join("folio").join("folio.log")
}

pub fn init(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| FolioError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("folio.log");

        // A global subscriber may already be installed by another test
        let _ = init(&path);
        tracing::info!("hello from test");

        assert!(path.exists());
    }
}
