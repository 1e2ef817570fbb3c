//! File logging.
//!
//! The terminal is owned by the renderer while the game runs, so log output
//! goes to a file instead of stderr.

use crate::config::project_dirs;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "flappy.log";

/// `<data dir>/flappy.log`, falling back to the temp dir.
pub fn default_log_path() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_local_dir().join(LOG_FILE_NAME))
        .unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE_NAME))
}

/// Install the global tracing subscriber, appending to `path`.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))
}
