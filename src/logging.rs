//! File logging.
//!
//! Stdout is the animation surface, so logs only ever go to a file. Logging is
//! off unless `HELLO_WORLD_LOG` names a path; the file is truncated on startup.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::info;

pub const LOG_ENV: &str = "HELLO_WORLD_LOG";

/// Log file path from the environment, if any.
pub fn log_path_from_env() -> Option<PathBuf> {
    std::env::var_os(LOG_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

pub fn init() -> Result<()> {
    let Some(path) = log_path_from_env() else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!(path = %path.display(), "logging enabled");
    Ok(())
}
