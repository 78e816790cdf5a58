//! Logging setup.
//!
//! The filter comes from `ROWREDUCE_LOG`, then the config file's `log_filter`.
//! Command mode logs to stderr at `warn` by default. The TUI owns the terminal,
//! so it only logs when a filter is configured, and then to a file.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "ROWREDUCE_LOG";

fn env_filter(configured: Option<&str>) -> Option<EnvFilter> {
    EnvFilter::try_from_env(LOG_ENV)
        .ok()
        .or_else(|| configured.and_then(|directive| EnvFilter::try_new(directive).ok()))
}

/// Log to stderr (command mode).
pub fn init_stderr(configured: Option<&str>) {
    let filter = env_filter(configured).unwrap_or_else(|| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Log to `path` if a filter is configured (TUI mode).
pub fn init_file(configured: Option<&str>, path: &Path) -> anyhow::Result<()> {
    let Some(filter) = env_filter(configured) else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
