//! Tracing setup. The terminal belongs to the UI, so logs go to a file.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// `<cache_dir>/sidenav/sidenav.log`, or `./sidenav.log` without a cache dir.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("sidenav"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sidenav.log")
}

/// Filter directive: the explicit level, then `RUST_LOG`, then `info`.
pub fn filter_directive(level: Option<&str>) -> String {
    level
        .map(str::to_string)
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".into())
}

pub fn init_tracing(path: &Path, level: Option<&str>) -> Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let directive = filter_directive(level);
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("invalid log filter '{directive}'"))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_thread_names(true)
        .try_init();
    Ok(())
}
