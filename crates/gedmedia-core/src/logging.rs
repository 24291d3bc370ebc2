//! Log output for the locator and the CLI.
//!
//! Resolution decisions (probe results, thumbnail generation, unknown media
//! types) are emitted through `tracing`. The binary sends them to a log file
//! under the XDG state directory, or to stderr when that file cannot be
//! opened.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "gedmedia.log";

/// Used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info,gedmedia=debug,gedmedia_core=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `~/.local/state/gedmedia/gedmedia.log`, creating the directory.
pub fn log_file_path() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("gedmedia")?;
    dirs.place_state_file(LOG_FILE)
        .context("create gedmedia state directory")
}

/// Log to the default file. Errors leave no subscriber installed, so the
/// caller can fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    init_logging_to(&path)?;
    Ok(path)
}

/// Log (appending) to `path`.
pub fn init_logging_to(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;

    tracing::info!(path = %path.display(), "gedmedia logging initialized");
    Ok(())
}

/// Log to stderr. Does nothing if a subscriber is already installed.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
