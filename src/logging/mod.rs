//! Diagnostic logging setup.
//!
//! The TUI owns the terminal, so tracing output goes to a date-stamped file
//! under the data directory instead of stdout. The filter follows `RUST_LOG`
//! when set and defaults to `promptdeck=info`.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use chrono::Local;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let dir = config.log_dir.clone().unwrap_or_else(default_log_dir);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let path = dir.join(format!("promptdeck_{}.log", Local::now().format("%Y-%m-%d")));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("promptdeck=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Arc::new(file)).with_ansi(false))
        .with(filter)
        .try_init()
        .context("Failed to initialize tracing")?;

    Ok(())
}

fn default_log_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("promptdeck")
        .join("logs")
}
