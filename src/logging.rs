//! Tracing subscriber setup.
//!
//! The filter comes from `RUST_LOG`, defaulting to `info`.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Where log events go.
#[derive(Debug, Clone)]
pub enum LogTarget {
    /// Append to a file.
    File(PathBuf),
    /// Write to stderr.
    Stderr,
    /// Install no subscriber; events are dropped.
    Off,
}

/// Install the global subscriber for `target`.
pub fn init(target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .try_init()
                .map_err(|e| anyhow!("failed to install logger: {}", e))
        }
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init()
            .map_err(|e| anyhow!("failed to install logger: {}", e)),
        LogTarget::Off => Ok(()),
    }
}
