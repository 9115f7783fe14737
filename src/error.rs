//! Error types.
//!
//! Every class here is recoverable: a failed tick is skipped, a failed export
//! is abandoned, a broken config file falls back to defaults, and bad input is
//! reported before the dashboard starts.

use std::path::PathBuf;

use thiserror::Error;

use crate::data::Metric;

/// One metric source failed during a tick.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Error retrieving {metric} usage: {cause}")]
pub struct CollectionError {
    pub metric: Metric,
    pub cause: String,
}

impl CollectionError {
    pub fn new(metric: Metric, cause: impl Into<String>) -> Self {
        Self {
            metric,
            cause: cause.into(),
        }
    }
}

/// Reading or writing a CSV history file failed.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error on {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to move temporary file into {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

/// The configuration file could not be used.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid refresh_interval {value:?}: {reason}")]
    InvalidInterval { value: String, reason: String },
}

/// Invalid command-line input. Reported to the user, never entered into the dashboard.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid mode. Use 'live' or 'history'.")]
    InvalidMode(String),

    #[error("Invalid '{flag}' time: {source}")]
    InvalidTime {
        flag: &'static str,
        #[source]
        source: chrono::ParseError,
    },

    #[error("CSV file path must be provided in history mode.")]
    MissingCsvPath,
}

/// Replaying a history file produced nothing to show.
#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("Error reading CSV: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("No data available for the specified time range.")]
    NoDataInRange,
}
