//! Dashboard configuration.
//!
//! Settings are layered: built-in defaults, then an optional config file,
//! then `SYSDASH_*` environment variables, then command-line overrides.
//!
//! ```yaml
//! refresh_interval: "2s"
//! cpu_threshold: 90.0
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::{info, warn};

use crate::data::duration::parse_duration;
use crate::error::{ConfigError, InputError};
use crate::store::TimeRange;

/// Default polling interval.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(2);

/// Default CPU alert threshold, in percent.
pub const DEFAULT_CPU_THRESHOLD: f64 = 90.0;

/// Tunable settings shared by the dashboard and the plain monitor.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Time between ticks.
    pub refresh_interval: Duration,
    /// CPU percentage above which a tick logs an alert.
    pub cpu_threshold: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            cpu_threshold: DEFAULT_CPU_THRESHOLD,
        }
    }
}

/// Keys recognized in the config file. Anything else is ignored.
#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    refresh_interval: Option<String>,
    cpu_threshold: Option<f64>,
}

impl Settings {
    /// Load settings from an optional config file and the environment,
    /// filling gaps with defaults.
    ///
    /// The file format is picked from the extension (YAML, JSON, TOML, ...).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let file: FileSettings = builder
            .add_source(Environment::with_prefix("SYSDASH").try_parsing(true))
            .build()?
            .try_deserialize()?;

        let mut settings = Self::default();
        if let Some(value) = file.refresh_interval {
            let interval = parse_duration(&value).map_err(|e| ConfigError::InvalidInterval {
                value: value.clone(),
                reason: e.to_string(),
            })?;
            if interval.is_zero() {
                return Err(ConfigError::InvalidInterval {
                    value,
                    reason: "must be greater than zero".to_string(),
                });
            }
            settings.refresh_interval = interval;
        }
        if let Some(threshold) = file.cpu_threshold {
            settings.cpu_threshold = threshold;
        }
        Ok(settings)
    }

    /// Like [`Settings::load`], but falls back to defaults on failure.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match Self::load(path) {
            Ok(settings) => {
                if let Some(path) = path {
                    info!(path = %path.display(), "loaded configuration");
                }
                settings
            }
            Err(e) => {
                warn!(error = %e, "failed to load configuration, using defaults");
                Self::default()
            }
        }
    }

    /// Apply a command-line interval override.
    pub fn with_interval(mut self, interval: Option<Duration>) -> Self {
        if let Some(interval) = interval {
            self.refresh_interval = interval;
        }
        self
    }
}

/// Which dashboard to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Live,
    History,
}

impl FromStr for Mode {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "live" => Ok(Mode::Live),
            "history" => Ok(Mode::History),
            other => Err(InputError::InvalidMode(other.to_string())),
        }
    }
}

/// Validated configuration for one dashboard invocation.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub settings: Settings,
    pub mode: Mode,
    /// Export target in live mode, source file in history mode.
    pub csv_path: Option<PathBuf>,
    /// Replay bounds (history mode only).
    pub range: TimeRange,
}

impl DashboardConfig {
    /// Validate raw command-line values.
    ///
    /// History mode requires a CSV path; time bounds must be RFC 3339.
    pub fn new(
        settings: Settings,
        mode: &str,
        csv_path: Option<PathBuf>,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<Self, InputError> {
        let mode: Mode = mode.parse()?;
        if mode == Mode::History && csv_path.is_none() {
            return Err(InputError::MissingCsvPath);
        }
        let range = TimeRange::new(parse_bound("from", from)?, parse_bound("to", to)?);
        Ok(Self {
            settings,
            mode,
            csv_path,
            range,
        })
    }
}

fn parse_bound(flag: &'static str, value: Option<&str>) -> Result<Option<DateTime<Utc>>, InputError> {
    value
        .filter(|v| !v.is_empty())
        .map(|v| {
            DateTime::parse_from_rfc3339(v)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|source| InputError::InvalidTime { flag, source })
        })
        .transpose()
}
