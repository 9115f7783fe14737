//! # sysdash
//!
//! A terminal dashboard and library for watching host resource usage.
//!
//! This crate samples CPU, memory and disk utilization at a configurable
//! interval, charts the most recent window of samples in an interactive
//! terminal UI, and exports the whole session to CSV. Exported files can be
//! replayed later in a read-only history view.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │ (history)│    │(charts) │    │         │ │
//! │  └────┬────┘    └────┬─────┘    └─────────┘    └─────────┘ │
//! │       │              │                                      │
//! │       ▼              ▼                                      │
//! │  ┌─────────┐    ┌──────────┐                                │
//! │  │ source  │    │  store   │◀── CSV export / replay         │
//! │  │(metrics)│    │  (csv)   │                                │
//! │  └─────────┘    └──────────┘                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: The dashboard controller: run state, pause, zoom, export and
//!   shutdown, driven by [`Command`]s and timer ticks
//! - **[`live`]**: The async loop feeding the controller input, timer ticks and
//!   the shutdown signal
//! - **[`source`]**: The [`MetricSource`] trait, sysinfo-backed sources and the
//!   [`Collector`] that samples all three metrics concurrently
//! - **[`data`]**: Samples, sliding windows, the session [`History`] and the
//!   dashboard message log
//! - **[`store`]**: CSV encoding and decoding plus time-range replay
//! - **[`ui`]**: Terminal rendering using ratatui, with theme support
//! - **[`config`]**: Settings from file and environment, and per-run validation
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Live dashboard, exporting to metrics.csv on demand and on exit
//! sysdash dashboard --csv metrics.csv --interval 1s
//!
//! # Replay part of a recorded session
//! sysdash dashboard --mode history --csv metrics.csv \
//!     --from 2025-01-01T10:00:00Z --to 2025-01-01T11:00:00Z
//!
//! # Plain sparklines on stdout
//! sysdash monitor
//! ```
//!
//! ### As a library
//!
//! ```
//! use sysdash::{App, Command, RunState, Settings, Transition};
//!
//! let mut app = App::new(Settings::default(), None);
//! assert_eq!(app.apply(Command::TogglePause), Transition::Stay);
//! assert_eq!(app.state(), RunState::Paused);
//! ```
//!
//! ### Replaying an exported file
//!
//! ```no_run
//! use std::path::Path;
//! use sysdash::{replay, TimeRange};
//!
//! let replay = replay(Path::new("metrics.csv"), TimeRange::unbounded())?;
//! println!("{} samples", replay.len());
//! # Ok::<(), sysdash::ReplayError>(())
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod live;
pub mod logging;
pub mod monitor;
pub mod source;
pub mod store;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, Command, RunState, Transition};
pub use config::{DashboardConfig, Mode, Settings};
pub use data::{ChartSeries, History, Metric, MetricSample};
pub use error::{CollectionError, ConfigError, InputError, PersistenceError, ReplayError};
pub use source::{Collector, MetricSource};
pub use store::{read_history, replay, write_history, Replay, TimeRange};
