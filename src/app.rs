//! Live dashboard state and the controller state machine.
//!
//! [`App`] owns everything the live view mutates: the run state, the live
//! copy of the polling interval, the session [`History`], the rolling
//! [`MessageLog`] and the current widget layout. The event loop in [`crate::live`]
//! feeds it timer ticks, commands and resize notifications one at a time, so
//! none of this state needs locking.

use std::path::{Path, PathBuf};
use std::time::Duration;

use ratatui::layout::Rect;
use tracing::{info, warn};

use crate::config::Settings;
use crate::data::duration::format_duration;
use crate::data::{ChartSeries, History, MessageLog, MetricSample};
use crate::error::CollectionError;
use crate::source::Collector;
use crate::store::write_history;
use crate::ui::DashboardLayout;

/// Shortest interval zoom-in may reach.
pub const MIN_REFRESH_INTERVAL: Duration = Duration::from_millis(100);

/// Longest interval zoom-out may reach.
pub const MAX_REFRESH_INTERVAL: Duration = Duration::from_secs(600);

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Ticking and rendering.
    Running,
    /// Ticks are ignored; keys and resizes are still handled.
    Paused,
    /// Shutting down; only the final export remains.
    Terminating,
}

impl RunState {
    pub fn label(&self) -> &'static str {
        match self {
            RunState::Running => "RUNNING",
            RunState::Paused => "PAUSED",
            RunState::Terminating => "EXITING",
        }
    }
}

/// A user request, decoded from a key press or a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    ZoomIn,
    ZoomOut,
    Export,
    Quit,
}

/// What the event loop must do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing beyond a redraw.
    Stay,
    /// Restart the timer with the new interval.
    ResetTimer(Duration),
    /// Stop the timer and event polling and shut down.
    Terminate,
}

/// Main application state for the live dashboard.
pub struct App {
    state: RunState,
    /// Live copy of the settings; zoom mutates this, never the loaded config.
    settings: Settings,
    export_path: Option<PathBuf>,
    pub history: History,
    pub log: MessageLog,
    layout: DashboardLayout,
    ticks_skipped: u64,
}

impl App {
    /// Create a new App in the `Running` state.
    pub fn new(settings: Settings, export_path: Option<PathBuf>) -> Self {
        Self {
            state: RunState::Running,
            settings,
            export_path,
            history: History::new(),
            log: MessageLog::default(),
            layout: DashboardLayout::default(),
            ticks_skipped: 0,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn refresh_interval(&self) -> Duration {
        self.settings.refresh_interval
    }

    pub fn cpu_threshold(&self) -> f64 {
        self.settings.cpu_threshold
    }

    pub fn export_path(&self) -> Option<&Path> {
        self.export_path.as_deref()
    }

    pub fn layout(&self) -> &DashboardLayout {
        &self.layout
    }

    /// Timer ticks dropped because the dashboard was paused.
    pub fn ticks_skipped(&self) -> u64 {
        self.ticks_skipped
    }

    /// Chart data for the current window.
    pub fn series(&self) -> ChartSeries {
        self.history.series()
    }

    /// Add a status line to the dashboard log.
    pub fn info(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!("{}", message);
        self.log.push(message);
    }

    /// Add an error or alert line to the dashboard log.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("{}", message);
        self.log.push(message);
    }

    /// Handle a timer tick.
    ///
    /// Collects only while `Running`; a paused tick is counted and dropped.
    pub async fn tick(&mut self, collector: &Collector) {
        if self.state != RunState::Running {
            if self.state == RunState::Paused {
                self.ticks_skipped += 1;
            }
            return;
        }
        let outcome = collector.collect().await;
        self.record_outcome(outcome);
    }

    /// Apply the result of one collection.
    ///
    /// A failed tick is logged and skipped; nothing is recorded for it.
    pub fn record_outcome(&mut self, outcome: Result<MetricSample, CollectionError>) {
        match outcome {
            Ok(sample) => {
                if sample.cpu() > self.settings.cpu_threshold {
                    self.warn(format!("High CPU usage detected: {:.2}%", sample.cpu()));
                }
                self.history.record(sample);
            }
            Err(e) => self.warn(e.to_string()),
        }
    }

    /// Apply a user command and report what the event loop must do next.
    pub fn apply(&mut self, command: Command) -> Transition {
        if self.state == RunState::Terminating {
            return Transition::Terminate;
        }

        match command {
            Command::TogglePause => {
                self.toggle_pause();
                Transition::Stay
            }
            Command::ZoomIn => self.zoom(Zoom::In),
            Command::ZoomOut => self.zoom(Zoom::Out),
            Command::Export => {
                self.export();
                Transition::Stay
            }
            Command::Quit => {
                self.state = RunState::Terminating;
                self.info("Quit event received.");
                Transition::Terminate
            }
        }
    }

    /// Handle an external cancellation signal.
    pub fn cancel(&mut self) -> Transition {
        if self.state != RunState::Terminating {
            self.state = RunState::Terminating;
            self.info("Shutdown signal received. Exiting live dashboard.");
        }
        Transition::Terminate
    }

    fn toggle_pause(&mut self) {
        match self.state {
            RunState::Running => {
                self.state = RunState::Paused;
                self.info("Live updates paused.");
            }
            RunState::Paused => {
                self.state = RunState::Running;
                self.info("Live updates resumed.");
            }
            RunState::Terminating => {}
        }
    }

    fn zoom(&mut self, zoom: Zoom) -> Transition {
        let current = self.settings.refresh_interval;
        let (requested, direction) = match zoom {
            Zoom::In => (current / 2, "in"),
            Zoom::Out => (current.saturating_mul(2), "out"),
        };
        // Clamp without ever moving against the direction of travel, so an
        // interval that starts outside the bounds is left where it is
        let next = match zoom {
            Zoom::In => requested.max(MIN_REFRESH_INTERVAL).min(current),
            Zoom::Out => requested.min(MAX_REFRESH_INTERVAL).max(current),
        };
        self.settings.refresh_interval = next;

        if next != requested {
            self.info(format!(
                "Zoom {}: refresh interval limited to {}",
                direction,
                format_duration(next)
            ));
        } else {
            self.info(format!(
                "Zoom {}: new refresh interval: {}",
                direction,
                format_duration(next)
            ));
        }
        Transition::ResetTimer(next)
    }

    /// Write the session log to the configured export path.
    ///
    /// Failures are logged; the dashboard keeps running.
    pub fn export(&mut self) {
        let Some(path) = self.export_path.clone() else {
            self.info("No CSV path configured; start with --csv to enable export.");
            return;
        };
        match write_history(&path, self.history.full_log()) {
            Ok(()) => self.info(format!("Exported history to {}", path.display())),
            Err(e) => self.warn(format!("Failed to export CSV: {}", e)),
        }
    }

    /// Final export on the way out. Never fails the shutdown.
    pub fn shutdown(&mut self) {
        self.state = RunState::Terminating;
        let Some(path) = self.export_path.clone() else {
            return;
        };
        match write_history(&path, self.history.full_log()) {
            Ok(()) => self.info(format!("Exported history to {}", path.display())),
            Err(e) => self.warn(format!("Failed to export CSV on shutdown: {}", e)),
        }
    }

    /// Recompute widget placement for a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.layout = DashboardLayout::compute(Rect::new(0, 0, width, height));
    }
}

#[derive(Debug, Clone, Copy)]
enum Zoom {
    In,
    Out,
}
