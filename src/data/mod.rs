//! Data models and in-memory history.
//!
//! ## Submodules
//!
//! - [`sample`]: The [`MetricSample`] value type and the [`Metric`] stream enum
//! - [`window`]: Fixed-capacity [`SlidingWindow`] used for chart data
//! - [`history`]: Per-session [`History`] (windows plus the full export log)
//! - [`series`]: [`ChartSeries`], the chart-ready arrays handed to the UI
//! - [`log`]: Rolling [`MessageLog`] of status and error lines
//! - [`duration`]: Parsing and formatting of duration strings (e.g., "2s", "500ms")
//!
//! ## Data Flow
//!
//! ```text
//! Collector::collect()  ──▶  MetricSample
//!                                 │
//!                                 ▼
//!                         History::record()
//!                          │             │
//!                          ▼             ▼
//!                  SlidingWindow x3   full log ──▶ store::codec::write_history
//!                          │
//!                          ▼
//!                     ChartSeries ──▶ ui
//! ```

pub mod duration;
pub mod history;
pub mod log;
pub mod sample;
pub mod series;
pub mod window;

pub use history::History;
pub use log::MessageLog;
pub use sample::{Metric, MetricSample};
pub use series::ChartSeries;
pub use window::SlidingWindow;
