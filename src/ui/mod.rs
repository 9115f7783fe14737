//! Terminal UI rendering using ratatui.
//!
//! Both dashboard modes draw the same three charts from a [`ChartSeries`];
//! only the surrounding widgets differ.
//!
//! ## Submodules
//!
//! - [`layout`]: Widget placement, recomputed on resize
//! - [`chart`]: Line charts for the metric series
//! - [`common`]: Log panel, status bars and the too-small notice
//! - [`sparkline`]: Text sparklines for the plain monitor
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Rendering Architecture
//!
//! ```text
//! ┌─────────────────┬─────────────────┐
//! │ chart (cpu)     │ chart (memory)  │
//! ├─────────────────┴─────────────────┤
//! │ chart (disk)                      │
//! ├───────────────────────────────────┤
//! │ Logs (common::render_log)         │  live only
//! └───────────────────────────────────┘
//!   status bar (common::render_*status*)
//! ```

pub mod chart;
pub mod common;
pub mod layout;
pub mod sparkline;
pub mod theme;

pub use layout::DashboardLayout;
pub use theme::Theme;

use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use crate::app::App;
use crate::data::Metric;
use crate::store::Replay;

/// Draw the live dashboard.
pub fn render_live(frame: &mut Frame, app: &App, theme: &Theme) {
    let area = frame.area();
    if common::too_small(area) {
        common::render_too_small(frame, theme, area);
        return;
    }

    // The cached layout is refreshed on resize events; fall back to a fresh
    // one if the first frame arrives before any resize.
    let layout = if app.layout().is_stale(area) {
        DashboardLayout::compute(area)
    } else {
        *app.layout()
    };

    chart::render_charts(
        frame,
        &app.series(),
        theme,
        None,
        [
            (Metric::Cpu, layout.cpu),
            (Metric::Memory, layout.memory),
            (Metric::Disk, layout.disk),
        ],
    );
    common::render_log(frame, &app.log, theme, layout.log);
    common::render_status_bar(frame, app, theme, layout.status);
}

/// Draw a replayed history file.
pub fn render_history(frame: &mut Frame, replay: &Replay, theme: &Theme) {
    let area = frame.area();
    if common::too_small(area) {
        common::render_too_small(frame, theme, area);
        return;
    }

    let [charts, status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    let [top, disk] =
        Layout::vertical([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(charts);
    let [cpu, memory] =
        Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(top);

    let label = replay.range().label();
    chart::render_charts(
        frame,
        &replay.series(),
        theme,
        Some(&label),
        [(Metric::Cpu, cpu), (Metric::Memory, memory), (Metric::Disk, disk)],
    );
    common::render_history_status(frame, replay.len(), theme, status);
}
