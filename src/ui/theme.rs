//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::app::RunState;
use crate::data::Metric;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Line color for the CPU chart.
    pub cpu: Color,
    /// Line color for the memory chart.
    pub memory: Color,
    /// Line color for the disk chart.
    pub disk: Color,
    /// Color for chart axes and labels.
    pub axis: Color,
    /// Accent color for highlights and the running indicator.
    pub highlight: Color,
    /// Color for the paused indicator.
    pub warning: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for log lines.
    pub log_text: Style,
    /// Style for the status bar key hints.
    pub hint: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            cpu: Color::Green,
            memory: Color::Yellow,
            disk: Color::Cyan,
            axis: Color::White,
            highlight: Color::Cyan,
            warning: Color::Yellow,
            border: Color::Gray,
            log_text: Style::default().fg(Color::White),
            hint: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            cpu: Color::Green,
            memory: Color::Magenta,
            disk: Color::Blue,
            axis: Color::Black,
            highlight: Color::Blue,
            warning: Color::Red,
            border: Color::DarkGray,
            log_text: Style::default().fg(Color::Black),
            hint: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Line color for a metric's chart.
    pub fn metric_color(&self, metric: Metric) -> Color {
        match metric {
            Metric::Cpu => self.cpu,
            Metric::Memory => self.memory,
            Metric::Disk => self.disk,
        }
    }

    /// Style for the run-state badge in the status bar.
    pub fn state_style(&self, state: RunState) -> Style {
        let color = match state {
            RunState::Running => self.highlight,
            RunState::Paused => self.warning,
            RunState::Terminating => self.border,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
