//! Common UI components shared across views.
//!
//! This module contains the log panel, the status bar and the
//! terminal-too-small notice.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::Theme;
use crate::app::App;
use crate::data::duration::format_duration;
use crate::data::MessageLog;

/// Minimum terminal size for a usable display.
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 12;

/// Render the rolling message log, oldest at the top.
pub fn render_log(frame: &mut Frame, log: &MessageLog, theme: &Theme, area: Rect) {
    // Show the newest messages that fit
    let visible = area.height.saturating_sub(2) as usize;
    let skip = log.len().saturating_sub(visible);
    let items: Vec<ListItem> = log
        .iter()
        .skip(skip)
        .map(|line| ListItem::new(line.to_string()).style(theme.log_text))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Logs ")
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(list, area);
}

/// Render the status bar at the bottom.
///
/// Shows: run state, refresh interval, sample count, available controls.
pub fn render_status_bar(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let state = app.state();
    let line = Line::from(vec![
        Span::styled(format!(" {} ", state.label()), theme.state_style(state)),
        Span::raw("│ "),
        Span::raw(format!("every {} ", format_duration(app.refresh_interval()))),
        Span::raw("│ "),
        Span::styled(
            format!("{}", app.history.len()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" samples │ "),
        Span::styled(
            "p:pause z:zoom-in x:zoom-out e:export q:quit",
            theme.hint,
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the hint line for the history view.
pub fn render_history_status(frame: &mut Frame, samples: usize, theme: &Theme, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" HISTORY ", Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(
            format!("{}", samples),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" samples │ "),
        Span::styled("q:quit", theme.hint),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// True when the terminal is too small to draw the dashboard.
pub fn too_small(area: Rect) -> bool {
    area.width < MIN_WIDTH || area.height < MIN_HEIGHT
}

/// Render the "resize to continue" notice.
pub fn render_too_small(frame: &mut Frame, theme: &Theme, area: Rect) {
    let msg = format!(
        "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );
    let paragraph = Paragraph::new(msg)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.warning));
    let top = (area.height / 2).saturating_sub(2);
    let centered = Rect::new(area.x, area.y + top, area.width, 5u16.min(area.height - top));
    frame.render_widget(paragraph, centered);
}
