//! Line charts for the metric series.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use super::Theme;
use crate::data::{ChartSeries, Metric};

/// Render one chart per metric into the given areas.
pub fn render_charts(
    frame: &mut Frame,
    series: &ChartSeries,
    theme: &Theme,
    title_suffix: Option<&str>,
    areas: [(Metric, Rect); 3],
) {
    for (metric, area) in areas {
        let title = match title_suffix {
            Some(suffix) => format!(" {} [{}] ", metric.title(), suffix),
            None => format!(" {} ", metric.title()),
        };
        render_series(frame, area, &title, series.get(metric), theme.metric_color(metric), theme);
    }
}

/// Render a single percentage series as a line chart.
///
/// Data is expected in chronological order (oldest first, newest last)
pub fn render_series(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    data: &[f64],
    color: Color,
    theme: &Theme,
) {
    let points = to_points(data);
    let x_max = (points.len().saturating_sub(1)).max(1) as f64;
    let y_max = y_upper_bound(data);

    let datasets = vec![Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(&points)];

    let latest = data.last().copied().unwrap_or(0.0);
    let block = Block::default()
        .title(title.to_string())
        .title_bottom(format!(" {:.2}% ", latest))
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border));

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(theme.axis))
                .bounds([0.0, x_max]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(theme.axis))
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{:.0}", y_max / 2.0)),
                    Span::raw(format!("{:.0}", y_max)),
                ]),
        );

    frame.render_widget(chart, area);
}

/// Index each value along the x axis.
fn to_points(data: &[f64]) -> Vec<(f64, f64)> {
    data.iter().enumerate().map(|(i, v)| (i as f64, *v)).collect()
}

/// Upper y bound: 100, or the largest value if a source reported more.
fn y_upper_bound(data: &[f64]) -> f64 {
    data.iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(100.0_f64, f64::max)
}
