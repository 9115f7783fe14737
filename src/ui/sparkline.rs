//! Text sparklines for the plain (non-TUI) monitor.

const SPARKLINE_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render percentages as one block character each, scaled to 0-100.
///
/// Values outside the range are pinned to the lowest or highest bar.
pub fn render_sparkline(data: &[f64]) -> String {
    data.iter()
        .map(|&v| {
            let level = if v.is_finite() { (v / 100.0 * 7.0).round() } else { 0.0 };
            SPARKLINE_CHARS[level.clamp(0.0, 7.0) as usize]
        })
        .collect()
}
