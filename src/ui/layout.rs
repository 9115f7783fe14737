//! Widget placement for the live dashboard.

use ratatui::layout::{Constraint, Layout, Rect};

use crate::data::log::MAX_LOG_MESSAGES;

/// Log panel height: every kept message plus the two border rows.
const LOG_PANEL_HEIGHT: u16 = MAX_LOG_MESSAGES as u16 + 2;

/// Where each widget goes for a given terminal size.
///
/// ```text
/// ┌─────────────┬─────────────┐
/// │ CPU         │ Memory      │
/// ├─────────────┴─────────────┤
/// │ Disk                      │
/// ├───────────────────────────┤
/// │ Logs                      │
/// └───────────────────────────┘
///   status bar
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardLayout {
    pub area: Rect,
    pub cpu: Rect,
    pub memory: Rect,
    pub disk: Rect,
    pub log: Rect,
    pub status: Rect,
}

impl DashboardLayout {
    /// Split `area` into chart, log and status regions.
    ///
    /// The log panel takes at most a third of the space above the status bar.
    pub fn compute(area: Rect) -> Self {
        let [body, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let log_height = LOG_PANEL_HEIGHT.min(body.height / 3);
        let [charts, log] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(log_height)]).areas(body);

        let [top, disk] =
            Layout::vertical([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(charts);
        let [cpu, memory] =
            Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(top);

        Self {
            area,
            cpu,
            memory,
            disk,
            log,
            status,
        }
    }

    /// True when the cached layout was computed for a different terminal size.
    pub fn is_stale(&self, area: Rect) -> bool {
        self.area != area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inside(inner: Rect, outer: Rect) -> bool {
        inner.x >= outer.x
            && inner.y >= outer.y
            && inner.right() <= outer.right()
            && inner.bottom() <= outer.bottom()
    }

    #[test]
    fn test_layout_regions_fit() {
        for (w, h) in [(80, 24), (120, 40), (200, 60), (40, 12)] {
            let area = Rect::new(0, 0, w, h);
            let layout = DashboardLayout::compute(area);
            for rect in [layout.cpu, layout.memory, layout.disk, layout.log, layout.status] {
                assert!(inside(rect, area), "{:?} outside {:?}", rect, area);
            }
            assert_eq!(layout.status.height, 1);
            assert_eq!(layout.status.y, h - 1);
        }
    }

    #[test]
    fn test_log_panel_full_height_on_tall_terminal() {
        let layout = DashboardLayout::compute(Rect::new(0, 0, 120, 60));
        assert_eq!(layout.log.height, LOG_PANEL_HEIGHT);
        assert_eq!(layout.log.bottom(), layout.status.y);
    }

    #[test]
    fn test_log_panel_shrinks_on_short_terminal() {
        let layout = DashboardLayout::compute(Rect::new(0, 0, 80, 16));
        assert_eq!(layout.log.height, 5);
    }

    #[test]
    fn test_charts_side_by_side() {
        let layout = DashboardLayout::compute(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.cpu.y, layout.memory.y);
        assert_eq!(layout.cpu.right(), layout.memory.x);
        assert_eq!(layout.disk.width, 100);
        assert!(layout.disk.y >= layout.cpu.bottom());
    }

    #[test]
    fn test_stale_detection() {
        let layout = DashboardLayout::compute(Rect::new(0, 0, 80, 24));
        assert!(!layout.is_stale(Rect::new(0, 0, 80, 24)));
        assert!(layout.is_stale(Rect::new(0, 0, 100, 24)));
    }
}
