//! Replay of a recorded history file.

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::codec::read_history;
use crate::data::{ChartSeries, MetricSample};
use crate::error::ReplayError;

/// Inclusive timestamp bounds; a missing bound is open on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl TimeRange {
    pub fn new(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Self {
        Self { from, to }
    }

    /// A range with no bounds.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.from.map_or(true, |from| ts >= from) && self.to.map_or(true, |to| ts <= to)
    }

    /// Label for chart titles, e.g. "2025-01-01T00:00:00Z - ...".
    pub fn label(&self) -> String {
        let fmt = |bound: Option<DateTime<Utc>>| {
            bound.map(super::codec::format_timestamp).unwrap_or_else(|| "...".to_string())
        };
        format!("{} - {}", fmt(self.from), fmt(self.to))
    }
}

/// Samples loaded from a history file and filtered to a range.
#[derive(Debug, Clone)]
pub struct Replay {
    samples: Vec<MetricSample>,
    range: TimeRange,
}

impl Replay {
    /// Filtered samples, in file order.
    pub fn samples(&self) -> &[MetricSample] {
        &self.samples
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    /// Chart data covering every replayed sample.
    pub fn series(&self) -> ChartSeries {
        ChartSeries::from_samples(&self.samples)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Load `path` and keep the samples inside `range`.
///
/// File order is kept as-is. An empty result, including a range whose start
/// is after its end, is reported as [`ReplayError::NoDataInRange`].
pub fn replay(path: &Path, range: TimeRange) -> Result<Replay, ReplayError> {
    let history = read_history(path)?;
    if history.skipped > 0 {
        warn!(
            path = %path.display(),
            skipped = history.skipped,
            "skipped malformed rows in history file"
        );
    }

    let total = history.samples.len();
    let samples: Vec<MetricSample> =
        history.samples.into_iter().filter(|s| range.contains(s.timestamp())).collect();

    if samples.is_empty() {
        return Err(ReplayError::NoDataInRange);
    }

    info!(
        path = %path.display(),
        total,
        in_range = samples.len(),
        "loaded history for replay"
    );
    Ok(Replay { samples, range })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::write_history;
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(secs)
    }

    fn write_fixture(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("history.csv");
        let samples: Vec<_> = (0..10)
            .map(|i| MetricSample::new(at(i * 10), i as f64, 50.0, 75.5))
            .collect();
        write_history(&path, &samples).unwrap();
        path
    }

    #[test]
    fn test_replay_unbounded_returns_everything() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir);

        let replay = replay(&path, TimeRange::unbounded()).unwrap();
        assert_eq!(replay.len(), 10);
        assert_eq!(replay.samples()[0].timestamp(), at(0));
        assert_eq!(replay.samples()[9].timestamp(), at(90));
    }

    #[test]
    fn test_replay_bounds_are_inclusive() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir);

        let replay = replay(&path, TimeRange::new(Some(at(20)), Some(at(50)))).unwrap();
        let cpu: Vec<f64> = replay.samples().iter().map(|s| s.cpu()).collect();
        assert_eq!(cpu, vec![2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_replay_open_ended_ranges() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir);

        assert_eq!(replay(&path, TimeRange::new(Some(at(80)), None)).unwrap().len(), 2);
        assert_eq!(replay(&path, TimeRange::new(None, Some(at(5)))).unwrap().len(), 1);
    }

    #[test]
    fn test_replay_inverted_range_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir);

        let err = replay(&path, TimeRange::new(Some(at(50)), Some(at(20)))).unwrap_err();
        assert!(matches!(err, ReplayError::NoDataInRange));
    }

    #[test]
    fn test_replay_range_without_samples() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir);

        let err = replay(&path, TimeRange::new(Some(at(1000)), None)).unwrap_err();
        assert!(matches!(err, ReplayError::NoDataInRange));
    }

    #[test]
    fn test_replay_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir);
        let range = TimeRange::new(Some(at(10)), Some(at(70)));

        let first = replay(&path, range).unwrap();
        let second = replay(&path, range).unwrap();
        assert_eq!(first.samples(), second.samples());
        assert_eq!(first.series(), second.series());
    }

    #[test]
    fn test_replay_keeps_file_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("unordered.csv");
        let samples = vec![
            MetricSample::new(at(30), 3.0, 0.0, 0.0),
            MetricSample::new(at(10), 1.0, 0.0, 0.0),
            MetricSample::new(at(20), 2.0, 0.0, 0.0),
        ];
        write_history(&path, &samples).unwrap();

        let replay = replay(&path, TimeRange::unbounded()).unwrap();
        assert_eq!(replay.series().cpu, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_replay_missing_file() {
        let err = replay(Path::new("/nonexistent/history.csv"), TimeRange::unbounded())
            .unwrap_err();
        assert!(matches!(err, ReplayError::Persistence(_)));
    }

    #[test]
    fn test_range_label() {
        let range = TimeRange::new(Some(at(0)), None);
        assert_eq!(range.label(), "2025-01-01T00:00:00Z - ...");
    }
}
