//! Historical data tracking for charts and export.

use super::sample::{Metric, MetricSample};
use super::series::{ensure_min_points, ChartSeries};
use super::window::{SlidingWindow, DEFAULT_WINDOW_CAPACITY};

/// Tracks one session's samples.
///
/// Each recorded sample feeds a bounded window per metric (what the charts
/// show) and an unbounded log (what gets exported). The log only grows; the
/// windows only lose values through eviction.
#[derive(Debug, Clone)]
pub struct History {
    cpu: SlidingWindow<f64>,
    memory: SlidingWindow<f64>,
    disk: SlidingWindow<f64>,
    log: Vec<MetricSample>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create an empty history with the default window capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_WINDOW_CAPACITY)
    }

    /// Create an empty history whose windows hold `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cpu: SlidingWindow::new(capacity),
            memory: SlidingWindow::new(capacity),
            disk: SlidingWindow::new(capacity),
            log: Vec::new(),
        }
    }

    /// Record a new sample.
    pub fn record(&mut self, sample: MetricSample) {
        self.cpu.push(sample.cpu());
        self.memory.push(sample.memory());
        self.disk.push(sample.disk());
        self.log.push(sample);
    }

    fn window(&self, metric: Metric) -> &SlidingWindow<f64> {
        match metric {
            Metric::Cpu => &self.cpu,
            Metric::Memory => &self.memory,
            Metric::Disk => &self.disk,
        }
    }

    /// Chart data for one metric, oldest first.
    ///
    /// Always at least two points long.
    pub fn windowed(&self, metric: Metric) -> Vec<f64> {
        ensure_min_points(self.window(metric).to_vec())
    }

    /// Chart data for all three metrics.
    pub fn series(&self) -> ChartSeries {
        ChartSeries::new(
            self.cpu.to_vec(),
            self.memory.to_vec(),
            self.disk.to_vec(),
        )
    }

    /// Every sample recorded this session, in arrival order.
    pub fn full_log(&self) -> &[MetricSample] {
        &self.log
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// The most recently recorded sample.
    pub fn latest(&self) -> Option<&MetricSample> {
        self.log.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn sample(i: i64) -> MetricSample {
        let ts = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(i);
        MetricSample::new(ts, i as f64, i as f64 * 2.0, 100.0 - i as f64)
    }

    #[test]
    fn test_windowed_holds_most_recent() {
        let mut history = History::with_capacity(30);
        for i in 0..45 {
            history.record(sample(i));
        }

        let cpu = history.windowed(Metric::Cpu);
        assert_eq!(cpu.len(), 30);
        let expected: Vec<f64> = (15..45).map(|i| i as f64).collect();
        assert_eq!(cpu, expected);

        // The log keeps everything
        assert_eq!(history.full_log().len(), 45);
        assert_eq!(history.full_log()[0], sample(0));
    }

    #[test]
    fn test_windowed_below_capacity() {
        let mut history = History::new();
        for i in 0..5 {
            history.record(sample(i));
        }
        assert_eq!(
            history.windowed(Metric::Memory),
            vec![0.0, 2.0, 4.0, 6.0, 8.0]
        );
    }

    #[test]
    fn test_windowed_pads_empty_history() {
        let history = History::new();
        for metric in Metric::ALL {
            assert_eq!(history.windowed(metric), vec![0.0, 0.0]);
        }
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }

    #[test]
    fn test_windowed_pads_single_sample() {
        let mut history = History::new();
        history.record(sample(7));
        assert_eq!(history.windowed(Metric::Cpu), vec![7.0, 7.0]);
        assert_eq!(history.windowed(Metric::Disk), vec![93.0, 93.0]);
    }

    #[test]
    fn test_series_matches_windowed() {
        let mut history = History::with_capacity(4);
        for i in 0..10 {
            history.record(sample(i));
        }
        let series = history.series();
        for metric in Metric::ALL {
            assert_eq!(series.get(metric), history.windowed(metric).as_slice());
        }
        assert_eq!(history.latest(), Some(&sample(9)));
    }
}
