//! The metric sample value type.

use std::fmt;

use chrono::{DateTime, Utc};

/// One of the three metric streams the dashboard tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Cpu,
    Memory,
    Disk,
}

impl Metric {
    /// All metrics, in collection and display order.
    pub const ALL: [Metric; 3] = [Metric::Cpu, Metric::Memory, Metric::Disk];

    /// Chart title for this metric.
    pub fn title(&self) -> &'static str {
        match self {
            Metric::Cpu => "CPU Usage (%)",
            Metric::Memory => "Memory Usage (%)",
            Metric::Disk => "Disk Usage (%)",
        }
    }

    /// Short label used in the plain monitor output.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Cpu => "CPU",
            Metric::Memory => "MEM",
            Metric::Disk => "DISK",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Metric::Cpu => "CPU",
            Metric::Memory => "Memory",
            Metric::Disk => "Disk",
        })
    }
}

/// A timestamped reading of all three metrics.
///
/// Percentages are conventionally 0-100 but are not clamped; sources may
/// report slightly above 100 transiently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSample {
    timestamp: DateTime<Utc>,
    cpu: f64,
    memory: f64,
    disk: f64,
}

impl MetricSample {
    pub fn new(timestamp: DateTime<Utc>, cpu: f64, memory: f64, disk: f64) -> Self {
        Self {
            timestamp,
            cpu,
            memory,
            disk,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn cpu(&self) -> f64 {
        self.cpu
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn disk(&self) -> f64 {
        self.disk
    }

    /// Value of a single metric.
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Cpu => self.cpu,
            Metric::Memory => self.memory,
            Metric::Disk => self.disk,
        }
    }
}
