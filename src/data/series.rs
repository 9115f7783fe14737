//! Chart-ready series shared by the live and history views.

use super::sample::{Metric, MetricSample};

/// Pad a series so the renderer never receives fewer than two points.
///
/// An empty series becomes `[0, 0]` and a single value `v` becomes `[v, v]`.
pub fn ensure_min_points(mut data: Vec<f64>) -> Vec<f64> {
    match data.len() {
        0 => vec![0.0, 0.0],
        1 => {
            data.push(data[0]);
            data
        }
        _ => data,
    }
}

/// Per-metric value arrays, each at least two points long.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub cpu: Vec<f64>,
    pub memory: Vec<f64>,
    pub disk: Vec<f64>,
}

impl ChartSeries {
    pub fn new(cpu: Vec<f64>, memory: Vec<f64>, disk: Vec<f64>) -> Self {
        Self {
            cpu: ensure_min_points(cpu),
            memory: ensure_min_points(memory),
            disk: ensure_min_points(disk),
        }
    }

    /// Build a series covering every sample, in order.
    pub fn from_samples<'a>(samples: impl IntoIterator<Item = &'a MetricSample>) -> Self {
        let mut cpu = Vec::new();
        let mut memory = Vec::new();
        let mut disk = Vec::new();
        for sample in samples {
            cpu.push(sample.cpu());
            memory.push(sample.memory());
            disk.push(sample.disk());
        }
        Self::new(cpu, memory, disk)
    }

    pub fn get(&self, metric: Metric) -> &[f64] {
        match metric {
            Metric::Cpu => &self.cpu,
            Metric::Memory => &self.memory,
            Metric::Disk => &self.disk,
        }
    }
}
