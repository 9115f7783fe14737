//! Concurrent fan-out over the three metric sources.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use super::{CpuSource, DiskSource, MemorySource, MetricSource};
use crate::data::{Metric, MetricSample};
use crate::error::CollectionError;

/// Fetches one reading from each source per tick.
///
/// The three sources run concurrently on blocking worker threads, so one slow
/// source does not add to the others' latency. A tick only produces a sample
/// when all three succeed.
#[derive(Debug, Clone)]
pub struct Collector {
    cpu: Arc<dyn MetricSource>,
    memory: Arc<dyn MetricSource>,
    disk: Arc<dyn MetricSource>,
}

impl Collector {
    /// Create a collector over explicit sources.
    pub fn new(
        cpu: Arc<dyn MetricSource>,
        memory: Arc<dyn MetricSource>,
        disk: Arc<dyn MetricSource>,
    ) -> Self {
        Self { cpu, memory, disk }
    }

    /// Create a collector reading from the operating system, measuring disk
    /// usage for the filesystem that holds `disk_path`.
    pub fn system<P: AsRef<Path>>(disk_path: P) -> Self {
        Self::new(
            Arc::new(CpuSource::new()),
            Arc::new(MemorySource::new()),
            Arc::new(DiskSource::new(disk_path)),
        )
    }

    /// Take one sample.
    ///
    /// All three reads are awaited before returning. If any fail, the error
    /// for the first failing metric (in cpu, memory, disk order) is returned
    /// and no sample is produced.
    pub async fn collect(&self) -> Result<MetricSample, CollectionError> {
        let (cpu, memory, disk) = tokio::join!(
            fetch(Metric::Cpu, &self.cpu),
            fetch(Metric::Memory, &self.memory),
            fetch(Metric::Disk, &self.disk),
        );

        let sample = MetricSample::new(Utc::now(), cpu?, memory?, disk?);
        debug!(
            cpu = sample.cpu(),
            memory = sample.memory(),
            disk = sample.disk(),
            "collected sample"
        );
        Ok(sample)
    }
}

async fn fetch(metric: Metric, source: &Arc<dyn MetricSource>) -> Result<f64, CollectionError> {
    let source = Arc::clone(source);
    tokio::task::spawn_blocking(move || source.fetch())
        .await
        .map_err(|e| CollectionError::new(metric, format!("sampler task failed: {}", e)))?
        .map_err(|e| CollectionError::new(metric, format!("{:#}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::testing::ScriptedSource;
    use std::time::{Duration, Instant};

    fn collector(cpu: ScriptedSource, memory: ScriptedSource, disk: ScriptedSource) -> Collector {
        Collector::new(Arc::new(cpu), Arc::new(memory), Arc::new(disk))
    }

    #[tokio::test]
    async fn test_collect_all_succeed() {
        let c = collector(
            ScriptedSource::values("cpu", &[12.5]),
            ScriptedSource::values("memory", &[40.0]),
            ScriptedSource::values("disk", &[70.25]),
        );

        let sample = c.collect().await.unwrap();
        assert_eq!(sample.cpu(), 12.5);
        assert_eq!(sample.memory(), 40.0);
        assert_eq!(sample.disk(), 70.25);
    }

    #[tokio::test]
    async fn test_collect_one_failure_names_source() {
        let c = collector(
            ScriptedSource::values("cpu", &[12.5]),
            ScriptedSource::failing("memory", "meminfo unavailable"),
            ScriptedSource::values("disk", &[70.25]),
        );

        let err = c.collect().await.unwrap_err();
        assert_eq!(err.metric, Metric::Memory);
        assert!(err.cause.contains("meminfo unavailable"));
        assert_eq!(
            err.to_string(),
            "Error retrieving Memory usage: meminfo unavailable"
        );
    }

    #[tokio::test]
    async fn test_collect_reports_first_failure() {
        let c = collector(
            ScriptedSource::values("cpu", &[1.0]),
            ScriptedSource::failing("memory", "a"),
            ScriptedSource::failing("disk", "b"),
        );

        let err = c.collect().await.unwrap_err();
        assert_eq!(err.metric, Metric::Memory);
    }

    #[tokio::test]
    async fn test_collect_runs_sources_concurrently() {
        let delay = Duration::from_millis(150);
        let c = collector(
            ScriptedSource::values("cpu", &[1.0]).with_delay(delay),
            ScriptedSource::values("memory", &[2.0]).with_delay(delay),
            ScriptedSource::values("disk", &[3.0]).with_delay(delay),
        );

        let start = Instant::now();
        c.collect().await.unwrap();
        // Serial execution would take at least 3x the delay
        assert!(start.elapsed() < delay * 3);
    }
}
