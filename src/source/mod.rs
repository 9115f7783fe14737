//! Metric sources and the per-tick collector.
//!
//! This module provides a trait-based abstraction over the three readings the
//! dashboard needs (processor, memory and storage utilization) and the
//! [`Collector`] that fans out to all three on every tick.

mod collector;
mod system;

#[cfg(test)]
pub(crate) mod testing;

pub use collector::Collector;
pub use system::{CpuSource, DiskSource, MemorySource};

use std::fmt::Debug;

/// A single metric reading provider.
///
/// Implementations are called from a blocking worker thread, so `fetch` may
/// sleep or perform synchronous OS queries.
///
/// # Example
///
/// ```
/// use sysdash::MetricSource;
///
/// #[derive(Debug)]
/// struct Constant(f64);
///
/// impl MetricSource for Constant {
///     fn name(&self) -> &str {
///         "constant"
///     }
///
///     fn fetch(&self) -> anyhow::Result<f64> {
///         Ok(self.0)
///     }
/// }
///
/// assert_eq!(Constant(12.5).fetch().unwrap(), 12.5);
/// ```
pub trait MetricSource: Send + Sync + Debug {
    /// Returns a short human-readable name for the source.
    fn name(&self) -> &str;

    /// Take one reading, as a percentage.
    ///
    /// Values are conventionally 0-100 but callers must not rely on it.
    fn fetch(&self) -> anyhow::Result<f64>;
}
