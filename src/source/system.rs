//! Operating-system backed metric sources.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, bail, Result};
use sysinfo::{Disks, System, MINIMUM_CPU_UPDATE_INTERVAL};

use super::MetricSource;

/// Global processor utilization.
///
/// Each reading refreshes twice, [`MINIMUM_CPU_UPDATE_INTERVAL`] apart, since
/// a usage percentage needs two measurements to compare.
#[derive(Debug)]
pub struct CpuSource {
    system: Mutex<System>,
}

impl CpuSource {
    pub fn new() -> Self {
        Self {
            system: Mutex::new(System::new()),
        }
    }
}

impl Default for CpuSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricSource for CpuSource {
    fn name(&self) -> &str {
        "cpu"
    }

    fn fetch(&self) -> Result<f64> {
        let mut system = self.system.lock().map_err(|_| anyhow!("cpu sampler lock poisoned"))?;
        system.refresh_cpu();
        std::thread::sleep(MINIMUM_CPU_UPDATE_INTERVAL);
        system.refresh_cpu();
        Ok(system.global_cpu_info().cpu_usage() as f64)
    }
}

/// Share of physical memory in use.
#[derive(Debug)]
pub struct MemorySource {
    system: Mutex<System>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self {
            system: Mutex::new(System::new()),
        }
    }
}

impl Default for MemorySource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    fn fetch(&self) -> Result<f64> {
        let mut system =
            self.system.lock().map_err(|_| anyhow!("memory sampler lock poisoned"))?;
        system.refresh_memory();
        let total = system.total_memory();
        if total == 0 {
            bail!("total memory reported as zero");
        }
        Ok(system.used_memory() as f64 / total as f64 * 100.0)
    }
}

/// Usage of the filesystem holding a given path.
#[derive(Debug)]
pub struct DiskSource {
    path: PathBuf,
}

impl DiskSource {
    /// Relative paths are resolved against the working directory; a path
    /// that cannot be resolved is kept as given.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        Self {
            path: std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MetricSource for DiskSource {
    fn name(&self) -> &str {
        "disk"
    }

    fn fetch(&self) -> Result<f64> {
        let disks = Disks::new_with_refreshed_list();

        // The filesystem with the longest mount point that contains the path
        let disk = disks
            .list()
            .iter()
            .filter(|d| self.path.starts_with(d.mount_point()))
            .max_by_key(|d| d.mount_point().as_os_str().len())
            .ok_or_else(|| anyhow!("no filesystem found for {}", self.path.display()))?;

        let total = disk.total_space();
        if total == 0 {
            bail!("filesystem at {} reports zero capacity", disk.mount_point().display());
        }
        let used = total.saturating_sub(disk.available_space());
        Ok(used as f64 / total as f64 * 100.0)
    }
}
