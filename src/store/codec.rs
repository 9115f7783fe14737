//! CSV persistence for session history.
//!
//! The format is fixed:
//!
//! ```text
//! timestamp,cpu_usage,mem_usage,disk_usage
//! 2025-01-01T00:00:00Z,12.34,56.78,9.01
//! ```
//!
//! Timestamps are RFC 3339 in UTC with second precision, percentages have two
//! decimal places.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use csv::StringRecord;
use tracing::debug;

use crate::data::MetricSample;
use crate::error::PersistenceError;

/// Header row written at the top of every history file.
pub const HEADER: [&str; 4] = ["timestamp", "cpu_usage", "mem_usage", "disk_usage"];

/// Samples read back from a history file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvHistory {
    /// Successfully parsed rows, in file order.
    pub samples: Vec<MetricSample>,
    /// Rows dropped because they could not be parsed.
    pub skipped: usize,
}

/// Format a timestamp the way history files store it.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Write samples to `path`, replacing any existing file.
///
/// Rows go to a temporary file in the destination directory which is then
/// renamed over `path`, so readers see either the old file or the complete
/// new one.
pub fn write_history(path: &Path, samples: &[MetricSample]) -> Result<(), PersistenceError> {
    let io_err = |source: std::io::Error| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    };
    let csv_err = |source: csv::Error| PersistenceError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "history".to_string());

    let mut tmp = tempfile::Builder::new()
        .prefix(&format!(".{}.", file_name))
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(io_err)?;

    {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(tmp.as_file_mut());

        writer.write_record(HEADER).map_err(csv_err)?;
        for sample in samples {
            writer
                .write_record([
                    format_timestamp(sample.timestamp()),
                    format!("{:.2}", sample.cpu()),
                    format!("{:.2}", sample.memory()),
                    format!("{:.2}", sample.disk()),
                ])
                .map_err(csv_err)?;
        }
        writer.flush().map_err(io_err)?;
    }

    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|source| PersistenceError::Persist {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), rows = samples.len(), "wrote history file");
    Ok(())
}

/// Read samples from a history file.
///
/// The first row is treated as the header and discarded. Rows with the wrong
/// number of columns, a bad timestamp or a bad percentage are skipped and
/// counted rather than failing the whole read.
pub fn read_history(path: &Path) -> Result<CsvHistory, PersistenceError> {
    let csv_err = |source: csv::Error| PersistenceError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_err)?;

    let mut history = CsvHistory::default();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            // Only I/O failures abort; anything else is a bad row
            Err(e) if e.is_io_error() => return Err(csv_err(e)),
            Err(_) => {
                history.skipped += 1;
                continue;
            }
        };

        match parse_row(&record) {
            Some(sample) => history.samples.push(sample),
            None => history.skipped += 1,
        }
    }

    debug!(
        path = %path.display(),
        rows = history.samples.len(),
        skipped = history.skipped,
        "read history file"
    );
    Ok(history)
}

fn parse_row(record: &StringRecord) -> Option<MetricSample> {
    if record.len() != HEADER.len() {
        return None;
    }
    let timestamp = DateTime::parse_from_rfc3339(record.get(0)?).ok()?.with_timezone(&Utc);
    let cpu = record.get(1)?.parse().ok()?;
    let memory = record.get(2)?.parse().ok()?;
    let disk = record.get(3)?.parse().ok()?;
    Some(MetricSample::new(timestamp, cpu, memory, disk))
}
