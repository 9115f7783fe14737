//! On-disk history: the CSV codec and the replayer built on it.
//!
//! Live mode writes the session log with [`write_history`]; history mode
//! reads it back with [`replay`], which filters by [`TimeRange`] and yields
//! the same chart-ready series as the live path.

mod codec;
mod replay;

pub use codec::{format_timestamp, read_history, write_history, CsvHistory, HEADER};
pub use replay::{replay, Replay, TimeRange};
