//! Plain-text monitor: redraws sparklines on stdout until interrupted.
//!
//! This is the non-interactive counterpart of the dashboard. It shares the
//! collector and history but has no pause, zoom or export.

use std::fmt::Write as _;
use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};

use crate::data::{History, Metric};
use crate::events::shutdown_signal;
use crate::source::Collector;
use crate::ui::sparkline::render_sparkline;

/// Format one screen of the monitor.
pub fn render_frame(history: &History) -> String {
    let mut out = String::new();
    let Some(latest) = history.latest() else {
        out.push_str("Waiting for first sample...\n");
        return out;
    };
    for metric in Metric::ALL {
        let _ = writeln!(
            out,
            "{:<5} {}  {:6.2}%",
            metric.label(),
            render_sparkline(&history.windowed(metric)),
            latest.value(metric)
        );
    }
    out
}

/// Collect every `period` and redraw `out` until a shutdown signal arrives.
///
/// The first sample is taken immediately. A failed collection prints the
/// error and leaves the graphs unchanged.
pub async fn run<W: Write>(collector: &Collector, period: Duration, out: &mut W) -> Result<()> {
    let mut history = History::new();
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    info!("Monitoring every {:?}", period);
    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => break,
            _ = ticker.tick() => {}
        }

        match collector.collect().await {
            Ok(sample) => {
                history.record(sample);
                execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
                write!(out, "{}", render_frame(&history))?;
                out.flush()?;
            }
            Err(e) => {
                warn!("{}", e);
                writeln!(out, "{}", e)?;
            }
        }
    }

    info!("Shutdown signal received. Exiting monitor.");
    Ok(())
}
