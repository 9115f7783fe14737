//! The live dashboard control loop.
//!
//! One task multiplexes the shutdown future, terminal input and the refresh
//! timer. Shutdown is polled first so it wins over anything else ready in the
//! same iteration. Every handled event is followed by a redraw.

use std::future::Future;
use std::io;

use anyhow::Result;
use crossterm::event::Event;
use futures_util::{Stream, StreamExt};
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::app::{App, Transition};
use crate::events;
use crate::source::Collector;
use crate::ui::{self, Theme};

/// Drive `app` until quit, end of input or `shutdown` resolves.
///
/// The final export always runs, even when the loop stops on a terminal or
/// input error; that error is then logged and returned.
pub async fn run<B, S, F>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    collector: &Collector,
    theme: &Theme,
    input: S,
    shutdown: F,
) -> Result<()>
where
    B: Backend,
    S: Stream<Item = io::Result<Event>> + Unpin,
    F: Future<Output = ()>,
{
    let outcome = drive(terminal, app, collector, theme, input, shutdown).await;
    if let Err(e) = &outcome {
        app.warn(format!("Dashboard stopped: {:#}", e));
    }
    app.shutdown();

    if outcome.is_ok() {
        terminal.draw(|frame| ui::render_live(frame, app, theme))?;
    }
    outcome
}

async fn drive<B, S, F>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    collector: &Collector,
    theme: &Theme,
    mut input: S,
    shutdown: F,
) -> Result<()>
where
    B: Backend,
    S: Stream<Item = io::Result<Event>> + Unpin,
    F: Future<Output = ()>,
{
    let size = terminal.size()?;
    app.resize(size.width, size.height);

    let mut ticker = events::ticker(app.refresh_interval());
    tokio::pin!(shutdown);

    loop {
        terminal.draw(|frame| ui::render_live(frame, app, theme))?;

        let transition = tokio::select! {
            biased;
            _ = &mut shutdown => app.cancel(),
            event = input.next() => match event {
                Some(Ok(Event::Key(key))) => match events::key_command(key) {
                    Some(command) => app.apply(command),
                    None => Transition::Stay,
                },
                Some(Ok(Event::Resize(width, height))) => {
                    app.resize(width, height);
                    Transition::Stay
                }
                Some(Ok(_)) => Transition::Stay,
                Some(Err(e)) => return Err(e.into()),
                None => app.cancel(),
            },
            _ = ticker.tick() => {
                app.tick(collector).await;
                Transition::Stay
            }
        };

        match transition {
            Transition::Stay => {}
            Transition::ResetTimer(period) => ticker = events::ticker(period),
            Transition::Terminate => return Ok(()),
        }
    }
}
