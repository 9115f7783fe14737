use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use crate::app::Command;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Map a key press to a dashboard command.
///
/// Key releases and repeats are ignored.
pub fn key_command(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Char('p') => Some(Command::TogglePause),
        KeyCode::Char('z') => Some(Command::ZoomIn),
        KeyCode::Char('x') => Some(Command::ZoomOut),
        KeyCode::Char('e') => Some(Command::Export),
        _ => None,
    }
}

/// Whether a key closes the read-only history view.
pub fn is_history_quit(key: KeyEvent) -> bool {
    matches!(key_command(key), Some(Command::Quit))
        || (key.kind == KeyEventKind::Press && key.code == KeyCode::Esc)
}

/// A ticker whose first tick fires one full `period` from now.
///
/// Ticks that fall behind (a slow collection) are delayed rather than burst.
pub fn ticker(period: Duration) -> Interval {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Resolves when the process is asked to stop (Ctrl+C, or SIGTERM on Unix).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            // No handler could be installed; never resolve
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(key_command(press(KeyCode::Char('p'))), Some(Command::TogglePause));
        assert_eq!(key_command(press(KeyCode::Char('z'))), Some(Command::ZoomIn));
        assert_eq!(key_command(press(KeyCode::Char('x'))), Some(Command::ZoomOut));
        assert_eq!(key_command(press(KeyCode::Char('e'))), Some(Command::Export));
        assert_eq!(key_command(press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(key_command(press(KeyCode::Char('a'))), None);
        assert_eq!(key_command(press(KeyCode::Enter)), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_command(key), Some(Command::Quit));
        // Plain 'c' does nothing
        assert_eq!(key_command(press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let key = KeyEvent {
            code: KeyCode::Char('p'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(key_command(key), None);
    }

    #[test]
    fn test_history_quit_keys() {
        assert!(is_history_quit(press(KeyCode::Char('q'))));
        assert!(is_history_quit(press(KeyCode::Esc)));
        assert!(!is_history_quit(press(KeyCode::Char('p'))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_waits_full_period() {
        let start = Instant::now();
        let mut ticker = ticker(Duration::from_secs(2));
        ticker.tick().await;
        assert!(start.elapsed() >= Duration::from_secs(2));
    }
}
