use std::io;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use sysdash::cli::{Cli, Commands, DashboardArgs, MonitorArgs};
use sysdash::logging::{self, LogTarget};
use sysdash::store::{self, Replay};
use sysdash::ui::{self, Theme};
use sysdash::{events, live, monitor};
use sysdash::{App, Collector, DashboardConfig, Mode, Settings};

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Dashboard(args) => {
            // The dashboard owns the terminal; only log when asked to
            logging::init(cli.log_file.map_or(LogTarget::Off, LogTarget::File))?;
            run_dashboard(args)
        }
        Commands::Monitor(args) => {
            logging::init(cli.log_file.map_or(LogTarget::Stderr, LogTarget::File))?;
            run_monitor(args)
        }
    }
}

fn run_dashboard(args: DashboardArgs) -> Result<()> {
    // Config problems are surfaced in the dashboard log once it is up
    let mut startup = Vec::new();
    let settings = match Settings::load(args.config.as_deref()) {
        Ok(settings) => {
            if let Some(path) = &args.config {
                startup.push(Ok(format!("Loaded configuration from {}", path.display())));
            }
            settings
        }
        Err(e) => {
            startup.push(Err(format!("Failed to load configuration: {}", e)));
            Settings::default()
        }
    }
    .with_interval(args.interval);

    let config = match DashboardConfig::new(
        settings,
        &args.mode,
        args.csv,
        args.from.as_deref(),
        args.to.as_deref(),
    ) {
        Ok(config) => config,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    match config.mode {
        Mode::Live => run_live(config, &args.disk_path, startup),
        Mode::History => run_history(config),
    }
}

fn run_monitor(args: MonitorArgs) -> Result<()> {
    let settings = Settings::load_or_default(args.config.as_deref()).with_interval(args.interval);
    let collector = Collector::system(&args.disk_path);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(monitor::run(&collector, settings.refresh_interval, &mut io::stdout()))
}

/// Run the live dashboard until quit or a shutdown signal
fn run_live(
    config: DashboardConfig,
    disk_path: &Path,
    startup: Vec<Result<String, String>>,
) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    let collector = Collector::system(disk_path);
    let theme = Theme::auto_detect();

    let mut app = App::new(config.settings, config.csv_path);
    for message in startup {
        match message {
            Ok(message) => app.info(message),
            Err(message) => app.warn(message),
        }
    }
    info!(
        "Starting live dashboard, refreshing every {:?}",
        app.refresh_interval()
    );

    let mut terminal = setup_terminal()?;
    let result = rt.block_on(live::run(
        &mut terminal,
        &mut app,
        &collector,
        &theme,
        EventStream::new(),
        events::shutdown_signal(),
    ));
    restore_terminal(&mut terminal)?;

    // The final export outcome (or the error that stopped the loop) is
    // otherwise lost with the alternate screen
    if app.export_path().is_some() {
        if let Some(last) = app.log.last() {
            println!("{}", last);
        }
    }

    result
}

/// Show a recorded CSV file until the user quits
fn run_history(config: DashboardConfig) -> Result<()> {
    let Some(path) = config.csv_path.as_deref() else {
        println!("CSV file path must be provided in history mode.");
        return Ok(());
    };

    let replay = match store::replay(path, config.range) {
        Ok(replay) => replay,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    let theme = Theme::auto_detect();
    let mut terminal = setup_terminal()?;
    let result = view_history(&mut terminal, &replay, &theme);
    restore_terminal(&mut terminal)?;

    result
}

fn view_history(terminal: &mut Tui, replay: &Replay, theme: &Theme) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render_history(frame, replay, theme))?;

        // Resize events just fall through to the next draw
        if let Some(Event::Key(key)) = events::poll_event(Duration::from_millis(250))? {
            if events::is_history_quit(key) {
                return Ok(());
            }
        }
    }
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
