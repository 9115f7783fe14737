//! Command-line interface.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::data::duration::parse_positive_duration;

#[derive(Parser, Debug)]
#[command(name = "sysdash", version)]
#[command(about = "Monitor CPU, memory and disk usage as live or recorded terminal charts")]
pub struct Cli {
    /// Append logs to this file (the dashboard owns the terminal, so logs
    /// are otherwise discarded in dashboard mode)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive dashboard (live metrics or a recorded CSV file)
    #[command(long_about = DASHBOARD_HELP)]
    Dashboard(DashboardArgs),

    /// Print live sparkline graphs to stdout until interrupted
    Monitor(MonitorArgs),
}

const DASHBOARD_HELP: &str = "\
Launch the interactive dashboard showing live system metrics, or historical
data from a CSV file.

Modes:
  live    - Displays live system metrics in real time.
  history - Reads data from a CSV file and displays historical metrics.

Interactive controls:
  p          Toggle pause/resume live updates.
  z          Zoom in (halve the refresh interval).
  x          Zoom out (double the refresh interval).
  e          Export the session history to the CSV file.
  q, Ctrl+C  Quit the dashboard.";

#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Dashboard mode: live or history
    #[arg(short, long, default_value = "live")]
    pub mode: String,

    /// CSV file for exporting (live mode) or reading (history mode)
    #[arg(short, long)]
    pub csv: Option<PathBuf>,

    /// Start of the replayed range (RFC 3339)
    #[arg(long)]
    pub from: Option<String>,

    /// End of the replayed range (RFC 3339)
    #[arg(long)]
    pub to: Option<String>,

    /// Refresh interval, e.g. "2s", "500ms" or "1m30s" (overrides the config file)
    #[arg(short, long, value_parser = parse_positive_duration)]
    pub interval: Option<Duration>,

    /// Configuration file (YAML, JSON, TOML, ...)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path whose filesystem is measured for disk usage
    #[arg(long, default_value = "/")]
    pub disk_path: PathBuf,
}

#[derive(Args, Debug)]
pub struct MonitorArgs {
    /// Refresh interval, e.g. "2s", "500ms" or "1m30s" (overrides the config file)
    #[arg(short, long, value_parser = parse_positive_duration)]
    pub interval: Option<Duration>,

    /// Configuration file (YAML, JSON, TOML, ...)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path whose filesystem is measured for disk usage
    #[arg(long, default_value = "/")]
    pub disk_path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_dashboard_defaults() {
        let cli = Cli::try_parse_from(["sysdash", "dashboard"]).unwrap();
        let Some(Commands::Dashboard(args)) = cli.command else {
            panic!("expected dashboard command");
        };
        assert_eq!(args.mode, "live");
        assert!(args.csv.is_none());
        assert!(args.interval.is_none());
        assert_eq!(args.disk_path, PathBuf::from("/"));
    }

    #[test]
    fn test_dashboard_flags() {
        let cli = Cli::try_parse_from([
            "sysdash",
            "--log-file",
            "sysdash.log",
            "dashboard",
            "-m",
            "history",
            "-c",
            "metrics.csv",
            "--from",
            "2025-01-01T00:00:00Z",
            "-i",
            "500ms",
        ])
        .unwrap();
        assert_eq!(cli.log_file, Some(PathBuf::from("sysdash.log")));
        let Some(Commands::Dashboard(args)) = cli.command else {
            panic!("expected dashboard command");
        };
        assert_eq!(args.mode, "history");
        assert_eq!(args.csv, Some(PathBuf::from("metrics.csv")));
        assert_eq!(args.from.as_deref(), Some("2025-01-01T00:00:00Z"));
        assert_eq!(args.interval, Some(Duration::from_millis(500)));
    }

    #[test]
    fn test_unknown_mode_is_accepted_by_parser() {
        // Mode validation happens later so an invalid mode is not a usage error
        let cli = Cli::try_parse_from(["sysdash", "dashboard", "--mode", "replay"]).unwrap();
        let Some(Commands::Dashboard(args)) = cli.command else {
            panic!("expected dashboard command");
        };
        assert_eq!(args.mode, "replay");
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert!(Cli::try_parse_from(["sysdash", "monitor", "-i", "0s"]).is_err());
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["sysdash"]).unwrap();
        assert!(cli.command.is_none());
    }
}
