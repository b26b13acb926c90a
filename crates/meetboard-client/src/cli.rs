//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// meetboard - today's meetings as a compact terminal table
#[derive(Debug, Parser)]
#[command(name = "meetboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "MEETBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Write logs to stderr as JSON lines
    #[arg(long)]
    pub log_json: bool,

    // --- Source ---
    /// Google Calendar events.list JSON to read ("-" for stdin)
    #[arg(long, short, env = "MEETBOARD_EVENTS")]
    pub events: Option<PathBuf>,

    // --- Display options ---
    /// Maximum number of rows in the table
    #[arg(long)]
    pub rows: Option<usize>,

    /// Maximum summary width, marker included (truncated with "...")
    #[arg(long)]
    pub width: Option<usize>,

    /// Minutes before start during which a meeting is flagged as next
    #[arg(long)]
    pub imminence_minutes: Option<u32>,

    /// Hide events spanning more than this many hours
    #[arg(long)]
    pub max_span_hours: Option<u32>,

    /// Disable colors
    #[arg(long, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,

    // --- Watch mode ---
    /// Keep the table on screen and refresh it periodically
    #[arg(long, short)]
    pub watch: bool,

    /// Seconds between refreshes in watch mode
    #[arg(long, requires = "watch")]
    pub interval: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Dump,
    /// Check the configuration for errors
    Validate,
    /// Print the configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn display_overrides_parse() {
        let cli = Cli::try_parse_from([
            "meetboard",
            "--events",
            "today.json",
            "--rows",
            "3",
            "--width",
            "40",
            "--imminence-minutes",
            "5",
            "--max-span-hours",
            "12",
        ])
        .unwrap();
        assert_eq!(cli.events, Some(PathBuf::from("today.json")));
        assert_eq!(cli.rows, Some(3));
        assert_eq!(cli.width, Some(40));
        assert_eq!(cli.imminence_minutes, Some(5));
        assert_eq!(cli.max_span_hours, Some(12));
        assert!(!cli.watch);
        assert!(cli.command.is_none());
    }

    #[test]
    fn interval_requires_watch() {
        assert!(Cli::try_parse_from(["meetboard", "--interval", "30"]).is_err());
        let cli = Cli::try_parse_from(["meetboard", "--watch", "--interval", "30"]).unwrap();
        assert_eq!(cli.interval, Some(30));
    }

    #[test]
    fn config_subcommands() {
        let cli = Cli::try_parse_from(["meetboard", "config", "validate"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Config {
                action: ConfigAction::Validate
            })
        ));
    }
}
