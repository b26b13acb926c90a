//! meetboard CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use meetboard_client::cli::{Cli, Command, ConfigAction};
use meetboard_client::commands;
use meetboard_client::config::ClientConfig;
use meetboard_client::error::ClientResult;
use meetboard_core::{TracingConfig, init_tracing};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> ClientResult<()> {
    let mut config = match cli.config {
        Some(ref path) => ClientConfig::load_from(path)?,
        None => ClientConfig::load()?,
    };
    config.apply_cli(&cli);

    let tracing_config = match (cli.log_json, config.debug) {
        (true, true) => TracingConfig::json().with_level(Level::DEBUG),
        (true, false) => TracingConfig::json(),
        (false, true) => TracingConfig::verbose(),
        (false, false) => TracingConfig::default(),
    };
    init_tracing(tracing_config)?;

    match cli.command {
        Some(Command::Config { action }) => match action {
            ConfigAction::Dump => commands::config::dump(&config),
            ConfigAction::Validate => commands::config::validate(&config),
            ConfigAction::Path => commands::config::path(),
        },
        None => {
            config.validate()?;
            if cli.watch {
                commands::watch::run(&config)
            } else {
                commands::show::run(&config)
            }
        }
    }
}
