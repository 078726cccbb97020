//! Concord CLI
//!
//! Keyword-in-context concordance lines for CSV, JSON and plain-text corpora.

use anyhow::Result;
use clap::Parser;
use concord_core::error::exit_codes;
use concord_core::{Config, ConcordError};

mod app;
mod commands;
mod output;

use app::{Cli, Commands};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(exit_codes::INVALID_INPUT);
        }
        Err(e) => e.exit(),
    };

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        let code = e
            .downcast_ref::<ConcordError>()
            .map(ConcordError::exit_code)
            .unwrap_or(exit_codes::GENERAL_ERROR);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load_from(&config_path)?;

    match cli.command {
        Commands::Kwic(args) => {
            config.apply_env()?;
            commands::kwic::run(args, &config, cli.format)
        }
        Commands::Config(args) => commands::config::run(args, config, &config_path),
    }
}
