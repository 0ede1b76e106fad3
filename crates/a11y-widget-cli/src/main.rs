//! a11y-widget CLI - Inspect and edit stored accessibility widget settings
//!
//! Drives the widget core against a state file so the persisted preferences
//! can be scripted from the terminal.

mod cli;
mod cli_config;
mod commands;
mod error;

#[cfg(test)]
mod tests;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::cli_config::CliConfig;
use crate::commands::common::SessionOptions;
use crate::commands::completions::run_completions;
use crate::commands::config::run_config;
use crate::commands::css::run_css;
use crate::commands::options::run_options;
use crate::commands::reset::run_reset;
use crate::commands::set::run_set;
use crate::commands::show::run_show;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = "a11y_widget=info".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    if let Commands::Config { command } = cli.command {
        return run_config(command);
    }

    let config = CliConfig::load().map_err(CliError::Config)?;
    let session = SessionOptions {
        state_path: config.resolve_state_path(cli.state_path),
        locale: config.resolve_locale(cli.locale.as_deref()),
    };

    match cli.command {
        Commands::Show { json } => run_show(&session, json)?,
        Commands::Set { assignments, patch } => {
            run_set(&session, &assignments, patch.as_deref())?;
        }
        Commands::Reset => run_reset(&session)?,
        Commands::Css { json } => run_css(&session, json)?,
        Commands::Options { json } => run_options(&session, json)?,
        Commands::Completions { shell, output } => {
            run_completions(shell, output.as_deref())?;
        }
        Commands::Config { .. } => {}
    }

    Ok(())
}
