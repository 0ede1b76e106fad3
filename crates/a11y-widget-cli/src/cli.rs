use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "a11y-widget")]
#[command(about = "Inspect and change stored accessibility widget settings")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to the settings state file
    #[arg(long, global = true, value_name = "PATH")]
    pub state_path: Option<PathBuf>,

    /// Locale for labels (en, tr)
    #[arg(long, global = true, value_name = "CODE")]
    pub locale: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the stored settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change one or more settings
    Set {
        /// Assignments such as `textSize=large` or `highContrast=true`
        #[arg(value_name = "KEY=VALUE")]
        assignments: Vec<String>,
        /// Raw JSON patch, e.g. '{"magnifier":"125"}'
        #[arg(long, value_name = "JSON", conflicts_with = "assignments")]
        patch: Option<String>,
    },
    /// Restore the default settings
    Reset,
    /// Print the page root styling produced by the stored settings
    Css {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the panel controls and their options
    Options {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Update configuration values
    Set {
        /// Default locale for labels
        #[arg(long, value_name = "CODE")]
        locale: Option<String>,
        /// Default settings state file
        #[arg(long, value_name = "PATH")]
        state_path: Option<PathBuf>,
        /// Forget the configured state file
        #[arg(long, conflicts_with = "state_path")]
        clear_state_path: bool,
    },
}
