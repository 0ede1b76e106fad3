use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] a11y_widget_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid assignment `{0}`, expected KEY=VALUE")]
    InvalidAssignment(String),
    #[error("Unknown setting `{0}`")]
    UnknownSetting(String),
    #[error("No settings given. Pass KEY=VALUE assignments or --patch")]
    EmptyPatch,
    #[error("Failed to save settings to {}", .0.display())]
    NotSaved(PathBuf),
}
