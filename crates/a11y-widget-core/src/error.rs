//! Error types for a11y-widget-core

use thiserror::Error;

/// Result type alias using a11y-widget-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in a11y-widget-core operations
///
/// Malformed settings input never produces an error; it degrades to defaults
/// or is dropped during normalization.
#[derive(Error, Debug)]
pub enum Error {
    /// The host cannot present anything (no document to style)
    #[error("Accessibility widget requires a presentation-capable host: {0}")]
    Environment(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Settings storage error
    #[error("Storage error: {0}")]
    Storage(String),
}
