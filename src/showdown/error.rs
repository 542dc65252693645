use thiserror::Error;

use crate::core::ParseError;

/// Errors that can occur while running a showdown over many lines.
#[derive(Debug, Error)]
pub enum ShowdownError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("Configuration validation error: {0}")]
    InvalidConfig(String),

    #[error("Failed to read JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for showdown operations
pub type Result<T> = std::result::Result<T, ShowdownError>;
