use std::io;

use thiserror::Error;

/// Library-wide error type for perfopt operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Flag combination that cannot produce valid run options.
    #[error("{0}")]
    Configuration(String),

    /// Resolved options could not be rendered.
    #[error("Failed to render options as {format}: {details}")]
    Serialization { format: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_) => io::ErrorKind::InvalidInput,
            AppError::Serialization { .. } => io::ErrorKind::InvalidData,
        }
    }
}
