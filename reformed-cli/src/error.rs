use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid schema: {0}")]
    Config(#[from] reformed_lib::error::ConfigError),
    #[error("validation aborted at cycle {cycle}: {source}")]
    Validation {
        cycle: usize,
        #[source]
        source: reformed_lib::error::ValidationError,
    },
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
