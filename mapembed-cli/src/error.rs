//! CLI error type.

use std::path::PathBuf;

use mapembed::config::ConfigError;
use mapembed::logging::LoggingError;
#[cfg(feature = "serve")]
use mapembed::server::ServerError;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid configuration or arguments.
    #[error("{0}")]
    Config(String),

    #[error(transparent)]
    ConfigFile(#[from] ConfigError),

    #[error(transparent)]
    Logging(#[from] LoggingError),

    /// Writing rendered output failed.
    #[error("Failed to write {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Serializing the provider listing failed.
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The async runtime could not be created.
    #[error("Failed to start runtime: {0}")]
    Runtime(std::io::Error),

    #[cfg(feature = "serve")]
    #[error(transparent)]
    Server(#[from] ServerError),
}
