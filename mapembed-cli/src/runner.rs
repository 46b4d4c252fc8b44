//! Shared command context: configuration and logging.

use std::path::PathBuf;

use std::path::Path;

use mapembed::config::{config_file_path, ConfigError, ConfigFile};
use mapembed::logging::{init_logging, WorkerGuard};
use tracing::{info, warn};

use crate::error::CliError;

/// Options accepted by every subcommand.
#[derive(Debug, Default)]
pub struct GlobalArgs {
    pub config: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// How strictly the configuration file is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigMode {
    /// Any invalid value fails the command.
    Strict,
    /// Invalid values fall back to defaults with a warning, so the file can
    /// still be inspected and repaired.
    Lenient,
}

/// Load the configuration at `path` according to `mode`.
///
/// Returns the configuration and the problems that were skipped.
pub fn load_config(
    path: &Path,
    mode: ConfigMode,
) -> Result<(ConfigFile, Vec<ConfigError>), CliError> {
    match mode {
        ConfigMode::Strict => Ok((ConfigFile::load_from(path)?, Vec::new())),
        ConfigMode::Lenient => match ConfigFile::load_lenient_from(path) {
            Ok(loaded) => Ok(loaded),
            Err(e) => Ok((ConfigFile::default(), vec![e])),
        },
    }
}

/// Loaded configuration plus the logging guard.
///
/// The guard flushes file logging on drop, so the runner must outlive the
/// command it serves.
pub struct CliRunner {
    config_path: PathBuf,
    config: ConfigFile,
    _log_guard: Option<WorkerGuard>,
}

impl CliRunner {
    /// Loads the configuration and installs the log subscriber.
    ///
    /// `--log-level` and `--log-file` override the `[logging]` section.
    pub fn new(args: GlobalArgs, mode: ConfigMode) -> Result<Self, CliError> {
        let config_path = args.config.unwrap_or_else(config_file_path);
        let (config, problems) = load_config(&config_path, mode)?;

        let mut logging = config.logging.to_logging_config();
        if let Some(level) = args.log_level {
            logging.level = level;
        }
        if let Some(file) = args.log_file {
            logging.file = Some(file);
        }
        let guard = init_logging(&logging)?;

        for problem in &problems {
            warn!(config = %config_path.display(), "{}; using default", problem);
        }

        Ok(Self {
            config_path,
            config,
            _log_guard: guard,
        })
    }

    /// A runner over an already loaded configuration, without logging.
    #[cfg(test)]
    pub fn with_config(config_path: PathBuf, config: ConfigFile) -> Self {
        Self {
            config_path,
            config,
            _log_guard: None,
        }
    }

    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Path the configuration was loaded from and is saved to.
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn log_startup(&self, command: &str) {
        info!(
            version = env!("CARGO_PKG_VERSION"),
            command,
            config = %self.config_path.display(),
            "mapembed starting"
        );
    }
}
