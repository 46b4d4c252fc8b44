//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading, saving or editing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read or parsed.
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read { path: PathBuf, source: ini::Error },

    /// The config file could not be written.
    #[error("Failed to write config file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// INI text could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// A setting holds a value of the wrong shape.
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    /// No such `section.key`.
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),
}

impl ConfigError {
    pub(crate) fn invalid(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::invalid("server.port", "abc", "not a port number");
        let message = err.to_string();
        assert!(message.contains("server.port"));
        assert!(message.contains("abc"));
        assert!(message.contains("not a port number"));
    }

    #[test]
    fn test_unknown_key_display() {
        let err = ConfigError::UnknownKey("map.zoom".to_string());
        assert_eq!(err.to_string(), "Unknown configuration key 'map.zoom'");
    }
}
