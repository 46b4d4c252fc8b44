//! Addressable configuration settings (`section.key`).
//!
//! Used by `mapembed config get/set/list` to read and edit single settings
//! with validation.

use std::path::PathBuf;
use std::str::FromStr;

use tracing_subscriber::EnvFilter;

use super::error::ConfigError;
use super::file::{
    ConfigFile, SECTION_CREDENTIALS, SECTION_LOGGING, SECTION_MAP, SECTION_SERVER,
};
use crate::provider::ProviderId;

/// A single configuration setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    MapDefaultProvider,
    MapContainerId,
    MapWidth,
    MapHeight,
    ServerHost,
    ServerPort,
    LoggingLevel,
    LoggingFile,
    /// API key or token of a provider, under its credential name.
    Credential(ProviderId),
}

impl ConfigKey {
    /// All settings, in file order.
    pub fn all() -> Vec<ConfigKey> {
        let mut keys = vec![
            ConfigKey::MapDefaultProvider,
            ConfigKey::MapContainerId,
            ConfigKey::MapWidth,
            ConfigKey::MapHeight,
            ConfigKey::ServerHost,
            ConfigKey::ServerPort,
            ConfigKey::LoggingLevel,
            ConfigKey::LoggingFile,
        ];
        keys.extend(
            ProviderId::ALL
                .into_iter()
                .filter(|id| id.credential_key().is_some())
                .map(ConfigKey::Credential),
        );
        keys
    }

    /// INI section holding this setting.
    pub fn section(&self) -> &'static str {
        match self {
            ConfigKey::MapDefaultProvider
            | ConfigKey::MapContainerId
            | ConfigKey::MapWidth
            | ConfigKey::MapHeight => SECTION_MAP,
            ConfigKey::ServerHost | ConfigKey::ServerPort => SECTION_SERVER,
            ConfigKey::LoggingLevel | ConfigKey::LoggingFile => SECTION_LOGGING,
            ConfigKey::Credential(_) => SECTION_CREDENTIALS,
        }
    }

    /// Key name within the section.
    pub fn key_name(&self) -> &'static str {
        match self {
            ConfigKey::MapDefaultProvider => "default_provider",
            ConfigKey::MapContainerId => "container_id",
            ConfigKey::MapWidth => "width",
            ConfigKey::MapHeight => "height",
            ConfigKey::ServerHost => "host",
            ConfigKey::ServerPort => "port",
            ConfigKey::LoggingLevel => "level",
            ConfigKey::LoggingFile => "file",
            ConfigKey::Credential(id) => id.credential_key().unwrap_or_default(),
        }
    }

    /// Full `section.key` name.
    pub fn name(&self) -> String {
        format!("{}.{}", self.section(), self.key_name())
    }

    /// Current value as text; empty when unset.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::MapDefaultProvider => config.map.default_provider.to_string(),
            ConfigKey::MapContainerId => config.map.container_id.clone(),
            ConfigKey::MapWidth => config.map.width.clone(),
            ConfigKey::MapHeight => config.map.height.clone(),
            ConfigKey::ServerHost => config.server.host.to_string(),
            ConfigKey::ServerPort => config.server.port.to_string(),
            ConfigKey::LoggingLevel => config.logging.level.clone(),
            ConfigKey::LoggingFile => config
                .logging
                .file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_default(),
            ConfigKey::Credential(_) => config
                .credentials
                .get(self.key_name())
                .cloned()
                .unwrap_or_default(),
        }
    }

    /// Validate and store `value`.
    ///
    /// An empty value clears optional settings (log file, credentials).
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match self {
            ConfigKey::MapDefaultProvider => {
                config.map.default_provider = value
                    .parse()
                    .map_err(|e: crate::provider::ProviderError| {
                        ConfigError::invalid(self.name(), value, e.to_string())
                    })?;
            }
            ConfigKey::MapContainerId => {
                config.map.container_id = self.require(value)?.to_string();
            }
            ConfigKey::MapWidth => config.map.width = self.require(value)?.to_string(),
            ConfigKey::MapHeight => config.map.height = self.require(value)?.to_string(),
            ConfigKey::ServerHost => {
                config.server.host = value
                    .parse()
                    .map_err(|_| ConfigError::invalid(self.name(), value, "not an IP address"))?;
            }
            ConfigKey::ServerPort => {
                config.server.port = value
                    .parse()
                    .map_err(|_| ConfigError::invalid(self.name(), value, "not a port number"))?;
            }
            ConfigKey::LoggingLevel => {
                EnvFilter::try_new(value)
                    .map_err(|e| ConfigError::invalid(self.name(), value, e.to_string()))?;
                config.logging.level = self.require(value)?.to_string();
            }
            ConfigKey::LoggingFile => {
                config.logging.file = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            ConfigKey::Credential(_) => {
                if value.is_empty() {
                    config.credentials.remove(self.key_name());
                } else {
                    config
                        .credentials
                        .insert(self.key_name().to_string(), value.to_string());
                }
            }
        }
        Ok(())
    }

    fn require<'v>(&self, value: &'v str) -> Result<&'v str, ConfigError> {
        if value.is_empty() {
            Err(ConfigError::invalid(self.name(), value, "must not be empty"))
        } else {
            Ok(value)
        }
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ConfigError::UnknownKey(s.to_string());
        let (section, key) = s.split_once('.').ok_or_else(unknown)?;

        if section == SECTION_CREDENTIALS {
            return ProviderId::ALL
                .into_iter()
                .find(|id| {
                    id.credential_key()
                        .is_some_and(|name| name.eq_ignore_ascii_case(key))
                })
                .map(ConfigKey::Credential)
                .ok_or_else(unknown);
        }

        ConfigKey::all()
            .into_iter()
            .find(|k| k.section() == section && k.key_name() == key)
            .ok_or_else(unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_names_parse_back() {
        for key in ConfigKey::all() {
            assert_eq!(key.name().parse::<ConfigKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_all_has_eight_credentials() {
        let credentials = ConfigKey::all()
            .into_iter()
            .filter(|k| k.section() == "credentials")
            .count();
        assert_eq!(credentials, 8);
    }

    #[test]
    fn test_credential_key_case_insensitive() {
        let key: ConfigKey = "credentials.google_maps_api_key".parse().unwrap();
        assert_eq!(key, ConfigKey::Credential(ProviderId::Google));
        assert_eq!(key.name(), "credentials.GOOGLE_MAPS_API_KEY");
    }

    #[test]
    fn test_unknown_keys() {
        assert!(matches!(
            "map.zoom".parse::<ConfigKey>(),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(
            "credentials.OSM_KEY".parse::<ConfigKey>(),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(
            "nodot".parse::<ConfigKey>(),
            Err(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_set_and_get() {
        let mut config = ConfigFile::default();

        ConfigKey::MapDefaultProvider
            .set(&mut config, "Mapbox")
            .unwrap();
        ConfigKey::ServerPort.set(&mut config, "9090").unwrap();
        ConfigKey::Credential(ProviderId::Mapbox)
            .set(&mut config, "pk.abc")
            .unwrap();

        assert_eq!(ConfigKey::MapDefaultProvider.get(&config), "mapbox");
        assert_eq!(ConfigKey::ServerPort.get(&config), "9090");
        assert_eq!(
            ConfigKey::Credential(ProviderId::Mapbox).get(&config),
            "pk.abc"
        );
    }

    #[test]
    fn test_set_rejects_invalid_values() {
        let mut config = ConfigFile::default();
        assert!(ConfigKey::MapDefaultProvider.set(&mut config, "here").is_err());
        assert!(ConfigKey::ServerPort.set(&mut config, "70000").is_err());
        assert!(ConfigKey::ServerHost.set(&mut config, "localhost").is_err());
        assert!(ConfigKey::MapWidth.set(&mut config, "  ").is_err());
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_empty_clears_optional_settings() {
        let mut config = ConfigFile::default();
        let key = ConfigKey::Credential(ProviderId::Bing);

        key.set(&mut config, "bk").unwrap();
        ConfigKey::LoggingFile.set(&mut config, "/tmp/m.log").unwrap();
        key.set(&mut config, "").unwrap();
        ConfigKey::LoggingFile.set(&mut config, "").unwrap();

        assert_eq!(key.get(&config), "");
        assert!(config.logging.file.is_none());
    }
}
