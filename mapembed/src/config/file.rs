//! INI configuration file.

use std::collections::BTreeMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use ini::Ini;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use super::error::ConfigError;
use crate::credentials::CredentialSource;
use crate::dispatcher::{MapContainer, DEFAULT_CONTAINER_ID, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::logging::LoggingConfig;
use crate::provider::ProviderId;

/// Default HTTP port for `mapembed serve`.
pub const DEFAULT_PORT: u16 = 8080;

/// Default log filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub(crate) const SECTION_MAP: &str = "map";
pub(crate) const SECTION_SERVER: &str = "server";
pub(crate) const SECTION_LOGGING: &str = "logging";
pub(crate) const SECTION_CREDENTIALS: &str = "credentials";

/// Returns the path of the user's configuration file.
///
/// `<config_dir>/mapembed/config.ini`, falling back to the working
/// directory when the platform has no config directory.
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mapembed")
        .join("config.ini")
}

/// `[map]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapSettings {
    /// Provider used when a request names none.
    pub default_provider: ProviderId,
    pub container_id: String,
    pub width: String,
    pub height: String,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            default_provider: ProviderId::Google,
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            width: DEFAULT_WIDTH.to_string(),
            height: DEFAULT_HEIGHT.to_string(),
        }
    }
}

impl MapSettings {
    /// The container described by these settings.
    pub fn container(&self) -> MapContainer {
        MapContainer::new(self.container_id.clone())
            .with_width(self.width.clone())
            .with_height(self.height.clone())
    }
}

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerSettings {
    /// Socket address to bind.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// `tracing` filter directive, e.g. `info` or `mapembed=debug`.
    pub level: String,
    /// Log file; stderr when unset.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}

impl LoggingSettings {
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            file: self.file.clone(),
        }
    }
}

/// The parsed configuration file.
///
/// Missing sections and keys take their defaults, so an empty file and a
/// missing file both load as [`ConfigFile::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub map: MapSettings,
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    /// Provider credentials keyed by credential name (`GOOGLE_MAPS_API_KEY`, ...).
    pub credentials: BTreeMap<String, String>,
}

impl ConfigFile {
    /// Load the user's configuration file, or defaults if it does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded config file");
        Self::from_ini(&ini)
    }

    /// Parse configuration from INI text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::from_ini(&ini)
    }

    /// Load configuration from `path`, skipping invalid values.
    ///
    /// Each setting that fails validation keeps its default and is reported
    /// in the returned list, so a file with one bad entry can still be
    /// inspected and repaired. A file that cannot be read or parsed as INI
    /// is still an error.
    pub fn load_lenient_from(path: &Path) -> Result<(Self, Vec<ConfigError>), ConfigError> {
        if !path.exists() {
            return Ok((Self::default(), Vec::new()));
        }

        let ini = Ini::load_from_file(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::collect(&ini))
    }

    fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let (config, problems) = Self::collect(ini);
        match problems.into_iter().next() {
            Some(problem) => Err(problem),
            None => Ok(config),
        }
    }

    fn collect(ini: &Ini) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut problems = Vec::new();

        if let Some(section) = ini.section(Some(SECTION_MAP)) {
            if let Some(value) = non_empty(section.get("default_provider")) {
                match value.parse() {
                    Ok(provider) => config.map.default_provider = provider,
                    Err(_) => problems.push(ConfigError::invalid(
                        "map.default_provider",
                        value,
                        "unknown provider",
                    )),
                }
            }
            if let Some(value) = non_empty(section.get("container_id")) {
                config.map.container_id = value.to_string();
            }
            if let Some(value) = non_empty(section.get("width")) {
                config.map.width = value.to_string();
            }
            if let Some(value) = non_empty(section.get("height")) {
                config.map.height = value.to_string();
            }
        }

        if let Some(section) = ini.section(Some(SECTION_SERVER)) {
            if let Some(value) = non_empty(section.get("host")) {
                match value.parse() {
                    Ok(host) => config.server.host = host,
                    Err(_) => problems.push(ConfigError::invalid(
                        "server.host",
                        value,
                        "not an IP address",
                    )),
                }
            }
            if let Some(value) = non_empty(section.get("port")) {
                match value.parse() {
                    Ok(port) => config.server.port = port,
                    Err(_) => problems.push(ConfigError::invalid(
                        "server.port",
                        value,
                        "not a port number",
                    )),
                }
            }
        }

        if let Some(section) = ini.section(Some(SECTION_LOGGING)) {
            if let Some(value) = non_empty(section.get("level")) {
                match EnvFilter::try_new(value) {
                    Ok(_) => config.logging.level = value.to_string(),
                    Err(e) => {
                        problems.push(ConfigError::invalid("logging.level", value, e.to_string()))
                    }
                }
            }
            config.logging.file = non_empty(section.get("file")).map(PathBuf::from);
        }

        if let Some(section) = ini.section(Some(SECTION_CREDENTIALS)) {
            for (key, value) in section.iter() {
                if !value.is_empty() {
                    config
                        .credentials
                        .insert(key.to_ascii_uppercase(), value.to_string());
                }
            }
        }

        (config, problems)
    }

    /// Serialise to INI. Credentials for every keyed provider are written,
    /// empty when unset, so the file documents what can be configured.
    pub fn to_ini(&self) -> Ini {
        let mut ini = Ini::new();

        ini.with_section(Some(SECTION_MAP))
            .set("default_provider", self.map.default_provider.token())
            .set("container_id", self.map.container_id.as_str())
            .set("width", self.map.width.as_str())
            .set("height", self.map.height.as_str());

        ini.with_section(Some(SECTION_SERVER))
            .set("host", self.server.host.to_string())
            .set("port", self.server.port.to_string());

        ini.with_section(Some(SECTION_LOGGING))
            .set("level", self.logging.level.as_str())
            .set(
                "file",
                self.logging
                    .file
                    .as_ref()
                    .map(|p| p.to_string_lossy().to_string())
                    .unwrap_or_default(),
            );

        for key in ProviderId::ALL.iter().filter_map(|id| id.credential_key()) {
            let value = self.credentials.get(key).cloned().unwrap_or_default();
            ini.with_section(Some(SECTION_CREDENTIALS)).set(key, value);
        }
        // Extra keys set by hand survive a load/save cycle
        for (key, value) in &self.credentials {
            if !ProviderId::ALL
                .iter()
                .any(|id| id.credential_key() == Some(key.as_str()))
            {
                ini.with_section(Some(SECTION_CREDENTIALS))
                    .set(key.as_str(), value.as_str());
            }
        }

        ini
    }

    /// Save to the user's configuration file.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path())
    }

    /// Save to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        self.to_ini().write_to_file(path).map_err(write_err)?;
        debug!(path = %path.display(), "Saved config file");
        Ok(())
    }
}

impl CredentialSource for ConfigFile {
    fn lookup(&self, key: &str) -> Option<String> {
        self.credentials
            .get(&key.to_ascii_uppercase())
            .filter(|value| !value.is_empty())
            .cloned()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
