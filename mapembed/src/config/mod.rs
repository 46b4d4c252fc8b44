//! Configuration file support
//!
//! Settings live in an INI file at `<config_dir>/mapembed/config.ini`:
//!
//! ```ini
//! [map]
//! default_provider = google
//! container_id = map
//! width = 100%
//! height = 400px
//!
//! [server]
//! host = 127.0.0.1
//! port = 8080
//!
//! [logging]
//! level = info
//! file =
//!
//! [credentials]
//! GOOGLE_MAPS_API_KEY = ...
//! ```
//!
//! A missing file is equivalent to an empty one. The loaded [`ConfigFile`]
//! is itself a [`CredentialSource`](crate::credentials::CredentialSource)
//! over its `[credentials]` section.

mod error;
mod file;
mod keys;

pub use error::ConfigError;
pub use file::{
    config_file_path, ConfigFile, LoggingSettings, MapSettings, ServerSettings,
    DEFAULT_LOG_LEVEL, DEFAULT_PORT,
};
pub use keys::ConfigKey;
