//! Configuration management CLI commands.
//!
//! Provides `config get`, `config set`, `config list`, and `config path`
//! for viewing and modifying settings from the command line.

use std::path::Path;

use clap::Subcommand;
use mapembed::config::{ConfigFile, ConfigKey};

use crate::error::CliError;
use crate::runner::CliRunner;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Get a configuration value
    Get {
        /// Configuration key in format section.key (e.g., map.default_provider)
        key: String,
    },

    /// Set a configuration value (an empty value clears optional settings)
    Set {
        /// Configuration key in format section.key (e.g., credentials.MAPBOX_TOKEN)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all configuration settings
    List,

    /// Show the configuration file path
    Path,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands, runner: &CliRunner) -> Result<(), CliError> {
    match command {
        ConfigCommands::Get { key } => {
            println!("{}", get_value(&key, runner.config())?);
            Ok(())
        }
        ConfigCommands::Set { key, value } => {
            let name = set_value(&key, &value, runner.config(), runner.config_path())?;
            println!("Set {} = {}", name, value);
            Ok(())
        }
        ConfigCommands::List => {
            println!("{}", list_values(runner.config()));
            Ok(())
        }
        ConfigCommands::Path => {
            println!("{}", runner.config_path().display());
            Ok(())
        }
    }
}

fn parse_key(key: &str) -> Result<ConfigKey, CliError> {
    key.parse().map_err(|_| {
        CliError::Config(format!(
            "Unknown configuration key '{}'. Use 'mapembed config list' to see available keys.",
            key
        ))
    })
}

fn get_value(key: &str, config: &ConfigFile) -> Result<String, CliError> {
    let value = parse_key(key)?.get(config);
    if value.is_empty() {
        Ok("(not set)".to_string())
    } else {
        Ok(value)
    }
}

/// Validate and store `value`, then save. Returns the canonical key name.
fn set_value(
    key: &str,
    value: &str,
    config: &ConfigFile,
    path: &Path,
) -> Result<String, CliError> {
    let config_key = parse_key(key)?;

    let mut updated = config.clone();
    config_key.set(&mut updated, value)?;
    updated.save_to(path)?;

    Ok(config_key.name())
}

fn list_values(config: &ConfigFile) -> String {
    let mut out = String::from("Configuration Settings\n======================\n");
    let mut current_section = "";

    for key in ConfigKey::all() {
        let section = key.section();

        // Section header when the section changes
        if section != current_section {
            out.push_str(&format!("\n[{}]\n", section));
            current_section = section;
        }

        let value = key.get(config);
        if value.is_empty() {
            out.push_str(&format!("  {} = (not set)\n", key.key_name()));
        } else {
            out.push_str(&format!("  {} = {}\n", key.key_name(), value));
        }
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{load_config, ConfigMode};

    #[test]
    fn test_get_value() {
        let config = ConfigFile::parse("[map]\ndefault_provider = neshan\n").unwrap();
        assert_eq!(get_value("map.default_provider", &config).unwrap(), "neshan");
        assert_eq!(get_value("logging.file", &config).unwrap(), "(not set)");
    }

    #[test]
    fn test_get_unknown_key() {
        let err = get_value("map.zoom", &ConfigFile::default()).unwrap_err();
        assert!(err.to_string().contains("mapembed config list"));
    }

    #[test]
    fn test_set_value_saves() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.ini");

        let name = set_value(
            "credentials.mapbox_token",
            "pk.abc",
            &ConfigFile::default(),
            &path,
        )
        .unwrap();
        assert_eq!(name, "credentials.MAPBOX_TOKEN");

        let saved = ConfigFile::load_from(&path).unwrap();
        assert_eq!(saved.credentials.get("MAPBOX_TOKEN").unwrap(), "pk.abc");
    }

    #[test]
    fn test_set_invalid_value_does_not_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");

        assert!(set_value("server.port", "http", &ConfigFile::default(), &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_set_repairs_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[map]\ndefault_provider = gogle\nwidth = 640px\n").unwrap();

        let (config, problems) = load_config(&path, ConfigMode::Lenient).unwrap();
        assert_eq!(problems.len(), 1);

        set_value("map.default_provider", "osm", &config, &path).unwrap();

        let repaired = ConfigFile::load_from(&path).unwrap();
        assert_eq!(repaired.map.default_provider.token(), "osm");
        assert_eq!(repaired.map.width, "640px");
    }

    #[test]
    fn test_list_values() {
        let listing = list_values(&ConfigFile::default());
        assert!(listing.contains("[map]\n  default_provider = google"));
        assert!(listing.contains("[credentials]"));
        assert!(listing.contains("  GOOGLE_MAPS_API_KEY = (not set)"));
    }
}
