//! Init command - create the configuration file.

use std::path::Path;

use mapembed::config::ConfigFile;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Run the init command.
pub fn run(runner: &CliRunner) -> Result<(), CliError> {
    let path = runner.config_path();
    if !write_default(path)? {
        println!("Configuration file already exists: {}", path.display());
        println!("Use 'mapembed config set' to change settings.");
        return Ok(());
    }

    println!("Created configuration file: {}", path.display());
    println!();
    println!("Add provider keys under [credentials], or run:");
    println!("  mapembed config set credentials.GOOGLE_MAPS_API_KEY <key>");
    println!("CLI arguments and environment variables override file values.");
    Ok(())
}

/// Write a default configuration to `path` unless a file is already
/// there. Returns true if the file was created.
fn write_default(path: &Path) -> Result<bool, CliError> {
    if path.exists() {
        return Ok(false);
    }
    ConfigFile::default().save_to(path)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mapembed").join("config.ini");

        assert!(write_default(&path).unwrap());

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("[credentials]"));
        assert!(text.contains("GOOGLE_MAPS_API_KEY="));
        assert_eq!(ConfigFile::load_from(&path).unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_existing_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[map]\ndefault_provider = bing\n").unwrap();

        assert!(!write_default(&path).unwrap());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[map]\ndefault_provider = bing\n"
        );
    }
}
