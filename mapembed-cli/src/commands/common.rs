//! Common types and utilities shared across CLI commands.

use std::collections::HashMap;

use mapembed::config::ConfigFile;
use mapembed::credentials::{CredentialChain, EnvCredentials};

/// Parse a `NAME=VALUE` credential argument.
///
/// Splits on the first `=`, so values may contain further `=` signs. The
/// name is uppercased like keys in the `[credentials]` section.
pub fn parse_key_value(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, _)) if name.is_empty() => {
            Err(format!("missing credential name in '{}'", arg))
        }
        Some((name, value)) => Ok((name.to_ascii_uppercase(), value.to_string())),
        None => Err(format!("expected NAME=VALUE, got '{}'", arg)),
    }
}

/// Build the credential lookup used by rendering commands.
///
/// Precedence: explicit `--key` values, then the environment (unless
/// `use_env` is false), then the `[credentials]` section of the config.
pub fn build_credentials(
    keys: Vec<(String, String)>,
    use_env: bool,
    config: &ConfigFile,
) -> CredentialChain {
    let explicit: HashMap<String, String> = keys.into_iter().collect();

    let mut chain = CredentialChain::new();
    if !explicit.is_empty() {
        chain = chain.with_source(explicit);
    }
    if use_env {
        chain = chain.with_source(EnvCredentials);
    }
    chain.with_source(config.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapembed::credentials::CredentialSource;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("GOOGLE_MAPS_API_KEY=abc").unwrap(),
            ("GOOGLE_MAPS_API_KEY".to_string(), "abc".to_string())
        );
        assert_eq!(
            parse_key_value("MAPBOX_TOKEN=a=b").unwrap(),
            ("MAPBOX_TOKEN".to_string(), "a=b".to_string())
        );
        assert_eq!(
            parse_key_value("NESHAN_API_KEY=").unwrap(),
            ("NESHAN_API_KEY".to_string(), String::new())
        );
    }

    #[test]
    fn test_parse_key_value_uppercases_name() {
        assert_eq!(
            parse_key_value("mapbox_token=pk.x").unwrap(),
            ("MAPBOX_TOKEN".to_string(), "pk.x".to_string())
        );
    }

    #[test]
    fn test_lowercase_flag_reaches_lookup() {
        let keys = vec![parse_key_value("bing_maps_key=bk").unwrap()];
        let chain = build_credentials(keys, false, &ConfigFile::default());
        assert_eq!(chain.get("BING_MAPS_KEY", "x"), "bk");
    }

    #[test]
    fn test_parse_key_value_errors() {
        assert!(parse_key_value("GOOGLE_MAPS_API_KEY").is_err());
        assert!(parse_key_value("=abc").is_err());
    }

    #[test]
    fn test_explicit_key_beats_config() {
        let config = ConfigFile::parse("[credentials]\nMAPBOX_TOKEN = from-config\n").unwrap();
        let chain = build_credentials(
            vec![("MAPBOX_TOKEN".to_string(), "from-flag".to_string())],
            false,
            &config,
        );

        assert_eq!(chain.get("MAPBOX_TOKEN", "x"), "from-flag");
    }

    #[test]
    fn test_config_used_without_flags() {
        let config = ConfigFile::parse("[credentials]\nYANDEX_API_KEY = y-key\n").unwrap();
        let chain = build_credentials(Vec::new(), false, &config);

        assert_eq!(chain.len(), 1);
        assert_eq!(chain.get("YANDEX_API_KEY", "x"), "y-key");
        assert_eq!(chain.get("BING_MAPS_KEY", "fallback"), "fallback");
    }
}
