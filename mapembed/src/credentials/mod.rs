//! Credential lookup abstraction
//!
//! Map templates need a provider API key or access token. Rather than
//! reading application settings from global state, the dispatcher receives
//! a [`CredentialSource`] from its caller. Keys are the names listed by
//! [`ProviderId::credential_key`](crate::provider::ProviderId::credential_key),
//! e.g. `GOOGLE_MAPS_API_KEY`.
//!
//! # Sources
//!
//! - `HashMap<String, String>` / `BTreeMap<String, String>` for in-memory keys
//! - [`EnvCredentials`] for process environment variables
//! - [`CredentialChain`] to layer several sources, first hit wins
//! - [`ConfigFile`](crate::config::ConfigFile) for the `[credentials]` section

use std::collections::{BTreeMap, HashMap};

/// Trait for credential lookups.
///
/// Implementors provide [`lookup`](Self::lookup); [`get`](Self::get)
/// supplies the default when a key is absent. A missing key is never an
/// error.
pub trait CredentialSource: Send + Sync {
    /// Returns the credential stored under `key`, if any.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Returns the credential stored under `key`, or `default` when unset.
    fn get(&self, key: &str, default: &str) -> String {
        self.lookup(key).unwrap_or_else(|| default.to_string())
    }
}

impl CredentialSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl CredentialSource for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

/// Credentials read from process environment variables.
///
/// The variable name is the credential key itself. Empty variables are
/// treated as unset.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvCredentials;

impl CredentialSource for EnvCredentials {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|value| !value.is_empty())
    }
}

/// An ordered list of credential sources.
///
/// Sources are consulted in insertion order; the first one holding the key
/// wins.
#[derive(Default)]
pub struct CredentialChain {
    sources: Vec<Box<dyn CredentialSource>>,
}

impl CredentialChain {
    /// Creates an empty chain. An empty chain resolves every key to its
    /// default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a source with lower precedence than those already added.
    pub fn with_source(mut self, source: impl CredentialSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Number of sources in the chain.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns true if the chain holds no sources.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl CredentialSource for CredentialChain {
    fn lookup(&self, key: &str) -> Option<String> {
        self.sources.iter().find_map(|source| source.lookup(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_get_falls_back_to_default() {
        let source = map(&[("GOOGLE_MAPS_API_KEY", "ABC123")]);
        assert_eq!(CredentialSource::get(&source, "GOOGLE_MAPS_API_KEY", "x"), "ABC123");
        assert_eq!(
            CredentialSource::get(&source, "MAPBOX_TOKEN", "YOUR_MAPBOX_ACCESS_TOKEN"),
            "YOUR_MAPBOX_ACCESS_TOKEN"
        );
    }

    #[test]
    fn test_btree_source() {
        let mut source = BTreeMap::new();
        source.insert("BING_MAPS_KEY".to_string(), "bk".to_string());
        assert_eq!(source.lookup("BING_MAPS_KEY"), Some("bk".to_string()));
        assert_eq!(source.lookup("bing_maps_key"), None);
    }

    #[test]
    fn test_chain_first_hit_wins() {
        let chain = CredentialChain::new()
            .with_source(map(&[("NESHAN_API_KEY", "first")]))
            .with_source(map(&[("NESHAN_API_KEY", "second"), ("MAPIR_TOKEN", "m")]));

        assert_eq!(chain.len(), 2);
        assert_eq!(chain.get("NESHAN_API_KEY", "d"), "first");
        assert_eq!(chain.get("MAPIR_TOKEN", "d"), "m");
        assert_eq!(chain.get("YANDEX_API_KEY", "d"), "d");
    }

    #[test]
    fn test_empty_chain() {
        let chain = CredentialChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.lookup("GOOGLE_MAPS_API_KEY"), None);
    }

    #[test]
    fn test_env_credentials() {
        // Unique names so parallel tests do not interfere
        std::env::set_var("MAPEMBED_TEST_ENV_SET", "from-env");
        std::env::set_var("MAPEMBED_TEST_ENV_EMPTY", "");

        let env = EnvCredentials;
        assert_eq!(
            env.lookup("MAPEMBED_TEST_ENV_SET"),
            Some("from-env".to_string())
        );
        assert_eq!(env.lookup("MAPEMBED_TEST_ENV_EMPTY"), None);
        assert_eq!(env.get("MAPEMBED_TEST_ENV_MISSING", "fallback"), "fallback");
    }
}
