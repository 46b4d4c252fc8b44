//! Core provider types: identifiers, the template trait, and errors.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::coord::Coordinate;

/// Errors that can occur when naming a provider.
///
/// Rendering never fails; this is only produced when a caller asks for a
/// strongly typed [`ProviderId`] (CLI arguments, config values).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The token does not name one of the supported providers.
    #[error("Unknown map provider '{0}'")]
    Unknown(String),
}

/// Identifier of a supported map provider.
///
/// Tokens are matched ASCII case-insensitively and without trimming, so
/// `"Google"` selects [`ProviderId::Google`] while `" google"` selects
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProviderId {
    Google,
    CedarMaps,
    Neshan,
    MapIr,
    ParsiMap,
    Mapbox,
    Osm,
    Bing,
    Yandex,
}

impl ProviderId {
    /// All providers in their canonical listing order.
    pub const ALL: [ProviderId; 9] = [
        ProviderId::Google,
        ProviderId::CedarMaps,
        ProviderId::Neshan,
        ProviderId::MapIr,
        ProviderId::ParsiMap,
        ProviderId::Mapbox,
        ProviderId::Osm,
        ProviderId::Bing,
        ProviderId::Yandex,
    ];

    /// The lowercase token used to select this provider.
    pub fn token(self) -> &'static str {
        match self {
            ProviderId::Google => "google",
            ProviderId::CedarMaps => "cedarmaps",
            ProviderId::Neshan => "neshan",
            ProviderId::MapIr => "mapir",
            ProviderId::ParsiMap => "parsimap",
            ProviderId::Mapbox => "mapbox",
            ProviderId::Osm => "osm",
            ProviderId::Bing => "bing",
            ProviderId::Yandex => "yandex",
        }
    }

    /// Human-readable provider name.
    pub fn display_name(self) -> &'static str {
        match self {
            ProviderId::Google => "Google Maps",
            ProviderId::CedarMaps => "CedarMaps (Iran)",
            ProviderId::Neshan => "Neshan (Iran)",
            ProviderId::MapIr => "Map.ir (Iran)",
            ProviderId::ParsiMap => "ParsiMap (Iran)",
            ProviderId::Mapbox => "Mapbox",
            ProviderId::Osm => "OpenStreetMap",
            ProviderId::Bing => "Bing Maps",
            ProviderId::Yandex => "Yandex Maps",
        }
    }

    /// Name of the credential this provider needs, as looked up in a
    /// credential source. OpenStreetMap tiles need no key.
    pub fn credential_key(self) -> Option<&'static str> {
        match self {
            ProviderId::Google => Some("GOOGLE_MAPS_API_KEY"),
            ProviderId::CedarMaps => Some("CEDARMAPS_TOKEN"),
            ProviderId::Neshan => Some("NESHAN_API_KEY"),
            ProviderId::MapIr => Some("MAPIR_TOKEN"),
            ProviderId::ParsiMap => Some("PARSIMAP_KEY"),
            ProviderId::Mapbox => Some("MAPBOX_TOKEN"),
            ProviderId::Osm => None,
            ProviderId::Bing => Some("BING_MAPS_KEY"),
            ProviderId::Yandex => Some("YANDEX_API_KEY"),
        }
    }

    /// Literal written into the template when no credential is configured.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            ProviderId::Google => Some("YOUR_GOOGLE_API_KEY"),
            ProviderId::CedarMaps => Some("YOUR_CEDAR_ACCESS_TOKEN"),
            ProviderId::Neshan => Some("YOUR_NESHAN_API_KEY"),
            ProviderId::MapIr => Some("YOUR_MAPIR_ACCESS_TOKEN"),
            ProviderId::ParsiMap => Some("YOUR_PARSIMAP_KEY"),
            ProviderId::Mapbox => Some("YOUR_MAPBOX_ACCESS_TOKEN"),
            ProviderId::Osm => None,
            ProviderId::Bing => Some("YOUR_BING_MAPS_KEY"),
            ProviderId::Yandex => Some("YOUR_YANDEX_API_KEY"),
        }
    }

    /// Finds the provider for a token, or `None` if it is not supported.
    pub fn lookup(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.token().eq_ignore_ascii_case(token))
    }

    /// Provider metadata for listings.
    pub fn info(self) -> ProviderInfo {
        ProviderInfo {
            id: self.token(),
            name: self.display_name(),
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ProviderId {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| ProviderError::Unknown(s.to_string()))
    }
}

/// A provider listing entry: token and display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProviderInfo {
    pub id: &'static str,
    pub name: &'static str,
}

/// Trait for provider map templates.
///
/// A template turns a coordinate and a credential into the provider's
/// `<link>`/`<script>` markup plus inline initialisation script. The
/// container `<div>` itself is emitted by the dispatcher, so templates only
/// reference it by id.
pub trait MapTemplate: Send + Sync {
    /// Which provider this template renders.
    fn id(&self) -> ProviderId;

    /// Renders the provider markup.
    ///
    /// # Arguments
    ///
    /// * `coord` - Map centre and marker position
    /// * `credential` - API key or access token (empty for providers that need none)
    /// * `container_id` - Id of the element the map is mounted into
    fn render(&self, coord: Coordinate, credential: &str, container_id: &str) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(ProviderId::lookup("google"), Some(ProviderId::Google));
        assert_eq!(ProviderId::lookup("GOOGLE"), Some(ProviderId::Google));
        assert_eq!(ProviderId::lookup("MapIr"), Some(ProviderId::MapIr));
    }

    #[test]
    fn test_lookup_does_not_trim() {
        assert_eq!(ProviderId::lookup(" google"), None);
        assert_eq!(ProviderId::lookup("google "), None);
        assert_eq!(ProviderId::lookup(""), None);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "here".parse::<ProviderId>().unwrap_err();
        assert_eq!(err, ProviderError::Unknown("here".to_string()));
        assert!(err.to_string().contains("here"));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for id in ProviderId::ALL {
            assert_eq!(id.to_string().parse::<ProviderId>(), Ok(id));
        }
    }

    #[test]
    fn test_only_osm_is_keyless() {
        for id in ProviderId::ALL {
            assert_eq!(id.credential_key().is_none(), id == ProviderId::Osm);
            assert_eq!(id.placeholder().is_none(), id == ProviderId::Osm);
        }
    }

    #[test]
    fn test_placeholders_start_with_your() {
        for placeholder in ProviderId::ALL.iter().filter_map(|id| id.placeholder()) {
            assert!(placeholder.starts_with("YOUR_"), "{}", placeholder);
        }
    }
}
