//! Map fragment dispatcher
//!
//! Selects a provider template by name, resolves its credential and returns
//! the complete HTML fragment: a container `<div>` followed by the
//! provider's `<link>`/`<script>` tags and initialisation script.
//!
//! # Unsupported Providers
//!
//! An unknown provider name is not an error. The fragment then holds the
//! container and a `Provider not supported.` notice.
//!
//! # Escaping
//!
//! Coordinates and credentials are interpolated into script text as-is.
//! The output is trusted markup: do not feed credentials or container
//! settings from untrusted input.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use mapembed::dispatcher::render_map;
//!
//! let mut keys = HashMap::new();
//! keys.insert("GOOGLE_MAPS_API_KEY".to_string(), "ABC123".to_string());
//!
//! let html = render_map(35.6892, 51.3890, "google", Some(&keys));
//! assert!(html.contains("key=ABC123"));
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::coord::Coordinate;
use crate::credentials::CredentialSource;
use crate::provider::{template_for, ProviderId, ProviderInfo};

/// Default container element id.
pub const DEFAULT_CONTAINER_ID: &str = "map";

/// Default container width (CSS).
pub const DEFAULT_WIDTH: &str = "100%";

/// Default container height (CSS).
pub const DEFAULT_HEIGHT: &str = "400px";

/// Notice emitted for unknown providers.
pub const UNSUPPORTED_NOTICE: &str = "<p>Provider not supported.</p>";

/// Returns the supported providers in their fixed listing order.
pub fn list_providers() -> Vec<ProviderInfo> {
    ProviderId::ALL.iter().map(|id| id.info()).collect()
}

/// Renders a map fragment into the default `map` container.
///
/// # Arguments
///
/// * `latitude` - Map centre latitude, not range-checked
/// * `longitude` - Map centre longitude, not range-checked
/// * `provider` - Provider token, matched ASCII case-insensitively
/// * `credentials` - Key source; `None` writes the provider's placeholder
pub fn render_map(
    latitude: f64,
    longitude: f64,
    provider: &str,
    credentials: Option<&dyn CredentialSource>,
) -> String {
    render_fragment(
        &MapContainer::default(),
        Coordinate::new(latitude, longitude),
        provider,
        credentials,
    )
}

fn render_fragment(
    container: &MapContainer,
    coord: Coordinate,
    provider: &str,
    credentials: Option<&dyn CredentialSource>,
) -> String {
    let mut html = container.to_html();

    let Some(id) = ProviderId::lookup(provider) else {
        debug!(provider, "Unsupported map provider");
        html.push_str(UNSUPPORTED_NOTICE);
        return html;
    };

    let credential = resolve_credential(id, credentials);
    debug!(provider = %id, %coord, "Rendering map fragment");

    html.push_str(&template_for(id).render(coord, &credential, &container.id));
    html
}

fn resolve_credential(id: ProviderId, credentials: Option<&dyn CredentialSource>) -> String {
    match (id.credential_key(), id.placeholder()) {
        (Some(key), Some(placeholder)) => match credentials {
            Some(source) => source.get(key, placeholder),
            None => placeholder.to_string(),
        },
        _ => String::new(),
    }
}

/// The element a map is mounted into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapContainer {
    /// Element id, also targeted by the provider script.
    pub id: String,
    /// CSS width.
    pub width: String,
    /// CSS height.
    pub height: String,
}

impl Default for MapContainer {
    fn default() -> Self {
        Self {
            id: DEFAULT_CONTAINER_ID.to_string(),
            width: DEFAULT_WIDTH.to_string(),
            height: DEFAULT_HEIGHT.to_string(),
        }
    }
}

impl MapContainer {
    /// Create a container with the given id and default dimensions.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Set the CSS width.
    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = width.into();
        self
    }

    /// Set the CSS height.
    pub fn with_height(mut self, height: impl Into<String>) -> Self {
        self.height = height.into();
        self
    }

    /// The container `<div>` markup.
    pub fn to_html(&self) -> String {
        format!(
            "<div id='{}' style='width: {}; height: {};'></div>",
            self.id, self.width, self.height
        )
    }
}

/// A reusable renderer bound to a container and a credential source.
///
/// Cheap to clone; the credential source is shared.
#[derive(Clone, Default)]
pub struct MapRenderer {
    container: MapContainer,
    credentials: Option<Arc<dyn CredentialSource>>,
}

impl MapRenderer {
    /// Create a renderer with the default container and no credentials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the container.
    pub fn with_container(mut self, container: MapContainer) -> Self {
        self.container = container;
        self
    }

    /// Set the credential source.
    pub fn with_credentials(mut self, credentials: Arc<dyn CredentialSource>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// The container this renderer targets.
    pub fn container(&self) -> &MapContainer {
        &self.container
    }

    /// Renders a map fragment. Same contract as [`render_map`].
    pub fn render(&self, latitude: f64, longitude: f64, provider: &str) -> String {
        render_fragment(
            &self.container,
            Coordinate::new(latitude, longitude),
            provider,
            self.credentials.as_deref(),
        )
    }
}
