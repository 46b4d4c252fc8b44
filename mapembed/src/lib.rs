//! mapembed - Embeddable HTML map widgets
//!
//! Given a latitude/longitude and a provider name, this library renders an
//! HTML fragment that loads the provider's JavaScript map SDK and centres a
//! map with a marker on that position. Supported providers are Google Maps,
//! CedarMaps, Neshan, Map.ir, ParsiMap, Mapbox, OpenStreetMap (Leaflet),
//! Bing Maps and Yandex Maps.
//!
//! ```
//! use mapembed::{list_providers, render_map};
//!
//! assert_eq!(list_providers().len(), 9);
//!
//! let html = render_map(35.6892, 51.3890, "osm", None);
//! assert!(html.starts_with("<div id='map'"));
//! ```

pub mod config;
pub mod coord;
pub mod credentials;
pub mod dispatcher;
pub mod logging;
pub mod provider;
#[cfg(feature = "serve")]
pub mod server;

pub use dispatcher::{list_providers, render_map, MapContainer, MapRenderer};
