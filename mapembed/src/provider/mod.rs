//! Map provider templates
//!
//! This module provides the identifiers of the supported map providers
//! (Google Maps, CedarMaps, Neshan, Map.ir, ParsiMap, Mapbox, OpenStreetMap,
//! Bing Maps, Yandex Maps) and one HTML/JavaScript template per provider.
//!
//! # Registry
//!
//! Templates are looked up through [`template_for`]:
//!
//! ```
//! use mapembed::coord::Coordinate;
//! use mapembed::provider::{template_for, ProviderId};
//!
//! let template = template_for(ProviderId::Osm);
//! let html = template.render(Coordinate::new(35.6892, 51.389), "", "map");
//! assert!(html.contains("L.map('map')"));
//! ```

mod bing;
mod cedarmaps;
mod factory;
mod google;
mod mapbox;
mod mapir;
mod neshan;
mod osm;
mod parsimap;
mod types;
mod yandex;

pub use bing::BingMapsTemplate;
pub use cedarmaps::CedarMapsTemplate;
pub use factory::template_for;
pub use google::GoogleMapsTemplate;
pub use mapbox::MapboxTemplate;
pub use mapir::MapIrTemplate;
pub use neshan::NeshanTemplate;
pub use osm::OsmTemplate;
pub use parsimap::ParsiMapTemplate;
pub use types::{MapTemplate, ProviderError, ProviderId, ProviderInfo};
pub use yandex::YandexMapsTemplate;
