//! Provider registry.
//!
//! Maps each [`ProviderId`] to its static template instance so the
//! dispatcher selects a template with a single lookup instead of a branch
//! per provider.

use super::bing::BingMapsTemplate;
use super::cedarmaps::CedarMapsTemplate;
use super::google::GoogleMapsTemplate;
use super::mapbox::MapboxTemplate;
use super::mapir::MapIrTemplate;
use super::neshan::NeshanTemplate;
use super::osm::OsmTemplate;
use super::parsimap::ParsiMapTemplate;
use super::types::{MapTemplate, ProviderId};
use super::yandex::YandexMapsTemplate;

static GOOGLE: GoogleMapsTemplate = GoogleMapsTemplate;
static CEDARMAPS: CedarMapsTemplate = CedarMapsTemplate;
static NESHAN: NeshanTemplate = NeshanTemplate;
static MAPIR: MapIrTemplate = MapIrTemplate;
static PARSIMAP: ParsiMapTemplate = ParsiMapTemplate;
static MAPBOX: MapboxTemplate = MapboxTemplate;
static OSM: OsmTemplate = OsmTemplate;
static BING: BingMapsTemplate = BingMapsTemplate;
static YANDEX: YandexMapsTemplate = YandexMapsTemplate;

/// Returns the template for a provider.
pub fn template_for(id: ProviderId) -> &'static dyn MapTemplate {
    match id {
        ProviderId::Google => &GOOGLE,
        ProviderId::CedarMaps => &CEDARMAPS,
        ProviderId::Neshan => &NESHAN,
        ProviderId::MapIr => &MAPIR,
        ProviderId::ParsiMap => &PARSIMAP,
        ProviderId::Mapbox => &MAPBOX,
        ProviderId::Osm => &OSM,
        ProviderId::Bing => &BING,
        ProviderId::Yandex => &YANDEX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_returns_matching_template() {
        for id in ProviderId::ALL {
            assert_eq!(template_for(id).id(), id);
        }
    }
}
