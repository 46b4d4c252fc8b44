//! OpenStreetMap template (Leaflet 1.7.1 with the public OSM tile servers).
//!
//! No credential is required; the `credential` argument is ignored.

use crate::coord::Coordinate;
use crate::provider::{MapTemplate, ProviderId};

/// OpenStreetMap template.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsmTemplate;

impl MapTemplate for OsmTemplate {
    fn id(&self) -> ProviderId {
        ProviderId::Osm
    }

    fn render(&self, coord: Coordinate, _credential: &str, container_id: &str) -> String {
        format!(
            "
<link rel='stylesheet' href='https://unpkg.com/leaflet@1.7.1/dist/leaflet.css' />
<script src='https://unpkg.com/leaflet@1.7.1/dist/leaflet.js'></script>
<script>
    var map = L.map('{container}').setView({center}, 15);
    L.tileLayer('https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
      maxZoom: 19,
      attribution: '© OpenStreetMap contributors'
    }}).addTo(map);
    var marker = L.marker({center}).addTo(map);
</script>
",
            container = container_id,
            center = coord.lat_lng_array(),
        )
    }
}
