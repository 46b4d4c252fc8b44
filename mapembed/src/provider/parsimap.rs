//! ParsiMap (Iran) template.
//!
//! Raster tiles from `api.parsimap.com` on a Leaflet map; the key travels
//! as a tile URL query parameter.

use crate::coord::Coordinate;
use crate::provider::{MapTemplate, ProviderId};

/// ParsiMap template.
#[derive(Debug, Default, Clone, Copy)]
pub struct ParsiMapTemplate;

impl MapTemplate for ParsiMapTemplate {
    fn id(&self) -> ProviderId {
        ProviderId::ParsiMap
    }

    fn render(&self, coord: Coordinate, credential: &str, container_id: &str) -> String {
        format!(
            "
<script src='https://api.parsimap.com/web/v1/js/main.js'></script>
<script>
    var map = L.map('{container}').setView({center}, 15);
    L.tileLayer('https://api.parsimap.com/tile/parsimap-streets-v1/{{z}}/{{x}}/{{y}}.png?key={key}', {{
        maxZoom: 18,
    }}).addTo(map);
    var marker = L.marker({center}).addTo(map);
</script>
",
            container = container_id,
            center = coord.lat_lng_array(),
            key = credential,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_url_keeps_xyz_placeholders() {
        let html = ParsiMapTemplate.render(Coordinate::new(32.0, 53.0), "pk", "map");
        assert!(html.contains("parsimap-streets-v1/{z}/{x}/{y}.png?key=pk'"));
        assert!(html.contains("maxZoom: 18,"));
    }

    #[test]
    fn test_set_view() {
        let html = ParsiMapTemplate.render(Coordinate::new(32.5, 53.25), "pk", "map");
        assert!(html.contains("L.map('map').setView([32.5, 53.25], 15);"));
    }
}
