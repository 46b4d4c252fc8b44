//! Neshan (Iran) template.
//!
//! Neshan ships a patched Leaflet 1.4.0 whose `L.Map` accepts the API key
//! and map type directly in the options object.

use crate::coord::Coordinate;
use crate::provider::{MapTemplate, ProviderId};

/// Neshan template.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeshanTemplate;

impl MapTemplate for NeshanTemplate {
    fn id(&self) -> ProviderId {
        ProviderId::Neshan
    }

    fn render(&self, coord: Coordinate, credential: &str, container_id: &str) -> String {
        // Neshan's default zoom is one level wider than the other providers
        format!(
            "
<link href='https://static.neshan.org/sdk/leaflet/1.4.0/leaflet.css' rel='stylesheet' type='text/css'>
<script src='https://static.neshan.org/sdk/leaflet/1.4.0/leaflet.js' type='text/javascript'></script>
<script>
    var map = new L.Map('{container}', {{
        key: '{key}',
        maptype: 'dreamy',
        poi: true,
        traffic: false,
        center: {center},
        zoom: 14
    }});
    var marker = L.marker({center}).addTo(map);
</script>
",
            container = container_id,
            key = credential,
            center = coord.lat_lng_array(),
        )
    }
}
