//! Map.ir (Iran) template.
//!
//! Map.ir hosts a build of mapbox-gl (web SDK 1.4.2) and its own vector
//! style.
//!
//! # Coordinate Order
//!
//! mapbox-gl takes `[lng, lat]` (GeoJSON order) for both `center` and
//! `setLngLat`, unlike the Leaflet-based providers.

use crate::coord::Coordinate;
use crate::provider::{MapTemplate, ProviderId};

/// Map.ir template.
#[derive(Debug, Default, Clone, Copy)]
pub struct MapIrTemplate;

impl MapTemplate for MapIrTemplate {
    fn id(&self) -> ProviderId {
        ProviderId::MapIr
    }

    fn render(&self, coord: Coordinate, credential: &str, container_id: &str) -> String {
        format!(
            "
<script src='https://cdn.map.ir/web-sdk/1.4.2/mapbox-gl.js'></script>
<link rel='stylesheet' href='https://cdn.map.ir/web-sdk/1.4.2/mapbox-gl.css' />
<script>
    mapboxgl.accessToken = '{token}';
    var map = new mapboxgl.Map({{
      container: '{container}',
      style: 'https://map.ir/vector/styles/main/mapir-xyz-light-style.json',
      center: {center},
      zoom: 15
    }});
    new mapboxgl.Marker().setLngLat({center}).addTo(map);
</script>
",
            token = credential,
            container = container_id,
            center = coord.lng_lat_array(),
        )
    }
}
