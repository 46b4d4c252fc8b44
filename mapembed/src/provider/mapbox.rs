//! Mapbox GL JS template (v2.5.0, `streets-v11` style).
//!
//! Like Map.ir, positions are `[lng, lat]`.

use crate::coord::Coordinate;
use crate::provider::{MapTemplate, ProviderId};

/// Mapbox template.
#[derive(Debug, Default, Clone, Copy)]
pub struct MapboxTemplate;

impl MapTemplate for MapboxTemplate {
    fn id(&self) -> ProviderId {
        ProviderId::Mapbox
    }

    fn render(&self, coord: Coordinate, credential: &str, container_id: &str) -> String {
        format!(
            "
<script src='https://api.mapbox.com/mapbox-gl-js/v2.5.0/mapbox-gl.js'></script>
<link href='https://api.mapbox.com/mapbox-gl-js/v2.5.0/mapbox-gl.css' rel='stylesheet' />
<script>
    mapboxgl.accessToken = '{token}';
    var map = new mapboxgl.Map({{
      container: '{container}',
      style: 'mapbox://styles/mapbox/streets-v11',
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
