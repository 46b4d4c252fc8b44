//! CedarMaps (Iran) template.
//!
//! Uses the Leaflet-based `cedarmaps.js` v1.8.1 SDK. The access token is
//! set globally and also appended to the style JSON URL.

use crate::coord::Coordinate;
use crate::provider::{MapTemplate, ProviderId};

/// CedarMaps template.
#[derive(Debug, Default, Clone, Copy)]
pub struct CedarMapsTemplate;

impl MapTemplate for CedarMapsTemplate {
    fn id(&self) -> ProviderId {
        ProviderId::CedarMaps
    }

    fn render(&self, coord: Coordinate, credential: &str, container_id: &str) -> String {
        format!(
            "
<link href='https://api.cedarmaps.com/cedarmaps.js/v1.8.1/cedarmaps.css' rel='stylesheet' />
<script src='https://api.cedarmaps.com/cedarmaps.js/v1.8.1/cedarmaps.js'></script>
<script>
    L.cedarmaps.accessToken = '{token}';
    var map = L.cedarmaps.map('{container}', 'https://api.cedarmaps.com/v1/tiles/cedarmaps.streets.json?access_token={token}', {{
      center: {center},
      zoom: 15
    }});
    var marker = L.marker({center}).addTo(map);
</script>
",
            token = credential,
            container = container_id,
            center = coord.lat_lng_array(),
        )
    }
}
