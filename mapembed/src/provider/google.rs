//! Google Maps JavaScript API template.
//!
//! Loads `maps.googleapis.com/maps/api/js` with the API key and an
//! `initMap` callback, which centres the map and drops a marker.
//!
//! # Credentials
//!
//! Requires a Google Maps Platform key with the Maps JavaScript API enabled,
//! looked up as `GOOGLE_MAPS_API_KEY`.

use crate::coord::Coordinate;
use crate::provider::{MapTemplate, ProviderId};

/// Google Maps template.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoogleMapsTemplate;

impl MapTemplate for GoogleMapsTemplate {
    fn id(&self) -> ProviderId {
        ProviderId::Google
    }

    fn render(&self, coord: Coordinate, credential: &str, container_id: &str) -> String {
        format!(
            "
<script>
    function initMap() {{
      var location = {{lat: {lat}, lng: {lng}}};
      var map = new google.maps.Map(document.getElementById('{container}'), {{
        zoom: 15,
        center: location
      }});
      var marker = new google.maps.Marker({{
        position: location,
        map: map
      }});
    }}
</script>
<script src='https://maps.googleapis.com/maps/api/js?key={key}&callback=initMap' async defer></script>
",
            lat = coord.lat(),
            lng = coord.lng(),
            container = container_id,
            key = credential,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_id() {
        assert_eq!(GoogleMapsTemplate.id(), ProviderId::Google);
    }

    #[test]
    fn test_location_literal() {
        let html = GoogleMapsTemplate.render(Coordinate::new(35.6892, 51.389), "k", "map");
        assert!(html.contains("var location = {lat: 35.6892, lng: 51.389};"));
        assert!(html.contains("new google.maps.Map(document.getElementById('map')"));
        assert!(html.contains("new google.maps.Marker"));
    }

    #[test]
    fn test_infinite_location_is_js_literal() {
        let html = GoogleMapsTemplate.render(Coordinate::new(f64::INFINITY, -1.5), "k", "map");
        assert!(html.contains("{lat: Infinity, lng: -1.5}"));
        assert!(!html.contains("inf,"));
    }

    #[test]
    fn test_key_in_script_url() {
        let html = GoogleMapsTemplate.render(Coordinate::new(0.0, 0.0), "ABC123", "map");
        assert!(html.contains("js?key=ABC123&callback=initMap"));
    }

    #[test]
    fn test_custom_container() {
        let html = GoogleMapsTemplate.render(Coordinate::new(0.0, 0.0), "k", "office-map");
        assert!(html.contains("document.getElementById('office-map')"));
    }
}
