//! Bing Maps V8 web control template.
//!
//! The map control script is loaded with `callback=GetMap`; the inline
//! `GetMap` function builds the map and pins the centre. Bing takes a CSS
//! selector for the container, hence the leading `#`.

use crate::coord::Coordinate;
use crate::provider::{MapTemplate, ProviderId};

/// Bing Maps template.
#[derive(Debug, Default, Clone, Copy)]
pub struct BingMapsTemplate;

impl MapTemplate for BingMapsTemplate {
    fn id(&self) -> ProviderId {
        ProviderId::Bing
    }

    fn render(&self, coord: Coordinate, credential: &str, container_id: &str) -> String {
        format!(
            "
<script type='text/javascript' src='https://www.bing.com/api/maps/mapcontrol?callback=GetMap&key={key}' async defer></script>
<script>
    function GetMap() {{
        var map = new Microsoft.Maps.Map('#{container}', {{
            center: new Microsoft.Maps.Location({lat}, {lng}),
            zoom: 15
        }});
        var center = map.getCenter();
        var pin = new Microsoft.Maps.Pushpin(center, {{
            title: 'Location'
        }});
        map.entities.push(pin);
    }}
</script>
",
            key = credential,
            container = container_id,
            lat = coord.lat(),
            lng = coord.lng(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_and_selector() {
        let html = BingMapsTemplate.render(Coordinate::new(47.6062, -122.3321), "bk", "map");
        assert!(html.contains("new Microsoft.Maps.Map('#map', {"));
        assert!(html.contains("new Microsoft.Maps.Location(47.6062, -122.3321)"));
    }

    #[test]
    fn test_key_in_callback_url() {
        let html = BingMapsTemplate.render(Coordinate::new(0.0, 0.0), "bk", "map");
        assert!(html.contains("mapcontrol?callback=GetMap&key=bk'"));
    }
}
