//! Yandex Maps JS API 2.1 template.

use crate::coord::Coordinate;
use crate::provider::{MapTemplate, ProviderId};

/// Yandex Maps template.
#[derive(Debug, Default, Clone, Copy)]
pub struct YandexMapsTemplate;

impl MapTemplate for YandexMapsTemplate {
    fn id(&self) -> ProviderId {
        ProviderId::Yandex
    }

    fn render(&self, coord: Coordinate, credential: &str, container_id: &str) -> String {
        format!(
            "
<script src='https://api-maps.yandex.ru/2.1/?apikey={key}&lang=en_US' type='text/javascript'></script>
<script>
    ymaps.ready(init);
    function init(){{
        var myMap = new ymaps.Map('{container}', {{
            center: {center},
            zoom: 15
        }});
        var myPlacemark = new ymaps.Placemark({center}, {{
            hintContent: 'Location',
            balloonContent: 'Selected Location'
        }});
        myMap.geoObjects.add(myPlacemark);
    }}
</script>
",
            key = credential,
            container = container_id,
            center = coord.lat_lng_array(),
        )
    }
}
