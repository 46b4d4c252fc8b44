//! Geographic coordinate value type
//!
//! Provides the `Coordinate` pair passed to every map template and the
//! textual forms used to fill template slots.
//!
//! # Slot Ordering
//!
//! Most providers expect `[latitude, longitude]` arrays. Map.ir and Mapbox
//! follow the GeoJSON convention and expect `[longitude, latitude]`. Both
//! forms are available here so templates never reorder numbers by hand.

use std::fmt;

/// A latitude/longitude pair in decimal degrees.
///
/// Values are carried verbatim: no range checks are applied, and the
/// textual form is Rust's shortest round-trip `f64` representation
/// (`51.3890` renders as `51.389`). Non-finite values are written as the
/// JavaScript literals `NaN`, `Infinity` and `-Infinity`. Every slot of a
/// template uses the same representation, so a number always appears
/// identically in the output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in degrees (conventionally -90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (conventionally -180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude.
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude as a JavaScript number literal.
    pub fn lat(&self) -> JsNumber {
        JsNumber(self.latitude)
    }

    /// Longitude as a JavaScript number literal.
    pub fn lng(&self) -> JsNumber {
        JsNumber(self.longitude)
    }

    /// Formats the pair as a `[lat, lng]` JavaScript array.
    pub fn lat_lng_array(&self) -> String {
        format!("[{}, {}]", self.lat(), self.lng())
    }

    /// Formats the pair as a `[lng, lat]` JavaScript array (GeoJSON order).
    pub fn lng_lat_array(&self) -> String {
        format!("[{}, {}]", self.lng(), self.lat())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat(), self.lng())
    }
}

/// An `f64` displayed as a JavaScript number literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsNumber(pub f64);

impl fmt::Display for JsNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            f.write_str("NaN")
        } else if v.is_infinite() {
            f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" })
        } else {
            write!(f, "{}", v)
        }
    }
}
