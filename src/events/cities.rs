//! Reference cities for the worldwide iftar board.
//!
//! The table spans every inhabited band of longitude so that, for most of the
//! year, some city is always breaking its fast, about to, or just has.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::solar::GeoPoint;

/// A named location monitored on the iftar board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: Cow<'static, str>,
    pub latitude: f64,
    pub longitude: f64,
}

impl City {
    pub const fn new(name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self {
            name: Cow::Borrowed(name),
            latitude,
            longitude,
        }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Built-in board, ordered east to west.
pub static REFERENCE_CITIES: &[City] = &[
    City::new("Auckland", -36.85, 174.76),
    City::new("Sydney", -33.87, 151.21),
    City::new("Jakarta", -6.21, 106.85),
    City::new("Kuala Lumpur", 3.14, 101.69),
    City::new("Dhaka", 23.81, 90.41),
    City::new("Delhi", 28.61, 77.21),
    City::new("Karachi", 24.86, 67.01),
    City::new("Dubai", 25.2, 55.27),
    City::new("Riyadh", 24.63, 46.72),
    City::new("Mecca", 21.39, 39.83),
    City::new("Cairo", 30.04, 31.24),
    City::new("Istanbul", 41.01, 28.98),
    City::new("Lagos", 6.52, 3.39),
    City::new("Paris", 48.86, 2.35),
    City::new("London", 51.51, -0.12),
    City::new("Casablanca", 33.57, -7.59),
    City::new("New York", 40.71, -74.01),
    City::new("Toronto", 43.65, -79.38),
    City::new("Chicago", 41.88, -87.63),
    City::new("Houston", 29.76, -95.37),
    City::new("Los Angeles", 34.05, -118.24),
    City::new("Honolulu", 21.31, -157.86),
];
