//! Geographic point type.

use serde::{Deserialize, Serialize};

/// Mean Earth radius used for great-circle distances, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6372.795;

/// A location given as latitude and longitude in decimal degrees.
///
/// # Examples
///
/// ```
/// use geo_aco::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(0.0, 1.0);
/// assert!((a.distance_to(&b) - 111.226).abs() < 1e-3);
/// assert_eq!(a.distance_to(&a), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    latitude: f64,
    longitude: f64,
}

impl Point {
    /// Creates a point from degree coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another point, in kilometres.
    ///
    /// Uses the atan2 form of the spherical law, which stays accurate for
    /// both very short and near-antipodal separations.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let lat_a = self.latitude.to_radians();
        let lat_b = other.latitude.to_radians();
        let delta = (other.longitude - self.longitude).to_radians();

        let (sin_a, cos_a) = lat_a.sin_cos();
        let (sin_b, cos_b) = lat_b.sin_cos();
        let (sin_d, cos_d) = delta.sin_cos();

        let east = cos_b * sin_d;
        let north = cos_a * sin_b - sin_a * cos_b * cos_d;
        let y = (east * east + north * north).sqrt();
        let x = sin_a * sin_b + cos_a * cos_b * cos_d;

        y.atan2(x) * EARTH_RADIUS_KM
    }
}

impl From<(f64, f64)> for Point {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}
