//! Geographic coordinates and named points.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A latitude/longitude pair in degrees.
///
/// Latitude lies in `[-90, 90]` and longitude in `[-180, 180]`.
///
/// # Examples
///
/// ```
/// use geo_route::models::Coordinates;
///
/// let bogota = Coordinates::new(4.7110, -74.0721).unwrap();
/// assert_eq!(bogota.latitude(), 4.7110);
/// assert!(Coordinates::new(91.0, 0.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinates")]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Creates a coordinate pair.
    ///
    /// Returns `None` if either value is non-finite or out of range.
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return None;
        }
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return None;
        }
        Some(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Unchecked wire form; deserialization goes through [`Coordinates::new`].
#[derive(Deserialize)]
struct RawCoordinates {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinates> for Coordinates {
    type Error = Error;

    fn try_from(raw: RawCoordinates) -> Result<Self, Self::Error> {
        Coordinates::new(raw.latitude, raw.longitude).ok_or(Error::InvalidCoordinates {
            latitude: raw.latitude,
            longitude: raw.longitude,
        })
    }
}

/// A named location from the catalog.
///
/// The name is the canonical catalog spelling; matching user input against it
/// is done by [`crate::catalog::Catalog::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    name: String,
    coordinates: Coordinates,
}

impl Point {
    /// Creates a point.
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }

    /// Canonical name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location of the point.
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_valid() {
        let c = Coordinates::new(-34.6037, -58.3816).expect("valid");
        assert_eq!(c.latitude(), -34.6037);
        assert_eq!(c.longitude(), -58.3816);
    }

    #[test]
    fn test_coordinates_bounds_inclusive() {
        assert!(Coordinates::new(90.0, 180.0).is_some());
        assert!(Coordinates::new(-90.0, -180.0).is_some());
    }

    #[test]
    fn test_coordinates_invalid() {
        assert!(Coordinates::new(90.1, 0.0).is_none());
        assert!(Coordinates::new(0.0, -180.5).is_none());
        assert!(Coordinates::new(f64::NAN, 0.0).is_none());
        assert!(Coordinates::new(0.0, f64::INFINITY).is_none());
    }

    #[test]
    fn test_deserialize_validates_range() {
        let c: Coordinates =
            serde_json::from_str(r#"{"latitude": -0.1807, "longitude": -78.4678}"#).expect("valid");
        assert_eq!(c, Coordinates::new(-0.1807, -78.4678).expect("valid"));
        let err = serde_json::from_str::<Coordinates>(r#"{"latitude": 120.0, "longitude": 0.0}"#)
            .unwrap_err();
        assert!(err.to_string().contains("invalid coordinates"));
    }

    #[test]
    fn test_point_new() {
        let p = Point::new("Lima", Coordinates::new(-12.0464, -77.0428).expect("valid"));
        assert_eq!(p.name(), "Lima");
        assert_eq!(p.coordinates().longitude(), -77.0428);
    }
}
