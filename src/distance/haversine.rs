//! Great-circle distance on a spherical Earth.

use crate::models::Coordinates;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Maps two coordinates to a non-negative travel cost.
///
/// Implementations must be symmetric and return zero for identical inputs.
pub trait DistanceFunction {
    fn distance(&self, from: Coordinates, to: Coordinates) -> f64;
}

/// Haversine great-circle distance in kilometers.
///
/// # Examples
///
/// ```
/// use geo_route::distance::{DistanceFunction, Haversine};
/// use geo_route::models::Coordinates;
///
/// let bogota = Coordinates::new(4.7110, -74.0721).unwrap();
/// let medellin = Coordinates::new(6.2442, -75.5812).unwrap();
/// let d = Haversine.distance(bogota, medellin);
/// assert!(d > 230.0 && d < 250.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl DistanceFunction for Haversine {
    fn distance(&self, from: Coordinates, to: Coordinates) -> f64 {
        haversine_km(from, to)
    }
}

/// Haversine distance between two coordinates in kilometers.
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let lat1_rad = from.latitude().to_radians();
    let lat2_rad = to.latitude().to_radians();
    let delta_lat = (to.latitude() - from.latitude()).to_radians();
    let delta_lng = (to.longitude() - from.longitude()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // rounding can push `a` just past 1 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(lat: f64, lng: f64) -> Coordinates {
        Coordinates::new(lat, lng).expect("valid")
    }

    #[test]
    fn test_haversine_same_point() {
        let dist = haversine_km(c(4.7110, -74.0721), c(4.7110, -74.0721));
        assert!(dist.abs() < 1e-9, "same point should have ~0 distance");
    }

    #[test]
    fn test_haversine_known_distance() {
        // Buenos Aires to Montevideo is roughly 200 km
        let dist = haversine_km(c(-34.6037, -58.3816), c(-34.9011, -56.1645));
        assert!(dist > 190.0 && dist < 215.0, "got {}", dist);
    }

    #[test]
    fn test_haversine_symmetric() {
        let a = c(19.4326, -99.1332);
        let b = c(-33.4489, -70.6693);
        assert_eq!(haversine_km(a, b), haversine_km(b, a));
    }

    #[test]
    fn test_haversine_antipodal() {
        let dist = haversine_km(c(0.0, 0.0), c(0.0, 180.0));
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((dist - half_circumference).abs() < 1e-6);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let dist = Haversine.distance(c(0.0, 0.0), c(1.0, 0.0));
        let expected = EARTH_RADIUS_KM * 1f64.to_radians();
        assert!((dist - expected).abs() < 1e-9);
    }
}
