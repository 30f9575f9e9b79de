//! Catalog of named points and selection of a point set from user input.
//!
//! - [`Catalog`] — read-only table of named coordinates with accent- and
//!   case-insensitive lookup
//! - [`Catalog::latam`] — built-in table of 28 Latin American cities
//! - [`normalize_name`], [`parse_selection`] — input helpers

mod latam;
mod normalize;

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Coordinates, Point};

pub use normalize::{normalize_name, parse_selection};

/// An immutable table of named points.
///
/// Lookups through [`Catalog::resolve`] ignore case, surrounding whitespace
/// and accents, and return the entry under its canonical name.
///
/// # Examples
///
/// ```
/// use geo_route::catalog::Catalog;
///
/// let catalog = Catalog::latam();
/// assert_eq!(catalog.resolve("bogotá").unwrap().name(), "Bogota");
/// assert!(catalog.resolve("Atlantis").is_err());
///
/// let selection = catalog.select(&["Lima", "quito", "LIMA"]).unwrap();
/// assert_eq!(selection.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    points: Vec<Point>,
    by_key: HashMap<String, usize>,
}

impl Catalog {
    /// Creates a catalog from points.
    ///
    /// Fails with [`Error::DuplicatePoint`] if two names normalize to the same key.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        let mut by_key = HashMap::with_capacity(points.len());
        for (i, p) in points.iter().enumerate() {
            if by_key.insert(normalize_name(p.name()), i).is_some() {
                return Err(Error::DuplicatePoint {
                    name: p.name().to_string(),
                });
            }
        }
        Ok(Self { points, by_key })
    }

    /// Creates a catalog from `(name, latitude, longitude)` entries.
    ///
    /// Fails with [`Error::InvalidCoordinates`] for out-of-range coordinates.
    pub fn from_entries(entries: &[(&str, f64, f64)]) -> Result<Self> {
        let points = entries
            .iter()
            .map(|&(name, latitude, longitude)| {
                Coordinates::new(latitude, longitude)
                    .map(|c| Point::new(name, c))
                    .ok_or(Error::InvalidCoordinates {
                        latitude,
                        longitude,
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(points)
    }

    /// The built-in Latin American city table, constructed on first use.
    pub fn latam() -> &'static Catalog {
        static LATAM: OnceLock<Catalog> = OnceLock::new();
        LATAM.get_or_init(|| {
            // every built-in entry is in range and uniquely named; see test_latam_catalog
            Catalog::from_entries(&latam::LATAM_CITIES).expect("built-in catalog is valid")
        })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Canonical names in lexicographic order.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.points.iter().map(Point::name).collect();
        names.sort_unstable();
        names
    }

    /// Looks up a point by name, ignoring case, accents and surrounding whitespace.
    pub fn resolve(&self, name: &str) -> Result<&Point> {
        self.by_key
            .get(&normalize_name(name))
            .map(|&i| &self.points[i])
            .ok_or_else(|| Error::unknown_point(name.trim()))
    }

    /// Resolves a selection into a point set.
    ///
    /// Names are resolved in order and the first unknown one rejects the whole
    /// selection. Repeated points keep their first position. The first point of
    /// the result is the route's start.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Point>> {
        let mut selected: Vec<Point> = Vec::with_capacity(names.len());
        for name in names {
            let point = self.resolve(name.as_ref())?;
            if selected.iter().all(|p| p.name() != point.name()) {
                selected.push(point.clone());
            }
        }
        if selected.len() < 2 {
            return Err(Error::InsufficientPoints {
                found: selected.len(),
            });
        }
        debug!(
            requested = names.len(),
            selected = selected.len(),
            start = selected[0].name(),
            "resolved selection"
        );
        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latam_catalog() {
        let catalog = Catalog::latam();
        assert!(Catalog::from_entries(&latam::LATAM_CITIES).is_ok());
        assert_eq!(catalog.len(), 28);
        let bogota = catalog.resolve("Bogota").expect("known");
        assert_eq!(bogota.coordinates().latitude(), 4.7110);
        assert_eq!(bogota.coordinates().longitude(), -74.0721);
    }

    #[test]
    fn test_latam_is_shared() {
        assert!(std::ptr::eq(Catalog::latam(), Catalog::latam()));
    }

    #[test]
    fn test_resolve_insensitive() {
        let catalog = Catalog::latam();
        assert_eq!(catalog.resolve("  MEDELLÍN ").expect("known").name(), "Medellin");
        assert_eq!(catalog.resolve("saopaulo").expect("known").name(), "SaoPaulo");
        assert_eq!(catalog.resolve("Asunción").expect("known").name(), "Asuncion");
    }

    #[test]
    fn test_resolve_unknown() {
        let err = Catalog::latam().resolve(" Atlantis ").unwrap_err();
        assert_eq!(err, Error::unknown_point("Atlantis"));
    }

    #[test]
    fn test_select_keeps_order_and_dedupes() {
        let selection = Catalog::latam()
            .select(&["cali", "Bogota", "Cali", "Quito"])
            .expect("valid");
        let names: Vec<_> = selection.iter().map(Point::name).collect();
        assert_eq!(names, vec!["Cali", "Bogota", "Quito"]);
    }

    #[test]
    fn test_select_insufficient() {
        let catalog = Catalog::latam();
        assert_eq!(
            catalog.select(&["Lima"]).unwrap_err(),
            Error::InsufficientPoints { found: 1 }
        );
        assert_eq!(
            catalog.select(&["Lima", "lima"]).unwrap_err(),
            Error::InsufficientPoints { found: 1 }
        );
        let empty: [&str; 0] = [];
        assert_eq!(
            catalog.select(&empty).unwrap_err(),
            Error::InsufficientPoints { found: 0 }
        );
    }

    #[test]
    fn test_select_unknown_rejects_all() {
        let err = Catalog::latam()
            .select(&["Lima", "Atlantis", "Quito"])
            .unwrap_err();
        assert_eq!(err, Error::unknown_point("Atlantis"));
    }

    #[test]
    fn test_sorted_names() {
        let names = Catalog::latam().sorted_names();
        assert_eq!(names.first(), Some(&"Asuncion"));
        assert_eq!(names.last(), Some(&"Tegucigalpa"));
        assert!(names.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_custom_catalog_rejects_collisions() {
        let err = Catalog::from_entries(&[("Bogota", 4.7, -74.0), ("bogotá", 4.7, -74.0)])
            .unwrap_err();
        assert_eq!(err, Error::DuplicatePoint { name: "bogotá".to_string() });
    }

    #[test]
    fn test_custom_catalog_rejects_bad_coordinates() {
        let err = Catalog::from_entries(&[("Nowhere", 95.0, 0.0)]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidCoordinates {
                latitude: 95.0,
                longitude: 0.0
            }
        );
    }
}
