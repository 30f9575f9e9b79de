//! Complete graph over a selected point set.

use std::collections::HashSet;

use tracing::debug;

use crate::distance::{DistanceFunction, DistanceMatrix, Haversine};
use crate::error::{Error, Result};
use crate::models::{Point, Route};

/// A fixed set of named points and the distance between every ordered pair.
///
/// Points are addressed by their index in the order they were given; index 0
/// is the first point of the selection. The graph is built once per request
/// and never mutated.
///
/// # Examples
///
/// ```
/// use geo_route::graph::PointGraph;
/// use geo_route::models::{Coordinates, Point};
///
/// let graph = PointGraph::build(vec![
///     Point::new("Bogota", Coordinates::new(4.7110, -74.0721).unwrap()),
///     Point::new("Cali", Coordinates::new(3.4516, -76.5320).unwrap()),
/// ])
/// .unwrap();
/// assert_eq!(graph.len(), 2);
/// assert_eq!(graph.index_of("Cali"), Some(1));
/// assert_eq!(graph.weight(0, 1), graph.weight(1, 0));
/// ```
#[derive(Debug, Clone)]
pub struct PointGraph {
    points: Vec<Point>,
    matrix: DistanceMatrix,
}

impl PointGraph {
    /// Builds the graph using great-circle distance.
    pub fn build(points: Vec<Point>) -> Result<Self> {
        Self::build_with(points, &Haversine)
    }

    /// Builds the graph using the given distance function.
    ///
    /// Fails with [`Error::InsufficientPoints`] for fewer than two points and
    /// with [`Error::DuplicatePoint`] if a name appears twice. Debug builds
    /// assert that `metric` is symmetric.
    pub fn build_with<D: DistanceFunction + ?Sized>(points: Vec<Point>, metric: &D) -> Result<Self> {
        {
            let mut seen = HashSet::with_capacity(points.len());
            if let Some(dup) = points.iter().find(|&p| !seen.insert(p.name())) {
                return Err(Error::DuplicatePoint {
                    name: dup.name().to_string(),
                });
            }
        }
        if points.len() < 2 {
            return Err(Error::InsufficientPoints {
                found: points.len(),
            });
        }

        let locations: Vec<_> = points.iter().map(Point::coordinates).collect();
        let matrix = DistanceMatrix::from_coordinates(&locations, metric);
        debug_assert!(matrix.is_symmetric(1e-9), "distance function is not symmetric");
        debug!(points = points.len(), pairs = matrix.entry_count(), "built point graph");

        Ok(Self { points, matrix })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; a graph holds at least two points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in index order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Name of the point at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn name(&self, index: usize) -> &str {
        self.points[index].name()
    }

    /// Index of the point with exactly this name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.points.iter().position(|p| p.name() == name)
    }

    /// Distance from `from` to `to`; infinite for self-pairs or unknown indices.
    pub fn weight(&self, from: usize, to: usize) -> f64 {
        self.matrix.weight(from, to)
    }

    /// The underlying distance matrix.
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Sum of leg distances along `route`; zero for routes with fewer than two stops.
    pub fn path_length(&self, route: &Route) -> f64 {
        route.legs().map(|(from, to)| self.weight(from, to)).sum()
    }

    /// Point names along `route`.
    pub fn names(&self, route: &Route) -> Vec<&str> {
        route.stops().iter().map(|&i| self.name(i)).collect()
    }
}
