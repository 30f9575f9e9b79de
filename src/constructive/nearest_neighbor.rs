//! Nearest-neighbor constructive heuristic.
//!
//! Builds a path greedily: starting from the given point, always move to the
//! nearest unvisited point. The path does not return to its start.
//!
//! # Complexity
//!
//! O(n²) where n = number of points.
//!
//! # Tie-breaking
//!
//! When several unvisited points are equally close, the one with the lowest
//! graph index (earliest in the caller's selection) is chosen, so results are
//! reproducible.

use tracing::trace;

use crate::graph::PointGraph;
use crate::models::Route;

/// Constructs a route over every point of `graph` using the nearest-neighbor heuristic.
///
/// # Panics
///
/// Panics if `start` is not a valid index into `graph`.
///
/// # Examples
///
/// ```
/// use geo_route::catalog::Catalog;
/// use geo_route::constructive::nearest_neighbor;
/// use geo_route::graph::PointGraph;
///
/// let points = Catalog::latam().select(&["Bogota", "Lima", "Medellin"]).unwrap();
/// let graph = PointGraph::build(points).unwrap();
///
/// let route = nearest_neighbor(&graph, 0);
/// assert_eq!(graph.names(&route), vec!["Bogota", "Medellin", "Lima"]);
/// ```
pub fn nearest_neighbor(graph: &PointGraph, start: usize) -> Route {
    let n = graph.len();
    assert!(start < n, "start index {start} out of bounds for {n} points");

    let mut unvisited: Vec<usize> = (0..n).filter(|&i| i != start).collect();
    let mut stops = Vec::with_capacity(n);
    stops.push(start);
    let mut current = start;

    while let Some(next) = graph.matrix().nearest_neighbor(current, &unvisited) {
        trace!(from = current, to = next, distance = graph.weight(current, next), "nearest");
        unvisited.retain(|&i| i != next);
        stops.push(next);
        current = next;
    }

    Route::new(stops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceFunction;
    use crate::models::{Coordinates, Point};

    /// Distance along the equator in degrees of longitude.
    struct Longitude;

    impl DistanceFunction for Longitude {
        fn distance(&self, from: Coordinates, to: Coordinates) -> f64 {
            (from.longitude() - to.longitude()).abs()
        }
    }

    fn line(longitudes: &[f64]) -> PointGraph {
        let points = longitudes
            .iter()
            .enumerate()
            .map(|(i, &lng)| Point::new(format!("p{i}"), Coordinates::new(0.0, lng).expect("valid")))
            .collect();
        PointGraph::build_with(points, &Longitude).expect("valid")
    }

    #[test]
    fn test_nn_visits_in_line_order() {
        let graph = line(&[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(nearest_neighbor(&graph, 0).stops(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        // from 0: point 2 is at distance 1, point 1 at distance 10
        let graph = line(&[0.0, 10.0, 1.0]);
        assert_eq!(nearest_neighbor(&graph, 0).stops(), &[0, 2, 1]);
    }

    #[test]
    fn test_nn_from_middle_start() {
        let graph = line(&[0.0, 1.0, 2.0, 5.0]);
        // from 2: 1 (1.0) then 0 (1.0) then 3 (5.0)
        assert_eq!(nearest_neighbor(&graph, 2).stops(), &[2, 1, 0, 3]);
    }

    #[test]
    fn test_nn_tie_prefers_lower_index() {
        // points 1 and 2 are both 1.0 away from the start
        let graph = line(&[0.0, 1.0, -1.0]);
        assert_eq!(nearest_neighbor(&graph, 0).stops(), &[0, 1, 2]);
        let graph = line(&[0.0, -1.0, 1.0]);
        assert_eq!(nearest_neighbor(&graph, 0).stops(), &[0, 1, 2]);
    }

    #[test]
    fn test_nn_two_points() {
        let graph = line(&[0.0, 4.0]);
        assert_eq!(nearest_neighbor(&graph, 1).stops(), &[1, 0]);
    }

    #[test]
    #[should_panic]
    fn test_nn_invalid_start() {
        let graph = line(&[0.0, 4.0]);
        nearest_neighbor(&graph, 2);
    }
}
