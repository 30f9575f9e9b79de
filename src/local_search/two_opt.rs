//! 2-opt improvement for open paths.
//!
//! # Algorithm
//!
//! The first and last stops stay in place. For every interior segment
//! `[i, j)` with `1 ≤ i`, `i + 2 ≤ j ≤ n - 1`, build the route with that
//! segment reversed and compute its full length. A candidate strictly shorter
//! than the current best replaces it immediately and the scan continues from
//! the next `(i, j)` against the new best. Passes repeat until one pass
//! accepts nothing.
//!
//! # Complexity
//!
//! O(n³) per pass (O(n²) candidates, O(n) length each). The number of passes
//! is unbounded unless [`TwoOptOptions::max_passes`] is set; each accepted
//! move strictly shortens the route, so the search always terminates.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::graph::PointGraph;
use crate::models::Route;

/// Limits for the 2-opt search.
///
/// The default runs to a local optimum with no cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TwoOptOptions {
    /// Stop after this many full passes even if the last one improved.
    pub max_passes: Option<usize>,
}

impl TwoOptOptions {
    /// Options with a pass cap.
    pub fn with_max_passes(max_passes: usize) -> Self {
        Self {
            max_passes: Some(max_passes),
        }
    }
}

/// What a 2-opt run did.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TwoOptStats {
    /// Full passes over all candidate segments.
    pub passes: usize,
    /// Accepted reversals.
    pub improvements: usize,
    /// `false` if the pass cap stopped the search before a pass found nothing.
    pub converged: bool,
    /// Length of the input route.
    pub initial_length: f64,
    /// Length of the returned route.
    pub final_length: f64,
}

/// Improves `route` to a 2-opt local optimum with no pass cap.
///
/// # Examples
///
/// ```
/// use geo_route::catalog::Catalog;
/// use geo_route::graph::PointGraph;
/// use geo_route::local_search::two_opt;
/// use geo_route::models::Route;
///
/// let points = Catalog::latam()
///     .select(&["Bogota", "Lima", "Medellin", "Quito", "Cali"])
///     .unwrap();
/// let graph = PointGraph::build(points).unwrap();
///
/// let zigzag = Route::new(vec![0, 1, 2, 3, 4]);
/// let improved = two_opt(&graph, &zigzag);
/// assert_eq!(improved.first(), Some(0));
/// assert_eq!(improved.last(), Some(4));
/// assert!(graph.path_length(&improved) < graph.path_length(&zigzag));
/// ```
pub fn two_opt(graph: &PointGraph, route: &Route) -> Route {
    two_opt_improve(graph, route, &TwoOptOptions::default()).0
}

/// Improves `route` with 2-opt under the given options.
///
/// Returns the best route found and statistics about the search.
pub fn two_opt_improve(
    graph: &PointGraph,
    route: &Route,
    options: &TwoOptOptions,
) -> (Route, TwoOptStats) {
    let n = route.len();
    let initial_length = graph.path_length(route);

    let mut best = route.clone();
    let mut best_length = initial_length;
    let mut passes = 0;
    let mut improvements = 0;
    let mut improved = true;

    while improved {
        if options.max_passes.is_some_and(|max| passes >= max) {
            break;
        }
        improved = false;
        passes += 1;

        for i in 1..n.saturating_sub(2) {
            for j in i + 2..n {
                let candidate = best.with_reversed(i, j);
                let length = graph.path_length(&candidate);
                if length < best_length {
                    trace!(i, j, from = best_length, to = length, "accepted reversal");
                    best = candidate;
                    best_length = length;
                    improved = true;
                    improvements += 1;
                }
            }
        }
    }

    let converged = !improved;
    if !converged {
        warn!(passes, length = best_length, "2-opt stopped at pass cap before converging");
    }
    debug!(
        passes,
        improvements,
        initial = initial_length,
        final_length = best_length,
        "2-opt finished"
    );

    let stats = TwoOptStats {
        passes,
        improvements,
        converged,
        initial_length,
        final_length: best_length,
    };
    (best, stats)
}
