//! Route type.

use serde::{Deserialize, Serialize};

/// An ordered visiting sequence over the points of a [`crate::graph::PointGraph`].
///
/// Stops are graph indices. A route is an open path: it starts at its first
/// stop and ends at its last, with no closing leg back to the start. Routes
/// are snapshots; operations that change the order return a new route.
///
/// # Examples
///
/// ```
/// use geo_route::models::Route;
///
/// let route = Route::new(vec![0, 2, 1, 3]);
/// assert_eq!(route.len(), 4);
/// assert_eq!(route.first(), Some(0));
/// assert_eq!(route.legs().collect::<Vec<_>>(), vec![(0, 2), (2, 1), (1, 3)]);
///
/// let reversed = route.with_reversed(1, 3);
/// assert_eq!(reversed.stops(), &[0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    stops: Vec<usize>,
}

impl Route {
    /// Creates a route from an ordered list of graph indices.
    pub fn new(stops: Vec<usize>) -> Self {
        Self { stops }
    }

    /// Returns the stops in visit order.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if this route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Starting stop.
    pub fn first(&self) -> Option<usize> {
        self.stops.first().copied()
    }

    /// Final stop.
    pub fn last(&self) -> Option<usize> {
        self.stops.last().copied()
    }

    /// Consecutive `(from, to)` pairs in visit order.
    pub fn legs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.stops.windows(2).map(|w| (w[0], w[1]))
    }

    /// Returns a copy of this route with positions `[i, j)` reversed.
    ///
    /// # Panics
    ///
    /// Panics if `i > j` or `j > len()`.
    pub fn with_reversed(&self, i: usize, j: usize) -> Self {
        let mut stops = self.stops.clone();
        stops[i..j].reverse();
        Self { stops }
    }
}
