//! Dense distance matrix.

use crate::models::Coordinates;

use super::DistanceFunction;

/// A dense n×n distance matrix stored in row-major order.
///
/// Off-diagonal entries hold the distance between two distinct locations.
/// Diagonal entries and any out-of-range pair read as [`f64::INFINITY`], so a
/// self-pair can never look like a cheap move.
///
/// # Examples
///
/// ```
/// use geo_route::distance::{DistanceMatrix, Haversine};
/// use geo_route::models::Coordinates;
///
/// let locations = vec![
///     Coordinates::new(0.0, 0.0).unwrap(),
///     Coordinates::new(0.0, 1.0).unwrap(),
///     Coordinates::new(0.0, 2.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_coordinates(&locations, &Haversine);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.weight(0, 1), dm.weight(1, 0));
/// assert!(dm.weight(1, 1).is_infinite());
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a matrix of the given size with every entry unset (infinite).
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![f64::INFINITY; size * size],
            size,
        }
    }

    /// Computes every ordered off-diagonal pair with the given distance function.
    pub fn from_coordinates<D: DistanceFunction + ?Sized>(
        locations: &[Coordinates],
        metric: &D,
    ) -> Self {
        let n = locations.len();
        let mut dm = Self::new(n);
        for (i, &from) in locations.iter().enumerate() {
            for (j, &to) in locations.iter().enumerate() {
                if i != j {
                    dm.set(i, j, metric.distance(from, to));
                }
            }
        }
        dm
    }

    /// Returns the distance from `from` to `to`.
    ///
    /// Self-pairs and indices outside the matrix yield [`f64::INFINITY`].
    pub fn weight(&self, from: usize, to: usize) -> f64 {
        if from == to || from >= self.size || to >= self.size {
            return f64::INFINITY;
        }
        self.data[from * self.size + to]
    }

    /// Sets the distance from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        assert!(from < self.size && to < self.size, "index out of bounds");
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of ordered pairs holding a finite distance.
    pub fn entry_count(&self) -> usize {
        (0..self.size)
            .flat_map(|i| (0..self.size).map(move |j| (i, j)))
            .filter(|&(i, j)| self.weight(i, j).is_finite())
            .count()
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.weight(i, j) - self.weight(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the candidate closest to `from`.
    ///
    /// Ties go to the candidate listed first. Returns `None` if `candidates`
    /// is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.weight(from, a).total_cmp(&self.weight(from, b)))
    }
}
