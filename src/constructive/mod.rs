//! Constructive heuristics for building an initial route.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor path construction, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::nearest_neighbor;
