//! Distance function and distance matrix.
//!
//! Provides the haversine great-circle metric and a dense matrix of
//! precomputed pairwise distances.

mod haversine;
mod matrix;

pub use haversine::{haversine_km, DistanceFunction, Haversine, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
