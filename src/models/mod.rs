//! Domain model types for route planning.
//!
//! Provides the core data: coordinates and named points, routes as ordered
//! sequences of graph indices, and the price configuration used for costing.

mod coordinates;
mod price;
mod route;

pub use coordinates::{Coordinates, Point};
pub use price::{PriceConfig, DEFAULT_CURRENCY, DEFAULT_PRICE_PER_UNIT};
pub use route::Route;
