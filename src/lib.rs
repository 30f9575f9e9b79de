//! # geo-route
//!
//! Plans a low-cost visiting order over a selection of named geographic
//! points. Distances are great-circle (haversine) kilometers; the route is an
//! open path built by nearest-neighbor and improved by 2-opt, then priced leg
//! by leg.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Coordinates, Point, Route, PriceConfig)
//! - [`distance`] — Haversine distance function and dense distance matrix
//! - [`graph`] — Complete graph over a selected point set
//! - [`catalog`] — Named point table, accent-insensitive lookup, selection
//! - [`constructive`] — Nearest-neighbor route construction
//! - [`local_search`] — 2-opt route improvement
//! - [`planner`] — Route builder and end-to-end planning requests
//! - [`evaluation`] — Per-leg distance and cost reports
//! - [`error`] — Error type shared by every fallible operation

pub mod catalog;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod graph;
pub mod local_search;
pub mod models;
pub mod planner;

pub use error::{Error, Result};
