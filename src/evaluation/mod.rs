//! Route costing.
//!
//! Turns a route into per-leg distances and prices plus totals.

mod report;

pub use report::{CostReporter, LegReport, RouteReport};
