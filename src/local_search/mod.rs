//! Local search operators for improving a route.
//!
//! - [`two_opt`] — Segment reversal with fixed endpoints

mod two_opt;

pub use two_opt::{two_opt, two_opt_improve, TwoOptOptions, TwoOptStats};
