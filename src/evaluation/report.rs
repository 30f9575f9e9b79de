//! Per-leg distance and cost reports.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::PointGraph;
use crate::models::{PriceConfig, Route};

/// One leg of a route: a move between two consecutive stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegReport {
    /// Name of the departure point.
    pub from: String,
    /// Name of the arrival point.
    pub to: String,
    /// Leg distance in kilometers.
    pub distance: f64,
    /// Leg distance times the price per unit.
    pub cost: f64,
}

/// Distance and cost of a route, leg by leg, with totals.
///
/// Derived on demand and never stored. The [`fmt::Display`] output has one
/// line per leg followed by a `TOTAL` line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteReport {
    /// Currency label the costs are expressed in.
    pub currency: String,
    /// Legs in route order.
    pub legs: Vec<LegReport>,
    /// Sum of leg distances.
    pub total_distance: f64,
    /// Sum of leg costs.
    pub total_cost: f64,
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for leg in &self.legs {
            writeln!(
                f,
                "{} -> {}: {:.2} km | {:.2} {}",
                leg.from, leg.to, leg.distance, leg.cost, self.currency
            )?;
        }
        write!(
            f,
            "TOTAL: {:.2} km | {:.2} {}",
            self.total_distance, self.total_cost, self.currency
        )
    }
}

/// Computes [`RouteReport`]s under a fixed price configuration.
///
/// # Examples
///
/// ```
/// use geo_route::catalog::Catalog;
/// use geo_route::evaluation::CostReporter;
/// use geo_route::graph::PointGraph;
/// use geo_route::models::{PriceConfig, Route};
///
/// let points = Catalog::latam().select(&["Bogota", "Medellin", "Cali"]).unwrap();
/// let graph = PointGraph::build(points).unwrap();
/// let reporter = CostReporter::new(PriceConfig::new("USD", 2.0).unwrap());
///
/// let report = reporter.report(&graph, &Route::new(vec![0, 1, 2]));
/// assert_eq!(report.legs.len(), 2);
/// assert_eq!(report.legs[0].from, "Bogota");
/// assert!((report.total_cost - 2.0 * report.total_distance).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CostReporter {
    price: PriceConfig,
}

impl CostReporter {
    /// Creates a reporter for the given prices.
    pub fn new(price: PriceConfig) -> Self {
        Self { price }
    }

    /// Reports every leg of `route` and the totals.
    ///
    /// A route with fewer than two stops has no legs and zero totals.
    pub fn report(&self, graph: &PointGraph, route: &Route) -> RouteReport {
        let mut legs = Vec::with_capacity(route.len().saturating_sub(1));
        let mut total_distance = 0.0;
        let mut total_cost = 0.0;

        for (from, to) in route.legs() {
            let distance = graph.weight(from, to);
            let cost = self.price.cost(distance);
            total_distance += distance;
            total_cost += cost;
            legs.push(LegReport {
                from: graph.name(from).to_string(),
                to: graph.name(to).to_string(),
                distance,
                cost,
            });
        }

        RouteReport {
            currency: self.price.currency().to_string(),
            legs,
            total_distance,
            total_cost,
        }
    }
}
