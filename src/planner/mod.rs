//! Route building and end-to-end planning requests.
//!
//! A request moves through three stages: the point set is resolved into a
//! [`PointGraph`], a nearest-neighbor route is constructed, and that route is
//! improved with 2-opt. Both routes are kept so they can be compared.

use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::catalog::Catalog;
use crate::constructive::nearest_neighbor;
use crate::error::{Error, Result};
use crate::evaluation::{CostReporter, RouteReport};
use crate::graph::PointGraph;
use crate::local_search::{two_opt_improve, TwoOptOptions, TwoOptStats};
use crate::models::{PriceConfig, Route};

/// The initial and improved routes for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    /// Nearest-neighbor route.
    pub initial: Route,
    /// Route after 2-opt improvement.
    pub optimized: Route,
    /// Statistics from the 2-opt search.
    pub stats: TwoOptStats,
}

/// Builds routes over a [`PointGraph`].
///
/// # Examples
///
/// ```
/// use geo_route::catalog::Catalog;
/// use geo_route::graph::PointGraph;
/// use geo_route::planner::RouteBuilder;
///
/// let points = Catalog::latam()
///     .select(&["Lima", "Quito", "Bogota", "Santiago"])
///     .unwrap();
/// let graph = PointGraph::build(points).unwrap();
///
/// let plan = RouteBuilder::default().build(&graph, "Lima").unwrap();
/// assert_eq!(plan.initial.first(), graph.index_of("Lima"));
/// assert!(graph.path_length(&plan.optimized) <= graph.path_length(&plan.initial));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteBuilder {
    options: TwoOptOptions,
}

impl RouteBuilder {
    /// Creates a builder with the given 2-opt limits.
    pub fn new(options: TwoOptOptions) -> Self {
        Self { options }
    }

    /// Builds both routes starting from the point named `start`.
    ///
    /// Fails with [`Error::UnknownPoint`] if `start` is not in the graph.
    pub fn build(&self, graph: &PointGraph, start: &str) -> Result<RoutePlan> {
        let start_index = graph
            .index_of(start)
            .ok_or_else(|| Error::unknown_point(start))?;
        Ok(self.build_from(graph, start_index))
    }

    /// Builds both routes starting from graph index `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a valid index into `graph`.
    pub fn build_from(&self, graph: &PointGraph, start: usize) -> RoutePlan {
        let initial = nearest_neighbor(graph, start);
        debug!(
            route = ?graph.names(&initial),
            length = graph.path_length(&initial),
            "nearest-neighbor route"
        );
        let (optimized, stats) = two_opt_improve(graph, &initial, &self.options);
        RoutePlan {
            initial,
            optimized,
            stats,
        }
    }
}

/// Runs nearest-neighbor then 2-opt from `start` with no pass cap.
///
/// Returns `(initial, optimized)`.
pub fn compute_route(graph: &PointGraph, start: usize) -> (Route, Route) {
    let plan = RouteBuilder::default().build_from(graph, start);
    (plan.initial, plan.optimized)
}

/// A fully reported planning request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedTrip {
    /// Routes over the selected points.
    pub plan: RoutePlan,
    /// Names of the selected points in selection order.
    pub points: Vec<String>,
    /// Report for the nearest-neighbor route.
    pub initial_report: RouteReport,
    /// Report for the improved route.
    pub optimized_report: RouteReport,
}

/// Plans a route over `names`, starting at the first one.
///
/// Resolves the names against `catalog`, builds the graph, constructs and
/// improves the route, and reports both routes under `price`. Any invalid
/// input rejects the request before a route is built.
///
/// # Examples
///
/// ```
/// use geo_route::catalog::Catalog;
/// use geo_route::local_search::TwoOptOptions;
/// use geo_route::models::PriceConfig;
/// use geo_route::planner::plan_route;
///
/// let trip = plan_route(
///     Catalog::latam(),
///     &["Bogota", "Medellin", "Cali"],
///     PriceConfig::default(),
///     TwoOptOptions::default(),
/// )
/// .unwrap();
/// assert_eq!(trip.initial_report.legs[0].from, "Bogota");
/// assert_eq!(trip.optimized_report.legs.len(), 2);
/// ```
pub fn plan_route<S: AsRef<str>>(
    catalog: &Catalog,
    names: &[S],
    price: PriceConfig,
    options: TwoOptOptions,
) -> Result<PlannedTrip> {
    let span = info_span!("plan_route", requested = names.len());
    let _enter = span.enter();

    let points = catalog.select(names)?;
    let graph = PointGraph::build(points)?;
    let plan = RouteBuilder::new(options).build_from(&graph, 0);

    let reporter = CostReporter::new(price);
    let initial_report = reporter.report(&graph, &plan.initial);
    let optimized_report = reporter.report(&graph, &plan.optimized);
    info!(
        points = graph.len(),
        initial_km = initial_report.total_distance,
        optimized_km = optimized_report.total_distance,
        improvements = plan.stats.improvements,
        "planned route"
    );

    Ok(PlannedTrip {
        points: graph.points().iter().map(|p| p.name().to_string()).collect(),
        plan,
        initial_report,
        optimized_report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(names: &[&str]) -> PointGraph {
        PointGraph::build(Catalog::latam().select(names).expect("valid")).expect("valid")
    }

    #[test]
    fn test_build_unknown_start() {
        let g = graph(&["Lima", "Quito"]);
        assert_eq!(
            RouteBuilder::default().build(&g, "Caracas").unwrap_err(),
            Error::unknown_point("Caracas")
        );
    }

    #[test]
    fn test_build_from_named_start() {
        let g = graph(&["Lima", "Quito", "Caracas", "Bogota"]);
        let plan = RouteBuilder::default().build(&g, "Caracas").expect("valid");
        assert_eq!(plan.initial.first(), Some(2));
        assert_eq!(plan.optimized.first(), Some(2));
        assert_eq!(plan.initial.len(), 4);
    }

    #[test]
    fn test_compute_route_three_points_identical() {
        let g = graph(&["Bogota", "Medellin", "Cali"]);
        let (initial, optimized) = compute_route(&g, 0);
        assert_eq!(initial, optimized);
    }

    #[test]
    fn test_plan_route_reports_both() {
        let trip = plan_route(
            Catalog::latam(),
            &["Santiago", "Lima", "BuenosAires", "Quito", "Montevideo", "LaPaz"],
            PriceConfig::new("USD", 1.0).expect("valid"),
            TwoOptOptions::default(),
        )
        .expect("valid");
        assert_eq!(trip.points.len(), 6);
        assert_eq!(trip.initial_report.legs.len(), 5);
        assert_eq!(trip.optimized_report.legs.len(), 5);
        assert_eq!(trip.optimized_report.legs[0].from, "Santiago");
        assert!(
            trip.optimized_report.total_distance <= trip.initial_report.total_distance + 1e-9
        );
        assert!((trip.plan.stats.final_length - trip.optimized_report.total_distance).abs() < 1e-6);
    }

    #[test]
    fn test_plan_route_rejects_before_building() {
        let err = plan_route(
            Catalog::latam(),
            &["Lima", "Atlantis"],
            PriceConfig::default(),
            TwoOptOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err, Error::unknown_point("Atlantis"));
    }
}
