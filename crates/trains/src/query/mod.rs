use std::{cmp::Ordering, fmt::Display, str::FromStr};

use log::debug;
use num_traits::{CheckedAdd, Num};
use route_graph::{
    DirectedGraph,
    algorithms::{distance::RouteDistance, loop_extension::LoopExtension, simple_paths::SimplePaths},
    graph::Route,
    types::{Bound, Budget},
};

pub mod params;

pub use params::QueryParams;

/// Printed in place of a distance when a route does not exist.
pub const NO_SUCH_ROUTE: &str = "NO SUCH ROUTE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryAnswer<EV> {
    Distance(EV),
    NoSuchRoute,
}

impl<EV> QueryAnswer<EV> {
    pub fn distance(self) -> Option<EV> {
        match self {
            QueryAnswer::Distance(distance) => Some(distance),
            QueryAnswer::NoSuchRoute => None,
        }
    }
}

impl<EV> From<Option<EV>> for QueryAnswer<EV> {
    fn from(value: Option<EV>) -> Self {
        value.map_or(QueryAnswer::NoSuchRoute, QueryAnswer::Distance)
    }
}

impl<EV: Display> Display for QueryAnswer<EV> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryAnswer::Distance(distance) => write!(f, "{}", distance),
            QueryAnswer::NoSuchRoute => write!(f, "{}", NO_SUCH_ROUTE),
        }
    }
}

/// Distance and trip queries against a finished graph.
#[derive(Debug, Clone, Copy)]
pub struct RouteQueries<'g, G> {
    graph: &'g G,
    params: QueryParams,
}

impl<'g, G> RouteQueries<'g, G>
where
    G: DirectedGraph,
    G::EV: Num + CheckedAdd + PartialOrd,
{
    pub fn new(graph: &'g G) -> Self {
        Self::with_params(graph, QueryParams::default())
    }

    pub fn with_params(graph: &'g G, params: QueryParams) -> Self {
        Self { graph, params }
    }

    pub fn stop_budget(&self, max_stops: usize) -> Budget<G::EV> {
        Budget::Stops(Bound::new(max_stops, self.params.stop_bound))
    }

    pub fn weight_budget(&self, max_weight: G::EV) -> Budget<G::EV> {
        Budget::Distance(Bound::new(max_weight, self.params.weight_bound))
    }

    /// Distance of a route written as `A-B-C`.
    pub fn route_distance(&self, route: &str) -> QueryAnswer<G::EV>
    where
        G::V: FromStr,
    {
        let Ok(route) = Route::<G::V>::parse(route) else {
            debug!("could not parse route '{}'", route);
            return QueryAnswer::NoSuchRoute;
        };

        self.graph.route_distance(&route).ok().into()
    }

    /// Routes from `source` to `destination`, loops at `destination` included,
    /// that fit `budget`.
    pub fn routes_within(
        &self,
        source: &G::V,
        destination: &G::V,
        budget: &Budget<G::EV>,
    ) -> Vec<Route<G::V>> {
        self.graph
            .bounded_routes(source, destination, budget)
            .into_iter()
            .filter(|route| budget.admits(self.graph, route))
            .collect()
    }

    pub fn routes_with_exact_stops(
        &self,
        source: &G::V,
        destination: &G::V,
        stops: usize,
    ) -> Vec<Route<G::V>> {
        self.graph
            .bounded_routes(source, destination, &Budget::Stops(Bound::inclusive(stops)))
            .into_iter()
            .filter(|route| route.stop_count() == stops)
            .collect()
    }

    pub fn trips_with_max_stops(
        &self,
        source: &G::V,
        destination: &G::V,
        max_stops: usize,
    ) -> usize {
        self.routes_within(source, destination, &self.stop_budget(max_stops))
            .len()
    }

    pub fn trips_with_exact_stops(
        &self,
        source: &G::V,
        destination: &G::V,
        stops: usize,
    ) -> usize {
        self.routes_with_exact_stops(source, destination, stops)
            .len()
    }

    pub fn trips_with_max_weight(
        &self,
        source: &G::V,
        destination: &G::V,
        max_weight: G::EV,
    ) -> usize {
        self.routes_within(source, destination, &self.weight_budget(max_weight))
            .len()
    }

    /// Distance of the shortest route.
    ///
    /// Only simple paths are compared: with positive weights a route that
    /// repeats a loop is always longer than the same route without it.
    pub fn shortest_route(&self, source: &G::V, destination: &G::V) -> QueryAnswer<G::EV> {
        self.graph
            .simple_paths(source, destination)
            .iter()
            .filter_map(|route| self.graph.route_distance(route).ok())
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
            .into()
    }
}
