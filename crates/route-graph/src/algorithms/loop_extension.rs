use log::{debug, warn};
use num_traits::{CheckedAdd, Num, Zero};

use crate::{
    DirectedGraph,
    algorithms::{distance::RouteDistance, simple_paths::SimplePaths},
    graph::Route,
    types::Budget,
};

impl<EV: Num + CheckedAdd + PartialOrd + Copy> Budget<EV> {
    /// Whether `route` may still be extended with another loop.
    ///
    /// Routes without a defined distance never fit a distance budget.
    pub fn admits<G>(&self, graph: &G, route: &Route<G::V>) -> bool
    where
        G: DirectedGraph<EV = EV>,
    {
        match self {
            Budget::Stops(bound) => bound.admits(route.stop_count()),
            Budget::Distance(bound) => graph
                .route_distance(route)
                .is_ok_and(|distance| bound.admits(distance)),
        }
    }
}

pub trait LoopExtension: SimplePaths + RouteDistance
where
    Self::EV: Num + CheckedAdd + PartialOrd,
{
    /// Simple paths from `source` to `destination`, each extended by every
    /// sequence of simple cycles through `destination` while within `budget`.
    ///
    /// The result holds every route produced, including the first extension
    /// of each route that leaves the budget. Callers filter for the bound they
    /// count against.
    fn bounded_routes(
        &self,
        source: &Self::V,
        destination: &Self::V,
        budget: &Budget<Self::EV>,
    ) -> Vec<Route<Self::V>>;
}

impl<G> LoopExtension for G
where
    G: DirectedGraph,
    G::EV: Num + CheckedAdd + PartialOrd,
{
    fn bounded_routes(
        &self,
        source: &G::V,
        destination: &G::V,
        budget: &Budget<G::EV>,
    ) -> Vec<Route<G::V>> {
        let base = self.simple_paths(source, destination);
        let mut loops = self.simple_paths(destination, destination);

        if let Budget::Distance(_) = budget {
            let before = loops.len();
            loops.retain(|cycle| {
                self.route_distance(cycle)
                    .is_ok_and(|distance| distance > <G::EV as Zero>::zero())
            });
            if loops.len() < before {
                warn!(
                    "ignoring {} loops without positive distance",
                    before - loops.len()
                );
            }
        }

        let mut routes = Vec::new();
        extend(self, base, &loops, budget, &mut routes);

        debug!(
            "Enumerated {} routes using {} loops",
            routes.len(),
            loops.len()
        );

        routes
    }
}

fn extend<G>(
    graph: &G,
    candidates: Vec<Route<G::V>>,
    loops: &[Route<G::V>],
    budget: &Budget<G::EV>,
    routes: &mut Vec<Route<G::V>>,
) where
    G: DirectedGraph,
    G::EV: Num + CheckedAdd + PartialOrd,
{
    for route in candidates {
        let extended: Vec<Route<G::V>> = if budget.admits(graph, &route) {
            loops.iter().map(|cycle| route.join(cycle)).collect()
        } else {
            Vec::new()
        };

        routes.push(route);

        if !extended.is_empty() {
            extend(graph, extended, loops, budget, routes);
        }
    }
}
