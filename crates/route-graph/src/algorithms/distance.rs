use num_traits::{CheckedAdd, Num, Zero};

use crate::{DirectedGraph, RouteError, graph::Route};

pub trait RouteDistance: DirectedGraph
where
    Self::EV: Num + CheckedAdd,
{
    /// Sum of the edge weights along `route`.
    ///
    /// Stops at the first pair of consecutive stops without an edge, or as
    /// soon as the sum no longer fits `EV`.
    fn route_distance(&self, route: &Route<Self::V>) -> Result<Self::EV, RouteError<Self::V>>;
}

impl<G> RouteDistance for G
where
    G: DirectedGraph,
    G::EV: Num + CheckedAdd,
{
    fn route_distance(&self, route: &Route<G::V>) -> Result<G::EV, RouteError<G::V>> {
        if route.len() < 2 {
            return Err(RouteError::TooShort(route.len()));
        }

        route.legs().try_fold(<G::EV as Zero>::zero(), |distance, (from, to)| {
            let weight = self.weight(from, to).ok_or_else(|| RouteError::NoEdge {
                from: from.clone(),
                to: to.clone(),
            })?;
            distance.checked_add(&weight).ok_or(RouteError::Overflow)
        })
    }
}
