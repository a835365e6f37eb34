use std::{
    error::Error,
    fmt::{Debug, Display},
    hash::Hash,
};

use graph::Edge;

pub mod algorithms;
pub mod builder;
pub mod graph;
pub mod input;
pub mod types;

/// Reasons a route has no defined distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError<V> {
    /// The route has fewer than two stops.
    TooShort(usize),
    /// No edge connects two consecutive stops.
    NoEdge { from: V, to: V },
    /// The summed weights do not fit the weight type.
    Overflow,
}

impl<V: Debug + Display> Error for RouteError<V> {}

impl<V: Display> Display for RouteError<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooShort(len) => write!(f, "route needs at least 2 stops, got {}", len),
            Self::NoEdge { from, to } => write!(f, "no edge from '{}' to '{}'", from, to),
            Self::Overflow => write!(f, "route distance overflows"),
        }
    }
}

pub trait Graph: Default {
    type V: Eq + Hash + Clone;
    type EV: Copy;

    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    fn contains(&self, node: &Self::V) -> bool;

    fn nodes_iter<'a>(&'a self) -> impl Iterator<Item = &'a Self::V>
    where
        Self::V: 'a;

    /// Inserts `node` without edges. Returns `false` if it was already present.
    fn add_node(&mut self, node: Self::V) -> bool;

    /// Inserts both endpoints if needed, then a new edge `a -> b`.
    ///
    /// Parallel edges and self loops are accepted as given.
    fn add_edge(&mut self, a: Self::V, b: Self::V, weight: Self::EV);
}

pub trait DirectedGraph: Graph {
    /// Outgoing edges of `node` in insertion order, empty if `node` is unknown.
    fn out_edges(&self, node: &Self::V) -> &[Edge<Self::V, Self::EV>];

    fn out_degree(&self, node: &Self::V) -> usize {
        self.out_edges(node).len()
    }

    /// Weight of the first inserted edge `a -> b`.
    fn weight(&self, a: &Self::V, b: &Self::V) -> Option<Self::EV> {
        self.out_edges(a)
            .iter()
            .find(|edge| edge.target() == b)
            .map(|edge| *edge.weight())
    }
}
