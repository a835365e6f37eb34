use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

pub mod adjacency;

/// Separator between stops in the textual form of a [Route].
pub const SEPARATOR: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<V, EV> {
    target: V,
    weight: EV,
}

impl<V, EV> Edge<V, EV> {
    pub fn new(target: V, weight: EV) -> Edge<V, EV> {
        Self { target, weight }
    }

    pub fn target(&self) -> &V {
        &self.target
    }

    pub fn weight(&self) -> &EV {
        &self.weight
    }
}

impl<V: Display, EV: Display> Display for Edge<V, EV> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.target, self.weight)
    }
}

/// An ordered sequence of stops.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route<V> {
    nodes: Vec<V>,
}

impl<V> Route<V> {
    pub fn new(nodes: Vec<V>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[V] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges traversed.
    pub fn stop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<&V> {
        self.nodes.first()
    }

    pub fn last(&self) -> Option<&V> {
        self.nodes.last()
    }

    /// Consecutive `(from, to)` pairs, `A-B-C` yields `(A, B)` and `(B, C)`.
    pub fn legs(&self) -> impl Iterator<Item = (&V, &V)> {
        self.nodes.windows(2).map(|leg| (&leg[0], &leg[1]))
    }
}

impl<V: Clone> Route<V> {
    /// Appends `cycle` without its first stop, which must equal our last one.
    pub fn join(&self, cycle: &Route<V>) -> Route<V> {
        let mut nodes = Vec::with_capacity(self.len() + cycle.stop_count());
        nodes.extend_from_slice(&self.nodes);
        nodes.extend_from_slice(cycle.nodes.get(1..).unwrap_or_default());
        Route::new(nodes)
    }
}

impl<V: FromStr> Route<V> {
    /// Splits `A-B-C` into its stops.
    pub fn parse(route: &str) -> Result<Self, V::Err> {
        route
            .split(SEPARATOR)
            .map(|stop| V::from_str(stop.trim()))
            .collect::<Result<Vec<_>, _>>()
            .map(Route::new)
    }
}

impl<V> From<Vec<V>> for Route<V> {
    fn from(nodes: Vec<V>) -> Self {
        Route::new(nodes)
    }
}

impl<V: Display> Display for Route<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut nodes = self.nodes.iter();
        if let Some(first) = nodes.next() {
            write!(f, "{}", first)?;
        }
        nodes.try_for_each(|node| write!(f, "{}{}", SEPARATOR, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(s: &str) -> Route<String> {
        Route::parse(s).unwrap()
    }

    #[test]
    fn parse_and_display() {
        let r = route("A-E-B-C-D");
        assert_eq!(r.len(), 5);
        assert_eq!(r.stop_count(), 4);
        assert_eq!(r.first().map(String::as_str), Some("A"));
        assert_eq!(r.last().map(String::as_str), Some("D"));
        assert_eq!(r.to_string(), "A-E-B-C-D");
    }

    #[test]
    fn legs() {
        let r = route("A-B-C-D");
        let legs = r
            .legs()
            .map(|(a, b)| format!("{a}{b}"))
            .collect::<Vec<String>>();
        assert_eq!(legs, vec!["AB", "BC", "CD"]);

        assert_eq!(route("A").legs().count(), 0);
        assert_eq!(route("").stop_count(), 0);
    }

    #[test]
    fn join_drops_cycle_start() {
        let joined = route("A-B-C").join(&route("C-D-C"));
        assert_eq!(joined, route("A-B-C-D-C"));
        assert_eq!(joined.stop_count(), 4);
    }

    #[test]
    fn route_serializes_as_sequence() {
        let json = serde_json::to_string(&route("C-E-B-C")).unwrap();
        assert_eq!(json, r#"["C","E","B","C"]"#);
    }
}
