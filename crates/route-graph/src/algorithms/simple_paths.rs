use log::{debug, trace};
use rustc_hash::FxHashSet;

use crate::{DirectedGraph, graph::Route};

pub trait SimplePaths: DirectedGraph {
    /// All routes from `source` to `destination` that repeat no stop between
    /// the two ends.
    ///
    /// `source` itself may come back once as an intermediate stop. With
    /// `source == destination` this yields every simple cycle through `source`.
    fn simple_paths(&self, source: &Self::V, destination: &Self::V) -> Vec<Route<Self::V>>;
}

impl<G> SimplePaths for G
where
    G: DirectedGraph,
{
    fn simple_paths(&self, source: &G::V, destination: &G::V) -> Vec<Route<G::V>> {
        let mut search = PathSearch {
            graph: self,
            source,
            destination,
            visited: Vec::new(),
            paths: Vec::new(),
        };

        search.visit();

        debug!("Found {} simple paths", search.paths.len());

        search.paths
    }
}

/// Depth first search state, `visited` holds the stops after `source`.
struct PathSearch<'a, G: DirectedGraph> {
    graph: &'a G,
    source: &'a G::V,
    destination: &'a G::V,
    visited: Vec<G::V>,
    paths: Vec<Route<G::V>>,
}

impl<'a, G: DirectedGraph> PathSearch<'a, G> {
    fn visit(&mut self) {
        let graph = self.graph;
        let frontier = self.visited.last().unwrap_or(self.source);
        let edges = graph.out_edges(frontier);

        // `destination` never enters `visited`, so any edge to it closes a path.
        if edges.iter().any(|edge| edge.target() == self.destination) {
            self.emit();
        }

        let mut explored = FxHashSet::default();
        for edge in edges {
            let next = edge.target();
            if next == self.destination || self.visited.contains(next) || !explored.insert(next) {
                continue;
            }

            self.visited.push(next.clone());
            self.visit();
            self.visited.pop();
        }
    }

    fn emit(&mut self) {
        let mut nodes = Vec::with_capacity(self.visited.len() + 2);
        nodes.push(self.source.clone());
        nodes.extend_from_slice(&self.visited);
        nodes.push(self.destination.clone());

        let route = Route::new(nodes);
        trace!("found path of {} stops", route.stop_count());
        self.paths.push(route);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::SimplePaths;
    use crate::{
        graph::{Route, adjacency::AdjacencyGraph},
        input::edgelist::EdgeList,
    };

    fn setup() -> AdjacencyGraph<String, u32> {
        EdgeList::try_from("AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7")
            .unwrap()
            .into()
    }

    fn paths(graph: &AdjacencyGraph<String, u32>, s: &str, d: &str) -> HashSet<String> {
        graph
            .simple_paths(&s.to_string(), &d.to_string())
            .iter()
            .map(Route::to_string)
            .collect()
    }

    fn set(routes: &[&str]) -> HashSet<String> {
        routes.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn paths_between_distinct_stops() {
        let graph = setup();

        assert_eq!(
            paths(&graph, "A", "C"),
            set(&["A-B-C", "A-D-C", "A-D-E-B-C", "A-E-B-C"])
        );
    }

    #[test]
    fn cycles_through_source() {
        let graph = setup();

        assert_eq!(paths(&graph, "C", "C"), set(&["C-D-C", "C-E-B-C", "C-D-E-B-C"]));
        assert_eq!(paths(&graph, "B", "B"), set(&["B-C-E-B", "B-C-D-E-B"]));
    }

    #[test]
    fn no_repeated_stops() {
        let graph = setup();

        for s in ["A", "B", "C", "D", "E"] {
            for d in ["A", "B", "C", "D", "E"] {
                for route in graph.simple_paths(&s.to_string(), &d.to_string()) {
                    let nodes = route.nodes();
                    assert_eq!(nodes.first().map(String::as_str), Some(s));
                    assert_eq!(nodes.last().map(String::as_str), Some(d));

                    let inner = &nodes[1..nodes.len() - 1];
                    let mut seen = HashSet::new();
                    assert!(
                        inner.iter().all(|n| seen.insert(n) && n != d),
                        "{route} repeats a stop"
                    );
                }
            }
        }
    }

    #[test]
    fn unreachable_destination() {
        let graph = setup();

        assert!(paths(&graph, "C", "A").is_empty());
        assert!(paths(&graph, "X", "A").is_empty());
        assert!(paths(&graph, "A", "X").is_empty());
    }

    #[test]
    fn source_is_revisited_once() {
        let graph: AdjacencyGraph<&str, u32> =
            EdgeList::new(vec![("A", "B", 1), ("B", "A", 1), ("A", "C", 1), ("B", "C", 1)]).into();

        let routes = graph
            .simple_paths(&"A", &"C")
            .iter()
            .map(Route::to_string)
            .collect::<HashSet<_>>();

        assert_eq!(routes, set(&["A-C", "A-B-C", "A-B-A-C"]));
    }

    #[test]
    fn parallel_edges_yield_one_route() {
        let graph: AdjacencyGraph<&str, u32> = EdgeList::new(vec![
            ("A", "B", 1),
            ("A", "B", 2),
            ("B", "C", 1),
            ("B", "C", 4),
        ])
        .into();

        let routes = graph.simple_paths(&"A", &"C");

        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].to_string(), "A-B-C");
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let graph: AdjacencyGraph<&str, u32> =
            EdgeList::new(vec![("A", "A", 2), ("A", "B", 1), ("B", "A", 1)]).into();

        let routes = graph
            .simple_paths(&"A", &"A")
            .iter()
            .map(Route::to_string)
            .collect::<HashSet<_>>();

        assert_eq!(routes, set(&["A-A", "A-B-A"]));
    }
}
