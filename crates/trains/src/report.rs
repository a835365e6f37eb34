use std::fmt::Display;

use route_graph::DirectedGraph;

use crate::query::RouteQueries;

/// Answers to the ten standard questions about a network with stops `A` to `E`.
pub struct Report(Vec<String>);

impl Report {
    pub fn new<G>(queries: &RouteQueries<'_, G>) -> Self
    where
        G: DirectedGraph<V = String, EV = u32>,
    {
        let stop = |name: &str| name.to_string();

        Self(vec![
            queries.route_distance("A-B-C").to_string(),
            queries.route_distance("A-D").to_string(),
            queries.route_distance("A-D-C").to_string(),
            queries.route_distance("A-E-B-C-D").to_string(),
            queries.route_distance("A-E-D").to_string(),
            queries
                .trips_with_max_stops(&stop("C"), &stop("C"), 3)
                .to_string(),
            queries
                .trips_with_exact_stops(&stop("A"), &stop("C"), 4)
                .to_string(),
            queries.shortest_route(&stop("A"), &stop("C")).to_string(),
            queries.shortest_route(&stop("B"), &stop("B")).to_string(),
            queries
                .trips_with_max_weight(&stop("C"), &stop("C"), 30)
                .to_string(),
        ])
    }

    pub fn answers(&self) -> &[String] {
        &self.0
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0
            .iter()
            .enumerate()
            .try_for_each(|(i, answer)| writeln!(f, "Output #{}: {}", i + 1, answer))
    }
}
