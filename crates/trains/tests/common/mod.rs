use route_graph::{builder::GraphBuilder, graph::adjacency::AdjacencyGraph};

pub const CANONICAL: &str = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7";

pub fn setup() -> AdjacencyGraph<String, u32> {
    GraphBuilder::new().string(CANONICAL).unwrap().build()
}

pub fn stop(name: &str) -> String {
    name.to_string()
}
