use std::{fmt::Display, hash::Hash};

use log::info;
use rustc_hash::FxHashMap;

use crate::{DirectedGraph, Graph, graph::Edge, input::edgelist::EdgeList};

/// Directed multigraph storing the outgoing edges of every node.
///
/// Nodes keep their insertion order, and so do the edges of each node.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyGraph<V, EV>
where
    V: Eq + Hash,
{
    node_values: Vec<V>,
    node_index: FxHashMap<V, usize>,
    out_edges: Vec<Vec<Edge<V, EV>>>,
    edge_count: usize,
}

impl<V, EV> AdjacencyGraph<V, EV>
where
    V: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            node_values: Vec::new(),
            node_index: FxHashMap::default(),
            out_edges: Vec::new(),
            edge_count: 0,
        }
    }

    fn index_or_insert(&mut self, node: V) -> usize {
        if let Some(index) = self.node_index.get(&node) {
            return *index;
        }
        let index = self.node_values.len();
        self.node_index.insert(node.clone(), index);
        self.node_values.push(node);
        self.out_edges.push(Vec::new());
        index
    }
}

impl<V, EV> Default for AdjacencyGraph<V, EV>
where
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, EV> Graph for AdjacencyGraph<V, EV>
where
    V: Eq + Hash + Clone,
    EV: Copy,
{
    type V = V;
    type EV = EV;

    fn node_count(&self) -> usize {
        self.node_values.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn contains(&self, node: &V) -> bool {
        self.node_index.contains_key(node)
    }

    fn nodes_iter<'a>(&'a self) -> impl Iterator<Item = &'a V>
    where
        V: 'a,
    {
        self.node_values.iter()
    }

    fn add_node(&mut self, node: V) -> bool {
        let node_count = self.node_count();
        self.index_or_insert(node) == node_count
    }

    fn add_edge(&mut self, a: V, b: V, weight: EV) {
        let a = self.index_or_insert(a);
        self.index_or_insert(b.clone());
        self.out_edges[a].push(Edge::new(b, weight));
        self.edge_count += 1;
    }
}

impl<V, EV> DirectedGraph for AdjacencyGraph<V, EV>
where
    V: Eq + Hash + Clone,
    EV: Copy,
{
    fn out_edges(&self, node: &V) -> &[Edge<V, EV>] {
        match self.node_index.get(node) {
            Some(index) => &self.out_edges[*index],
            None => &[],
        }
    }
}

impl<V, EV> From<EdgeList<V, EV>> for AdjacencyGraph<V, EV>
where
    V: Eq + Hash + Clone,
    EV: Copy,
{
    fn from(edge_list: EdgeList<V, EV>) -> Self {
        let mut graph = AdjacencyGraph::new();
        edge_list
            .into_edges()
            .for_each(|(s, t, v)| graph.add_edge(s, t, v));

        info!(
            "Created route graph (node_count: {:?}, edge_count: {:?})",
            graph.node_count(),
            graph.edge_count()
        );

        graph
    }
}

impl<V, EV> Display for AdjacencyGraph<V, EV>
where
    V: Eq + Hash + Display,
    EV: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (node, edges) in self.node_values.iter().zip(&self.out_edges) {
            write!(f, "{} -> [", node)?;
            for (i, edge) in edges.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", edge)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
