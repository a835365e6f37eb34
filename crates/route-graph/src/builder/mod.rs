use crate::input::edgelist::{EdgeList, EdgeListError};

pub struct Uninitialized {}

pub struct FromEdgeList {
    edges: EdgeList<String, u32>,
}

#[derive(Debug)]
pub struct GraphBuilder<State> {
    state: State,
}

impl GraphBuilder<Uninitialized> {
    pub fn new() -> Self {
        Self {
            state: Uninitialized {},
        }
    }

    pub fn string(self, s: &str) -> Result<GraphBuilder<FromEdgeList>, EdgeListError> {
        self.parts(&[s])
    }

    pub fn parts<S: AsRef<str>>(
        self,
        parts: &[S],
    ) -> Result<GraphBuilder<FromEdgeList>, EdgeListError> {
        Ok(GraphBuilder {
            state: FromEdgeList {
                edges: EdgeList::parse(parts)?,
            },
        })
    }
}

impl Default for GraphBuilder<Uninitialized> {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder<FromEdgeList> {
    pub fn build<G>(self) -> G
    where
        G: From<EdgeList<String, u32>>,
    {
        G::from(self.state.edges)
    }
}

#[cfg(test)]
mod tests {
    use super::GraphBuilder;
    use crate::{DirectedGraph, Graph, graph::adjacency::AdjacencyGraph};

    #[test]
    fn build_from_string() {
        let graph: AdjacencyGraph<String, u32> = GraphBuilder::new()
            .string("AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7")
            .unwrap()
            .build();

        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 9);
        assert_eq!(graph.weight(&"E".to_string(), &"B".to_string()), Some(3));
    }

    #[test]
    fn build_rejects_invalid_input() {
        assert!(GraphBuilder::new().string("AB5, AET").is_err());
    }
}
