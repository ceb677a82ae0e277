use serde::{Deserialize, Serialize};

use super::{Edge, Graph, TaillessEdge, Vertex, Weight, WeightedEdge};

/// Adjacency lists sorted by head, one list per tail vertex.
#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct VecVecGraph {
    edges: Vec<Vec<TaillessEdge>>,
}

impl VecVecGraph {
    /// Builds a graph from `edges`, just large enough to hold every endpoint.
    /// Parallel edges collapse to the one with the smallest weight.
    pub fn from_edges(edges: &[WeightedEdge]) -> VecVecGraph {
        let mut graph = VecVecGraph::default();
        graph.add_edges(edges);
        graph
    }

    /// Creates a graph with `number_of_vertices` isolated vertices.
    pub fn with_vertices(number_of_vertices: u32) -> VecVecGraph {
        VecVecGraph {
            edges: vec![Vec::new(); number_of_vertices as usize],
        }
    }

    /// Adds `edges`, keeping the lighter one wherever an edge is already
    /// present.
    pub fn add_edges(&mut self, edges: &[WeightedEdge]) {
        edges.iter().for_each(|edge| {
            // Only overwrite if the new edge is lighter than the current one.
            let current_weight = self
                .get_weight(&edge.remove_weight())
                .unwrap_or(Weight::MAX);
            if edge.weight < current_weight {
                self.set_weight(&edge.remove_weight(), Some(edge.weight));
            }
        });
    }

    pub fn get_weight(&self, edge: &Edge) -> Option<Weight> {
        // Retrieve the vector of edges sharing the same tail, if it exists.
        let edges_sharing_tail = self.edges.get(edge.tail as usize)?;

        // Lists are sorted by head, so a binary search finds the edge.
        let edge_index = edges_sharing_tail
            .binary_search_by_key(&edge.head, |tailless_edge| tailless_edge.head)
            .ok()?;

        Some(edges_sharing_tail[edge_index].weight)
    }

    /// Connects, reweighs or (with `None`) disconnects `edge`. The vertex
    /// range grows to cover both endpoints.
    pub fn set_weight(&mut self, edge: &Edge, weight: Option<Weight>) {
        // Ensure both endpoints are within the bounds of self.edges.
        let max_edge_endpoint = std::cmp::max(edge.tail, edge.head) as usize;
        if max_edge_endpoint >= self.edges.len() {
            self.edges.resize(max_edge_endpoint + 1, Vec::new());
        }

        let edges_sharing_tail = &mut self.edges[edge.tail as usize];
        // Ok holds the position of the edge, Err the position keeping the list sorted.
        let edge_index = edges_sharing_tail.binary_search_by_key(&edge.head, |other| other.head);

        match (weight, edge_index) {
            // Update weight
            (Some(weight), Ok(index)) => edges_sharing_tail[index].weight = weight,
            // Edge doesn't exist yet, insert it.
            (Some(weight), Err(index)) => edges_sharing_tail.insert(
                index,
                TaillessEdge {
                    head: edge.head,
                    weight,
                },
            ),
            // Disconnect
            (None, Ok(index)) => {
                edges_sharing_tail.remove(index);
            }
            (None, Err(_)) => (),
        }
    }
}

impl Graph for VecVecGraph {
    type Edge = WeightedEdge;

    fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    fn edges(&self, tail: Vertex) -> Box<dyn Iterator<Item = WeightedEdge> + '_> {
        Box::new(
            self.edges[tail as usize]
                .iter()
                .map(move |tailless_edge| tailless_edge.set_tail(tail)),
        )
    }
}
