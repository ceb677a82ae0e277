use fixedbitset::FixedBitSet;

use super::path::Path;
use crate::{
    error::SearchError,
    graphs::{Distance, Vertex},
};

/// Marks a vertex without known distance.
pub(crate) const UNKNOWN_DISTANCE: Distance = Distance::MAX;
/// Marks a vertex without predecessor.
pub(crate) const NO_PREDECESSOR: Vertex = Vertex::MAX;

/// The state of a search as it was when the snapshot was taken. Owns copies
/// of the distance, predecessor and settled arrays, so further searching does
/// not affect it.
///
/// Distances of settled vertices are final. Vertices that are discovered but
/// not settled report the best distance known at the time, along with the
/// path that realizes it.
#[derive(Clone, Debug)]
pub struct PathSnapshot {
    start: Vertex,
    distances: Vec<Distance>,
    predecessors: Vec<Vertex>,
    settled: FixedBitSet,
    settled_count: usize,
    all_paths_found: bool,
}

impl PathSnapshot {
    pub(crate) fn new(
        start: Vertex,
        distances: Vec<Distance>,
        predecessors: Vec<Vertex>,
        settled: FixedBitSet,
        settled_count: usize,
        all_paths_found: bool,
    ) -> PathSnapshot {
        PathSnapshot {
            start,
            distances,
            predecessors,
            settled,
            settled_count,
            all_paths_found,
        }
    }

    pub fn start(&self) -> Vertex {
        self.start
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.distances.len() as u32
    }

    pub fn settled_count(&self) -> usize {
        self.settled_count
    }

    /// Whether every vertex reachable from the start was settled.
    pub fn all_paths_found(&self) -> bool {
        self.all_paths_found
    }

    /// The best known distance from the start, `None` if `vertex` was never
    /// discovered. Panics if `vertex` is out of range.
    pub fn distance_to(&self, vertex: Vertex) -> Option<Distance> {
        self.assert_in_range(vertex);
        let distance = self.distances[vertex as usize];
        if distance == UNKNOWN_DISTANCE {
            return None;
        }
        Some(distance)
    }

    pub fn is_discovered(&self, vertex: Vertex) -> bool {
        self.distance_to(vertex).is_some()
    }

    /// Panics if `vertex` is out of range.
    pub fn is_settled(&self, vertex: Vertex) -> bool {
        self.assert_in_range(vertex);
        self.settled.contains(vertex as usize)
    }

    /// The best known path from the start to `vertex`.
    pub fn path_to(&self, vertex: Vertex) -> Result<Path, SearchError> {
        if vertex >= self.number_of_vertices() {
            return Err(SearchError::VertexOutOfRange {
                vertex,
                number_of_vertices: self.number_of_vertices(),
            });
        }
        let distance = self
            .distance_to(vertex)
            .ok_or(SearchError::Unreachable(vertex))?;

        let mut vertices = vec![vertex];
        let mut current = vertex;
        while current != self.start {
            current = self.predecessors[current as usize];
            if current == NO_PREDECESSOR {
                return Err(SearchError::Unreachable(vertex));
            }
            vertices.push(current);
        }
        vertices.reverse();

        Ok(Path { vertices, distance })
    }

    fn assert_in_range(&self, vertex: Vertex) {
        assert!(
            vertex < self.number_of_vertices(),
            "vertex {} is out of range for a graph with {} vertices",
            vertex,
            self.number_of_vertices()
        );
    }
}
