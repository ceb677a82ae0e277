use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, Vertex};

/// The vertices of a path from its first to its last vertex and the sum of
/// the weights of the edges between them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<Vertex>,
    pub distance: Distance,
}

impl Path {
    pub fn source(&self) -> Option<Vertex> {
        self.vertices.first().copied()
    }

    pub fn target(&self) -> Option<Vertex> {
        self.vertices.last().copied()
    }

    /// Number of edges on the path.
    pub fn len(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
