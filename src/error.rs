use thiserror::Error;

use crate::graphs::Vertex;

/// Returned by the queue observers and `remove` when the queue holds no
/// elements.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("the queue is empty")]
    Empty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// `extend_search` was called before a starting vertex was set.
    #[error("no starting vertex has been set")]
    NoStart,

    #[error("vertex {vertex} is out of range for a graph with {number_of_vertices} vertices")]
    VertexOutOfRange {
        vertex: Vertex,
        number_of_vertices: u32,
    },

    /// No path from the start to this vertex has been discovered.
    #[error("vertex {0} has not been reached from the start")]
    Unreachable(Vertex),
}

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unable to parse line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),
}
