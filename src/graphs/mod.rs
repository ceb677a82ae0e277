use std::{
    fs::File,
    io::{BufRead, BufReader},
    ops::Range,
    path::Path,
    str::FromStr,
};

use indicatif::ProgressIterator;
use serde::{Deserialize, Serialize};

use crate::error::GraphError;

pub mod grid_graph;
pub mod vec_vec_graph;

pub type Vertex = u32;
pub type Weight = u32;
pub type Distance = u64;

/// Access to the endpoints of an edge. `head` is the vertex the edge leads
/// to.
pub trait HeadVertex {
    fn tail(&self) -> Vertex;

    fn head(&self) -> Vertex;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub tail: Vertex,
    pub head: Vertex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub tail: Vertex,
    pub head: Vertex,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(tail: Vertex, head: Vertex, weight: Weight) -> WeightedEdge {
        WeightedEdge { tail, head, weight }
    }

    pub fn remove_weight(&self) -> Edge {
        Edge {
            tail: self.tail,
            head: self.head,
        }
    }
}

impl HeadVertex for WeightedEdge {
    fn tail(&self) -> Vertex {
        self.tail
    }

    fn head(&self) -> Vertex {
        self.head
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TaillessEdge {
    pub head: Vertex,
    pub weight: Weight,
}

impl TaillessEdge {
    pub fn set_tail(&self, tail: Vertex) -> WeightedEdge {
        WeightedEdge {
            tail,
            head: self.head,
            weight: self.weight,
        }
    }
}

/// Read-only view of a directed graph with dense vertex ids in
/// `[0, number_of_vertices)`.
pub trait Graph {
    type Edge: HeadVertex;

    fn number_of_vertices(&self) -> u32;

    fn vertices(&self) -> Range<Vertex> {
        0..self.number_of_vertices()
    }

    fn number_of_edges(&self) -> u32 {
        self.vertices()
            .map(|vertex| self.edges(vertex).count() as u32)
            .sum::<u32>()
    }

    /// Outgoing edges of `tail`.
    fn edges(&self, tail: Vertex) -> Box<dyn Iterator<Item = Self::Edge> + '_>;
}

impl<G: Graph + ?Sized> Graph for &G {
    type Edge = G::Edge;

    fn number_of_vertices(&self) -> u32 {
        (**self).number_of_vertices()
    }

    fn edges(&self, tail: Vertex) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        (**self).edges(tail)
    }
}

/// Maps an edge to its traversal cost. Implementations must be pure: the
/// solver may weigh the same edge more than once.
pub trait Weigher<E> {
    fn weight(&self, edge: &E) -> Weight;
}

impl<E, F> Weigher<E> for F
where
    F: Fn(&E) -> Weight,
{
    fn weight(&self, edge: &E) -> Weight {
        self(edge)
    }
}

/// Weighs a `WeightedEdge` by the weight it carries.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeWeight;

impl Weigher<WeightedEdge> for EdgeWeight {
    fn weight(&self, edge: &WeightedEdge) -> Weight {
        edge.weight
    }
}

/// Returns the declared number of vertices together with the edges.
pub fn read_edges_from_fmi_file(file: &Path) -> Result<(u32, Vec<WeightedEdge>), GraphError> {
    let reader = BufReader::new(File::open(file)?);
    read_edges_from_fmi(reader)
}

/// Parses a graph in the fmi text format: optional `#` comment lines, the
/// number of vertices, the number of edges, one line per vertex and one line
/// per edge (`srcIDX trgIDX cost ...`). Edge endpoints must be below the
/// declared number of vertices.
pub fn read_edges_from_fmi(reader: impl BufRead) -> Result<(u32, Vec<WeightedEdge>), GraphError> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(index, line)| line.map(|line| (index + 1, line)))
        .filter(|line| match line {
            Ok((_, line)) => {
                let line = line.trim();
                !line.is_empty() && !line.starts_with('#')
            }
            Err(_) => true,
        });

    let (line_number, line) = lines.next().transpose()?.ok_or_else(|| GraphError::Parse {
        line: 0,
        reason: "missing number of vertices".to_string(),
    })?;
    let number_of_vertices: u32 = parse_value(Some(line.trim()), line_number, "vertex count")?;

    let (line_number, line) = lines.next().transpose()?.ok_or_else(|| GraphError::Parse {
        line: line_number,
        reason: "missing number of edges".to_string(),
    })?;
    let number_of_edges: usize = parse_value(Some(line.trim()), line_number, "edge count")?;

    let edges = lines
        .progress_count(number_of_vertices as u64 + number_of_edges as u64)
        .skip(number_of_vertices as usize)
        .take(number_of_edges)
        .map(|line| -> Result<WeightedEdge, GraphError> {
            let (line_number, line) = line?;
            let mut values = line.split_whitespace();
            let tail = parse_vertex(values.next(), line_number, "tail", number_of_vertices)?;
            let head = parse_vertex(values.next(), line_number, "head", number_of_vertices)?;
            let weight = parse_value(values.next(), line_number, "weight")?;
            Ok(WeightedEdge { tail, head, weight })
        })
        .collect::<Result<Vec<_>, GraphError>>()?;

    if edges.len() != number_of_edges {
        return Err(GraphError::Parse {
            line: line_number,
            reason: format!("expected {} edges, found {}", number_of_edges, edges.len()),
        });
    }

    Ok((number_of_vertices, edges))
}

fn parse_vertex(
    value: Option<&str>,
    line: usize,
    name: &str,
    number_of_vertices: u32,
) -> Result<Vertex, GraphError> {
    let vertex: Vertex = parse_value(value, line, name)?;
    if vertex >= number_of_vertices {
        return Err(GraphError::Parse {
            line,
            reason: format!(
                "{} {} is out of range for {} vertices",
                name, vertex, number_of_vertices
            ),
        });
    }
    Ok(vertex)
}

fn parse_value<T: FromStr>(value: Option<&str>, line: usize, name: &str) -> Result<T, GraphError> {
    let value = value.ok_or_else(|| GraphError::Parse {
        line,
        reason: format!("no {} found", name),
    })?;
    value.parse().map_err(|_| GraphError::Parse {
        line,
        reason: format!("unable to parse {} '{}'", name, value),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_fmi_with_comments() {
        let input = "# some comment\n# another\n\n3\n2\n0 1 1 0\n1 2 2 0\n2 3 3 0\n0 1 7 0 50\n1 2 3 0 50\n";
        let (number_of_vertices, edges) = read_edges_from_fmi(Cursor::new(input)).unwrap();

        assert_eq!(number_of_vertices, 3);
        assert_eq!(
            edges,
            vec![WeightedEdge::new(0, 1, 7), WeightedEdge::new(1, 2, 3)]
        );
    }

    #[test]
    fn rejects_truncated_fmi() {
        let input = "2\n3\n0 0 0 0\n1 0 0 0\n0 1 4\n";
        let result = read_edges_from_fmi(Cursor::new(input));

        assert!(matches!(result, Err(GraphError::Parse { .. })));
    }

    #[test]
    fn rejects_malformed_weight() {
        let input = "2\n1\n0 0 0 0\n1 0 0 0\n0 1 heavy\n";
        let result = read_edges_from_fmi(Cursor::new(input));

        assert!(matches!(result, Err(GraphError::Parse { line: 5, .. })));
    }

    #[test]
    fn keeps_trailing_isolated_vertices() {
        let input = "4\n1\n0 0 0 0\n1 0 0 0\n2 0 0 0\n3 0 0 0\n0 1 7 0\n";
        let (number_of_vertices, edges) = read_edges_from_fmi(Cursor::new(input)).unwrap();
        assert_eq!(number_of_vertices, 4);

        let mut graph = vec_vec_graph::VecVecGraph::with_vertices(number_of_vertices);
        graph.add_edges(&edges);
        assert_eq!(graph.number_of_vertices(), 4);
        assert_eq!(graph.edges(3).count(), 0);
    }

    #[test]
    fn rejects_endpoint_beyond_vertex_count() {
        let input = "2\n1\n0 0 0 0\n1 0 0 0\n0 9 7 0\n";
        let result = read_edges_from_fmi(Cursor::new(input));

        assert!(matches!(result, Err(GraphError::Parse { line: 5, .. })));

        let input = "2\n1\n0 0 0 0\n1 0 0 0\n2 1 7 0\n";
        let result = read_edges_from_fmi(Cursor::new(input));

        assert!(matches!(result, Err(GraphError::Parse { line: 5, .. })));
    }
}
