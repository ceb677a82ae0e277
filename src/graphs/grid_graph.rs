use serde::{Deserialize, Serialize};

use super::{Graph, HeadVertex, Vertex, Weight, Weigher};

/// Offsets `(dx, dy)` per direction. Direction 0 points right, 2 points up
/// and the rest follow counter-clockwise; `y` grows downwards.
const DIRECTION_OFFSETS: [(i64, i64); 8] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A `width` x `height` lattice in which every cell is connected to its up to
/// eight neighbours. Cell `(x, y)` has id `y * width + x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridGraph {
    width: u32,
    height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridEdge {
    pub tail: Vertex,
    pub head: Vertex,
    /// In `[0, 8)`, see `GridGraph`.
    pub direction: u8,
}

impl GridEdge {
    pub fn is_diagonal(&self) -> bool {
        self.direction % 2 == 1
    }
}

impl HeadVertex for GridEdge {
    fn tail(&self) -> Vertex {
        self.tail
    }

    fn head(&self) -> Vertex {
        self.head
    }
}

impl GridGraph {
    /// Panics if the grid has more cells than a `Vertex` can address.
    pub fn new(width: u32, height: u32) -> GridGraph {
        assert!(
            (width as u64) * (height as u64) <= Vertex::MAX as u64,
            "a {}x{} grid does not fit into the vertex id range",
            width,
            height
        );
        GridGraph { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn vertex_at(&self, x: u32, y: u32) -> Option<Vertex> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn coordinates(&self, vertex: Vertex) -> (u32, u32) {
        assert!(vertex < self.number_of_vertices());
        (vertex % self.width, vertex / self.width)
    }

    fn neighbour(&self, vertex: Vertex, direction: u8) -> Option<Vertex> {
        let (x, y) = self.coordinates(vertex);
        let (dx, dy) = DIRECTION_OFFSETS[direction as usize];
        let x = u32::try_from(x as i64 + dx).ok()?;
        let y = u32::try_from(y as i64 + dy).ok()?;
        self.vertex_at(x, y)
    }
}

impl Graph for GridGraph {
    type Edge = GridEdge;

    fn number_of_vertices(&self) -> u32 {
        self.width * self.height
    }

    fn edges(&self, tail: Vertex) -> Box<dyn Iterator<Item = GridEdge> + '_> {
        Box::new((0..DIRECTION_OFFSETS.len() as u8).filter_map(move |direction| {
            let head = self.neighbour(tail, direction)?;
            Some(GridEdge {
                tail,
                head,
                direction,
            })
        }))
    }
}

/// Charges a fixed cost per step, distinguishing horizontal/vertical steps
/// from diagonal ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepWeigher {
    pub straight: Weight,
    pub diagonal: Weight,
}

impl Default for StepWeigher {
    // 5:7 approximates 1:sqrt(2)
    fn default() -> Self {
        StepWeigher {
            straight: 5,
            diagonal: 7,
        }
    }
}

impl Weigher<GridEdge> for StepWeigher {
    fn weight(&self, edge: &GridEdge) -> Weight {
        if edge.is_diagonal() {
            self.diagonal
        } else {
            self.straight
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_neighbours() {
        let grid = GridGraph::new(3, 2);
        let mut heads = grid.edges(0).map(|edge| edge.head).collect::<Vec<_>>();
        heads.sort();

        assert_eq!(heads, vec![1, 3, 4]);
    }

    #[test]
    fn inner_cell_has_eight_neighbours() {
        let grid = GridGraph::new(3, 3);
        let center = grid.vertex_at(1, 1).unwrap();

        assert_eq!(grid.edges(center).count(), 8);
        assert_eq!(grid.number_of_edges(), 40);
    }

    #[test]
    fn directions_follow_image_orientation() {
        let grid = GridGraph::new(3, 3);
        let center = grid.vertex_at(1, 1).unwrap();
        let heads = grid
            .edges(center)
            .map(|edge| (edge.direction, grid.coordinates(edge.head)))
            .collect::<Vec<_>>();

        assert!(heads.contains(&(0, (2, 1))));
        assert!(heads.contains(&(2, (1, 0))));
        assert!(heads.contains(&(5, (0, 2))));
    }

    #[test]
    fn step_weigher_charges_diagonals() {
        let weigher = StepWeigher::default();
        let straight = GridEdge {
            tail: 0,
            head: 1,
            direction: 0,
        };
        let diagonal = GridEdge {
            tail: 0,
            head: 4,
            direction: 7,
        };

        assert_eq!(weigher.weight(&straight), 5);
        assert_eq!(weigher.weight(&diagonal), 7);
    }
}
