use fixedbitset::FixedBitSet;
use tracing::{debug, trace};

use super::snapshot::{PathSnapshot, NO_PREDECESSOR, UNKNOWN_DISTANCE};
use crate::{
    error::SearchError,
    graphs::{Distance, Graph, HeadVertex, Vertex, Weigher},
    queue::{heap_queue::HeapMinQueue, MinQueue},
};

/// Incrementally solves single source shortest paths on `graph` with edge
/// costs given by `weigher`.
///
/// After `set_start` each call to `extend_search` settles at most the
/// requested number of additional vertices and keeps all state for the next
/// call, so a search can be advanced in small steps and inspected in between.
pub struct ShortestPaths<'a, G: Graph, W, Q = HeapMinQueue<Vertex, Distance>> {
    graph: &'a G,
    weigher: W,
    start: Option<Vertex>,
    distances: Vec<Distance>,
    predecessors: Vec<Vertex>,
    settled: FixedBitSet,
    settled_count: usize,
    frontier: Q,
}

impl<'a, G, W> ShortestPaths<'a, G, W>
where
    G: Graph,
    W: Weigher<G::Edge>,
{
    pub fn new(graph: &'a G, weigher: W) -> Self {
        Self::with_queue(graph, weigher, HeapMinQueue::new())
    }
}

impl<'a, G, W, Q> ShortestPaths<'a, G, W, Q>
where
    G: Graph,
    W: Weigher<G::Edge>,
    Q: MinQueue<Vertex, Distance>,
{
    /// Uses `frontier` as queue of discovered but unsettled vertices. Any
    /// content it has is discarded.
    pub fn with_queue(graph: &'a G, weigher: W, mut frontier: Q) -> Self {
        let number_of_vertices = graph.number_of_vertices() as usize;
        frontier.clear();
        ShortestPaths {
            graph,
            weigher,
            start: None,
            distances: vec![UNKNOWN_DISTANCE; number_of_vertices],
            predecessors: vec![NO_PREDECESSOR; number_of_vertices],
            settled: FixedBitSet::with_capacity(number_of_vertices),
            settled_count: 0,
            frontier,
        }
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.graph.number_of_vertices()
    }

    /// Number of vertices whose shortest path from the current start is
    /// known.
    pub fn settled_count(&self) -> usize {
        self.settled_count
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn start(&self) -> Option<Vertex> {
        self.start
    }

    /// Whether shortest paths to all vertices reachable from the start are
    /// known. False as long as no start is set.
    pub fn all_paths_found(&self) -> bool {
        self.start.is_some() && self.frontier.is_empty()
    }

    /// Discards all results of the previous search and makes `start` the
    /// source of the next one.
    pub fn set_start(&mut self, start: Vertex) -> Result<(), SearchError> {
        if start >= self.number_of_vertices() {
            return Err(SearchError::VertexOutOfRange {
                vertex: start,
                number_of_vertices: self.number_of_vertices(),
            });
        }

        self.reset();
        self.start = Some(start);
        self.distances[start as usize] = 0;
        self.frontier.add_or_update(start, 0);

        debug!(start, "starting new search");
        Ok(())
    }

    /// Settles up to `max_to_settle` further vertices, closest first, and
    /// returns a snapshot of the resulting state. Returns early once every
    /// reachable vertex is settled. Ties between equally close vertices are
    /// settled in unspecified order.
    pub fn extend_search(&mut self, max_to_settle: usize) -> Result<PathSnapshot, SearchError> {
        if self.start.is_none() {
            return Err(SearchError::NoStart);
        }

        let graph = self.graph;
        let mut newly_settled = 0;
        while newly_settled < max_to_settle {
            let Ok(tail) = self.frontier.remove() else {
                break;
            };

            if self.settled.put(tail as usize) {
                trace!(tail, "skipping already settled vertex");
                continue;
            }
            newly_settled += 1;
            self.settled_count += 1;

            let distance_tail = self.distances[tail as usize];
            for edge in graph.edges(tail) {
                let head = edge.head();
                let alternative_distance_head =
                    distance_tail.saturating_add(Distance::from(self.weigher.weight(&edge)));
                if alternative_distance_head < self.distances[head as usize] {
                    self.distances[head as usize] = alternative_distance_head;
                    self.predecessors[head as usize] = tail;
                    self.frontier.add_or_update(head, alternative_distance_head);
                }
            }
        }

        debug!(
            newly_settled,
            settled = self.settled_count,
            frontier = self.frontier.len(),
            finished = self.all_paths_found(),
            "extended search"
        );
        self.snapshot()
    }

    /// Sets `start` and searches until every reachable vertex is settled.
    pub fn find_all_paths(&mut self, start: Vertex) -> Result<PathSnapshot, SearchError> {
        self.set_start(start)?;
        let snapshot = self.extend_search(self.number_of_vertices() as usize)?;
        debug_assert!(self.all_paths_found());
        Ok(snapshot)
    }

    /// A copy of the current search state.
    pub fn snapshot(&self) -> Result<PathSnapshot, SearchError> {
        let start = self.start.ok_or(SearchError::NoStart)?;
        Ok(PathSnapshot::new(
            start,
            self.distances.clone(),
            self.predecessors.clone(),
            self.settled.clone(),
            self.settled_count,
            self.all_paths_found(),
        ))
    }

    fn reset(&mut self) {
        self.distances.fill(UNKNOWN_DISTANCE);
        self.predecessors.fill(NO_PREDECESSOR);
        self.settled.clear();
        self.settled_count = 0;
        self.frontier.clear();
        self.start = None;
    }
}
