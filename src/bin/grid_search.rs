use std::time::Instant;

use clap::Parser;
use incremental_paths::{
    error::SearchError,
    graphs::{
        grid_graph::{GridEdge, GridGraph},
        Graph, Weigher,
    },
    search::ShortestPaths,
    utility::random_vertex_costs,
};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

/// Runs an incremental search over a grid with random cell costs, starting
/// in the top left corner, and reports the settled area after every batch.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 512)]
    width: u32,
    #[arg(long, default_value_t = 512)]
    height: u32,
    /// Seed for the cell costs
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
    /// Number of vertices settled per batch
    #[arg(short, long, default_value_t = 10_000)]
    batch_size: usize,
}

/// Entering a cell costs its cell cost, diagonal steps cost 1.4 times as much.
struct CellCost {
    costs: Vec<u32>,
}

impl Weigher<GridEdge> for CellCost {
    fn weight(&self, edge: &GridEdge) -> u32 {
        let cost = self.costs[edge.head as usize];
        if edge.is_diagonal() {
            cost * 7 / 5
        } else {
            cost
        }
    }
}

fn main() -> Result<(), SearchError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let grid = GridGraph::new(args.width, args.height);
    let mut rng = StdRng::seed_from_u64(args.seed);
    let weigher = CellCost {
        costs: random_vertex_costs(&mut rng, grid.number_of_vertices(), 255),
    };

    let mut search = ShortestPaths::new(&grid, weigher);
    search.set_start(0)?;

    let start = Instant::now();
    let mut batches = 0;
    while !search.all_paths_found() {
        let snapshot = search.extend_search(args.batch_size.max(1))?;
        batches += 1;
        info!(
            batch = batches,
            settled = snapshot.settled_count(),
            "{:.1}% settled",
            100.0 * snapshot.settled_count() as f64 / grid.number_of_vertices().max(1) as f64
        );
    }

    let snapshot = search.snapshot()?;
    let corner = grid.number_of_vertices().saturating_sub(1);
    let path = snapshot.path_to(corner)?;
    info!(
        batches,
        distance = path.distance,
        edges = path.len(),
        "reached the opposite corner after {:?}",
        start.elapsed()
    );

    Ok(())
}
