use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use incremental_paths::{
    graphs::{EdgeWeight, Graph, Vertex},
    read_graph,
    search::ShortestPaths,
    utility::get_progressbar,
    FileType,
};
use tracing::{error, info};

/// Searches shortest paths from a source in batches, reporting progress
/// after every batch.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input graph
    #[arg(short, long)]
    graph: PathBuf,
    #[arg(short, long, value_enum, default_value = "fmi")]
    file_type: FileType,
    /// Vertex to search from
    #[arg(short, long)]
    source: Vertex,
    /// Prints the path to this vertex as json once it is settled
    #[arg(short, long)]
    target: Option<Vertex>,
    /// Number of vertices settled per batch
    #[arg(short, long, default_value_t = 1000)]
    batch_size: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let graph = match read_graph(&args.graph, args.file_type) {
        Ok(graph) => graph,
        Err(err) => {
            error!("unable to read {}: {}", args.graph.display(), err);
            return ExitCode::FAILURE;
        }
    };
    info!(
        vertices = graph.number_of_vertices(),
        edges = graph.number_of_edges(),
        "read graph"
    );

    let mut search = ShortestPaths::new(&graph, EdgeWeight);
    if let Err(err) = search.set_start(args.source) {
        error!("{}", err);
        return ExitCode::FAILURE;
    }

    let bar = get_progressbar("Settling vertices", graph.number_of_vertices() as u64);
    let start = Instant::now();
    let mut snapshot = None;
    while !search.all_paths_found() {
        let batch = match search.extend_search(args.batch_size.max(1)) {
            Ok(batch) => batch,
            Err(err) => {
                error!("{}", err);
                return ExitCode::FAILURE;
            }
        };
        bar.set_position(batch.settled_count() as u64);

        let target_settled = args.target.is_some_and(|target| {
            target < batch.number_of_vertices() && batch.is_settled(target)
        });
        snapshot = Some(batch);
        if target_settled {
            break;
        }
    }
    bar.finish_and_clear();
    info!(
        settled = search.settled_count(),
        finished = search.all_paths_found(),
        "search took {:?}",
        start.elapsed()
    );

    let (Some(target), Some(snapshot)) = (args.target, snapshot) else {
        return ExitCode::SUCCESS;
    };
    match snapshot.path_to(target) {
        Ok(path) => match serde_json::to_string(&path) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                error!("unable to serialize path: {}", err);
                return ExitCode::FAILURE;
            }
        },
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
