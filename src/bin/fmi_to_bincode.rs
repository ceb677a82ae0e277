use std::{fs::File, io::BufWriter, path::PathBuf, time::Instant};

use clap::Parser;
use incremental_paths::{error::GraphError, graphs::Graph, read_graph, FileType};
use tracing::info;

/// Reading a .bincode file is way faster than a .fmi file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Infile in .fmi format
    #[arg(short = 'f', long)]
    graph_fmi: PathBuf,
    /// Outfile in .bincode format
    #[arg(short = 'b', long)]
    graph_bincode: PathBuf,
}

fn main() -> Result<(), GraphError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let start = Instant::now();
    let graph = read_graph(&args.graph_fmi, FileType::Fmi)?;
    info!(
        vertices = graph.number_of_vertices(),
        "reading fmi graph took {:?}",
        start.elapsed()
    );

    let start = Instant::now();
    let writer = BufWriter::new(File::create(&args.graph_bincode)?);
    bincode::serialize_into(writer, &graph)?;
    info!("writing bincode took {:?}", start.elapsed());

    Ok(())
}
