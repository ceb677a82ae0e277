use std::{fs::File, io::BufReader, path::Path};

use clap::ValueEnum;
use error::GraphError;
use graphs::{read_edges_from_fmi_file, vec_vec_graph::VecVecGraph};
use utility::get_progressspinner;

pub mod error;
pub mod graphs;
pub mod queue;
pub mod search;
pub mod utility;

#[derive(Debug, ValueEnum, Clone, Copy)]
pub enum FileType {
    Fmi,
    Bincode,
}

pub fn read_graph(path: &Path, file_type: FileType) -> Result<VecVecGraph, GraphError> {
    let spinner = get_progressspinner("Reading graph");
    let graph = match file_type {
        FileType::Fmi => {
            let (number_of_vertices, edges) = read_edges_from_fmi_file(path)?;
            let mut graph = VecVecGraph::with_vertices(number_of_vertices);
            graph.add_edges(&edges);
            graph
        }
        FileType::Bincode => {
            let reader = BufReader::new(File::open(path)?);
            bincode::deserialize_from(reader)?
        }
    };
    spinner.finish_and_clear();
    Ok(graph)
}
