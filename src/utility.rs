use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;

use crate::graphs::{Weight, WeightedEdge};

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    bar.set_style(
        ProgressStyle::with_template(" {msg} {wide_bar} {pos}/{len} ({percent}%) eta: {eta}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}

pub fn get_progressspinner(job_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(job_name.to_string());
    spinner
}

/// Random directed edges with weights in `[0, max_weight]`. Self loops and
/// parallel edges may occur.
pub fn random_edges(
    rng: &mut impl Rng,
    number_of_vertices: u32,
    number_of_edges: u32,
    max_weight: Weight,
) -> Vec<WeightedEdge> {
    assert!(number_of_vertices > 0 || number_of_edges == 0);
    (0..number_of_edges)
        .map(|_| {
            WeightedEdge::new(
                rng.gen_range(0..number_of_vertices),
                rng.gen_range(0..number_of_vertices),
                rng.gen_range(0..=max_weight),
            )
        })
        .collect()
}

/// Per-vertex costs in `[1, max_cost]`, e.g. to weigh the edges of a grid by
/// the cell they lead to.
pub fn random_vertex_costs(rng: &mut impl Rng, number_of_vertices: u32, max_cost: Weight) -> Vec<Weight> {
    (0..number_of_vertices)
        .map(|_| rng.gen_range(1..=max_cost.max(1)))
        .collect()
}
