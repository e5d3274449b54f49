//! Prints the minimum spanning tree of a weighted graph
//!
//! ```bash
//! # Built-in five-vertex sample
//! cargo run --bin prim
//!
//! # Matrix file: one row per line, entries separated by spaces or commas,
//! # `#` comments allowed; the optional second argument is the start vertex
//! cargo run --bin prim -- graph.txt 2
//!
//! # Trace every heap push and pop
//! RUST_LOG=trace cargo run --bin prim
//! ```

use linked_tree_heap::graph::AdjacencyMatrix;
use linked_tree_heap::linked_binary::LinkedBinaryHeap;
use linked_tree_heap::prim::minimum_spanning_tree_from;
use log::{info, warn};
use std::error::Error;

const SAMPLE: [[u32; 5]; 5] = [
    [0, 3, 65, 0, 0],
    [3, 0, 85, 20, 45],
    [65, 85, 0, 41, 77],
    [0, 20, 41, 0, 51],
    [0, 45, 77, 51, 0],
];

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);

    let graph = match args.next() {
        Some(path) => {
            info!("reading adjacency matrix from {}", path);
            std::fs::read_to_string(&path)?.parse::<AdjacencyMatrix<u32>>()?
        }
        None => AdjacencyMatrix::from_rows(SAMPLE)?,
    };

    let start = match args.next() {
        Some(arg) => arg.parse::<usize>()?,
        None => 0,
    };

    let tree = minimum_spanning_tree_from::<_, LinkedBinaryHeap<_>>(&graph, start)?;
    if !tree.is_spanning() {
        warn!(
            "graph is disconnected: reached {} of {} vertices from v{}",
            tree.visited_count(),
            graph.vertex_count(),
            start
        );
    }

    print!("{}", tree);
    Ok(())
}
