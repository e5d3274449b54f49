//! Helpers shared by the integration tests

#![allow(dead_code)]

use linked_tree_heap::graph::AdjacencyMatrix;

/// Routes `log` output through `env_logger`; safe to call from every test
pub fn init_logging() {
    drop(env_logger::builder().is_test(true).try_init());
}

/// The five-vertex sample graph, MST weight 109
pub fn sample_graph() -> AdjacencyMatrix<u32> {
    AdjacencyMatrix::<u32>::from_rows([
        [0, 3, 65, 0, 0],
        [3, 0, 85, 20, 45],
        [65, 85, 0, 41, 77],
        [0, 20, 41, 0, 51],
        [0, 45, 77, 51, 0],
    ])
    .unwrap()
}
