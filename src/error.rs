//! Error types for heap verification and graph input

use std::fmt;

/// A broken structural invariant, reported by
/// [`LinkedBinaryHeap::verify_invariants`](crate::linked_binary::LinkedBinaryHeap::verify_invariants)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// A child's parent link does not point back at the node holding it
    BrokenParentLink {
        /// 1-based level-order position of the child
        position: usize,
    },
    /// A child orders strictly before its parent
    HeapOrderViolated {
        /// 1-based level-order position of the offending child
        position: usize,
    },
    /// A node sits outside the first `len` level-order positions
    ShapeViolated {
        /// 1-based level-order position of the misplaced node
        position: usize,
    },
    /// The element count disagrees with the nodes actually reachable
    CountMismatch {
        /// The count the heap reports
        expected: usize,
        /// The number of nodes found
        found: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::BrokenParentLink { position } => {
                write!(f, "node at position {} has a stale parent link", position)
            }
            HeapError::HeapOrderViolated { position } => {
                write!(
                    f,
                    "node at position {} orders before its parent",
                    position
                )
            }
            HeapError::ShapeViolated { position } => {
                write!(
                    f,
                    "node at position {} lies outside the complete tree",
                    position
                )
            }
            HeapError::CountMismatch { expected, found } => {
                write!(
                    f,
                    "heap reports {} elements but {} nodes are reachable",
                    expected, found
                )
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Error type for building graphs and running spanning-tree searches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A matrix row does not have one entry per vertex
    NotSquare {
        /// Index of the offending row
        row: usize,
        /// Number of entries in that row
        len: usize,
        /// Number of rows in the matrix
        expected: usize,
    },
    /// A vertex index is not below the vertex count
    VertexOutOfRange {
        /// The requested vertex
        vertex: usize,
        /// Number of vertices in the graph
        vertex_count: usize,
    },
    /// A matrix entry could not be parsed as a weight
    Parse {
        /// 1-based line number in the input
        line: usize,
        /// The token that failed to parse
        token: String,
    },
    /// The input contained no rows
    Empty,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::NotSquare { row, len, expected } => {
                write!(
                    f,
                    "row {} has {} entries, expected {} for a square matrix",
                    row, len, expected
                )
            }
            GraphError::VertexOutOfRange {
                vertex,
                vertex_count,
            } => {
                write!(
                    f,
                    "vertex {} is out of range for a graph with {} vertices",
                    vertex, vertex_count
                )
            }
            GraphError::Parse { line, token } => {
                write!(f, "line {}: cannot parse weight {:?}", line, token)
            }
            GraphError::Empty => write!(f, "adjacency matrix has no rows"),
        }
    }
}

impl std::error::Error for GraphError {}
