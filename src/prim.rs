//! Prim's minimum spanning tree over an adjacency matrix
//!
//! The search keeps a visited set and a min-heap of candidate edges. Starting
//! from one vertex, it pushes every edge leading out of the tree, then
//! repeatedly pops the cheapest candidate: if its destination is new, the edge
//! joins the tree and the destination's own outgoing edges are pushed. Stale
//! candidates, whose destination was reached some other way, are skipped when
//! popped. The search ends when the heap runs dry.
//!
//! The heap is a type parameter, so any [`Heap`] over [`Edge`] can drive it.
//!
//! # Example
//!
//! ```rust
//! use linked_tree_heap::graph::AdjacencyMatrix;
//! use linked_tree_heap::prim::minimum_spanning_tree;
//!
//! let graph = AdjacencyMatrix::<u32>::from_rows([
//!     [0, 3, 65, 0, 0],
//!     [3, 0, 85, 20, 45],
//!     [65, 85, 0, 41, 77],
//!     [0, 20, 41, 0, 51],
//!     [0, 45, 77, 51, 0],
//! ])
//! .unwrap();
//!
//! let tree = minimum_spanning_tree(&graph);
//! assert!(tree.is_spanning());
//! assert_eq!(tree.total_cost(), 109);
//! ```

use crate::edge::{Edge, Weight};
use crate::error::GraphError;
use crate::graph::AdjacencyMatrix;
use crate::linked_binary::LinkedBinaryHeap;
use crate::traits::Heap;
use log::{debug, trace};
use std::fmt;

/// Header line printed above a spanning tree's edges
pub const REPORT_HEADER: &str = "Prim's MST is Edge -> Cost";

/// The edges accepted by a Prim's search, in acceptance order
///
/// On a disconnected graph this is the spanning tree of the start vertex's
/// component only; [`is_spanning`](SpanningTree::is_spanning) tells the two
/// cases apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree<W> {
    edges: Vec<Edge<W>>,
    visited: Vec<bool>,
}

impl<W: Weight> SpanningTree<W> {
    /// Accepted edges, in the order the search accepted them
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Sum of the accepted edges' costs
    pub fn total_cost(&self) -> W {
        self.edges
            .iter()
            .fold(W::default(), |total, edge| total + edge.cost)
    }

    /// Whether the search reached `vertex`
    pub fn visited(&self, vertex: usize) -> bool {
        self.visited.get(vertex).copied().unwrap_or(false)
    }

    /// Number of vertices the search reached, the start vertex included
    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&&v| v).count()
    }

    /// True if every vertex of the graph was reached
    pub fn is_spanning(&self) -> bool {
        self.visited.iter().all(|&v| v)
    }

    pub fn into_edges(self) -> Vec<Edge<W>> {
        self.edges
    }
}

/// Renders the header line, then one `<source> - <dest> -> <cost>` line per edge
impl<W: fmt::Display> fmt::Display for SpanningTree<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", REPORT_HEADER)?;
        for edge in &self.edges {
            writeln!(f, "{}", edge)?;
        }
        Ok(())
    }
}

/// Runs Prim's algorithm from vertex 0 using a [`LinkedBinaryHeap`]
pub fn minimum_spanning_tree<W: Weight>(graph: &AdjacencyMatrix<W>) -> SpanningTree<W> {
    // An AdjacencyMatrix always has at least one vertex
    grow::<W, LinkedBinaryHeap<Edge<W>>>(graph, 0)
}

/// Runs Prim's algorithm from `start`, with `H` as the candidate-edge queue
///
/// # Errors
/// Returns [`GraphError::VertexOutOfRange`] if `start` is not a vertex of `graph`.
///
/// # Example
/// ```rust
/// use linked_tree_heap::graph::AdjacencyMatrix;
/// use linked_tree_heap::prim::minimum_spanning_tree_from;
/// use linked_tree_heap::simple_binary::SimpleBinaryHeap;
///
/// let graph: AdjacencyMatrix<u32> = "0 2 0\n2 0 5\n0 5 0".parse().unwrap();
/// let tree = minimum_spanning_tree_from::<_, SimpleBinaryHeap<_>>(&graph, 2).unwrap();
/// assert_eq!(tree.to_string(), "Prim's MST is Edge -> Cost\n2 - 1 -> 5\n1 - 0 -> 2\n");
/// ```
pub fn minimum_spanning_tree_from<W, H>(
    graph: &AdjacencyMatrix<W>,
    start: usize,
) -> Result<SpanningTree<W>, GraphError>
where
    W: Weight,
    H: Heap<Edge<W>>,
{
    graph.check_vertex(start)?;
    Ok(grow::<W, H>(graph, start))
}

/// Internal search; `start` must be in range.
fn grow<W, H>(graph: &AdjacencyMatrix<W>, start: usize) -> SpanningTree<W>
where
    W: Weight,
    H: Heap<Edge<W>>,
{
    let vertex_count = graph.vertex_count();
    let mut heap = H::new();
    let mut visited = vec![false; vertex_count];
    let mut edges = Vec::with_capacity(vertex_count.saturating_sub(1));

    visited[start] = true;
    push_frontier(graph, start, &visited, &mut heap);
    debug!("prim: starting at v{} with {} candidate edges", start, heap.len());

    while let Some(edge) = heap.pop() {
        if visited[edge.destination] {
            trace!(
                "prim: v{} -> v{} is stale, v{} already in the tree",
                edge.source,
                edge.destination,
                edge.destination
            );
            continue;
        }

        visited[edge.destination] = true;
        debug!(
            "prim: accepted v{} -> v{} ({} in tree, {} queued)",
            edge.source,
            edge.destination,
            edges.len() + 2,
            heap.len()
        );
        edges.push(edge);
        push_frontier(graph, edge.destination, &visited, &mut heap);
    }

    let tree = SpanningTree { edges, visited };
    debug!(
        "prim: reached {} of {} vertices with {} edges",
        tree.visited_count(),
        vertex_count,
        tree.edges.len()
    );
    tree
}

/// Push every edge from `vertex` to a vertex not yet in the tree
fn push_frontier<W, H>(graph: &AdjacencyMatrix<W>, vertex: usize, visited: &[bool], heap: &mut H)
where
    W: Weight,
    H: Heap<Edge<W>>,
{
    for edge in graph.edges_from(vertex) {
        if !visited[edge.destination] {
            heap.push(edge);
        }
    }
}
