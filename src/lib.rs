//! Linked complete binary heaps
//!
//! This crate provides a binary min-heap whose complete tree is made of
//! nodes joined by parent and child links rather than stored in an array,
//! together with a Prim's minimum-spanning-tree search that runs on it.
//!
//! # Contents
//!
//! - **[`LinkedBinaryHeap`](linked_binary::LinkedBinaryHeap)**: O(log n) push and pop; the next
//!   free slot and the last node are both found from the element count by a bit-walk
//! - **[`SimpleBinaryHeap`](simple_binary::SimpleBinaryHeap)**: the array-backed heap with the
//!   same sift rules, used as a reference
//! - **[`PriorityElement`]**: the three-way comparison every payload exposes
//! - **[`prim`]**: minimum spanning trees over an [`AdjacencyMatrix`](graph::AdjacencyMatrix)
//!
//! # Example
//!
//! ```rust
//! use linked_tree_heap::edge::Edge;
//! use linked_tree_heap::linked_binary::LinkedBinaryHeap;
//! use linked_tree_heap::Heap;
//!
//! let mut heap = LinkedBinaryHeap::new();
//! heap.push(Edge::new(0, 2, 65u32));
//! heap.push(Edge::new(0, 1, 3u32));
//! assert_eq!(heap.pop(), Some(Edge::new(0, 1, 3)));
//! ```

pub mod edge;
pub mod error;
pub mod graph;
pub mod linked_binary;
pub mod path;
pub mod prim;
pub mod simple_binary;
pub mod traits;

// Re-export the main traits for convenience
pub use traits::{Heap, PriorityElement};
