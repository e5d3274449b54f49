//! Simple Binary Heap implementation
//!
//! The textbook array-backed binary min-heap, over the same
//! [`PriorityElement`] contract and with the same sift rules as
//! [`LinkedBinaryHeap`](crate::linked_binary::LinkedBinaryHeap): sift-up swaps
//! only past a strictly greater parent, and sift-down prefers the left child
//! when both children tie.
//!
//! Because the two heaps place elements identically, this one serves as the
//! reference the linked heap is checked and benchmarked against.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `peek`    | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use linked_tree_heap::Heap;
//! use linked_tree_heap::simple_binary::SimpleBinaryHeap;
//!
//! let mut heap = SimpleBinaryHeap::new();
//! heap.push(3);
//! heap.push(1);
//! heap.push(2);
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(2));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), None);
//! ```

use crate::traits::{Heap, PriorityElement};

/// A simple binary min-heap stored in a vector
#[derive(Debug, Clone)]
pub struct SimpleBinaryHeap<T> {
    /// Elements in level order; the children of `i` are `2i + 1` and `2i + 2`
    data: Vec<T>,
}

impl<T: PriorityElement> Heap<T> for SimpleBinaryHeap<T> {
    fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop();

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        result
    }
}

impl<T: PriorityElement> SimpleBinaryHeap<T> {
    /// Elements in level order, root first
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index].precedes(&self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.data[left].precedes(&self.data[smallest]) {
                smallest = left;
            }
            if right < len && self.data[right].precedes(&self.data[smallest]) {
                smallest = right;
            }

            if smallest != index {
                self.data.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}

impl<T: PriorityElement> Default for SimpleBinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
