//! Common traits for the heaps in this crate
//!
//! - [`PriorityElement`]: the three-way comparison contract every payload exposes
//! - [`Heap`]: the priority-queue interface shared by the linked and the
//!   array-backed heaps, so graph algorithms can be written once over either
//!
//! Unlike the standard `BinaryHeap`, heaps here are min-heaps and never look at
//! a payload's fields: every ordering decision goes through
//! [`PriorityElement::compare`].

use std::cmp::Ordering;

/// A payload that can be ordered inside a heap
///
/// `compare` must describe a total preorder over the values that share a heap
/// (reflexive, transitive, and every pair comparable). Equal results are allowed
/// for distinct values; the heap then breaks ties arbitrarily.
///
/// A `compare` that violates this contract is not detected. The heap will keep
/// its tree shape, but the heap order and therefore the extraction order are
/// no longer guaranteed.
///
/// Every `Ord` type is a `PriorityElement` through its natural order. Types
/// that order by a single field (such as [`Edge`](crate::edge::Edge), which
/// orders by cost only) implement the trait directly instead of `Ord`, keeping
/// equality and ordering separate.
pub trait PriorityElement {
    /// Three-way comparison of `self` against `other`
    fn compare(&self, other: &Self) -> Ordering;

    /// Returns true if `self` orders strictly before `other`
    #[inline]
    fn precedes(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }
}

impl<T: Ord> PriorityElement for T {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

/// Base trait for min-heap priority queues
///
/// The item itself carries its priority, as with `std::collections::BinaryHeap`:
/// - `push` inserts an element
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// # Example
///
/// ```rust
/// use linked_tree_heap::Heap;
/// use linked_tree_heap::linked_binary::LinkedBinaryHeap;
///
/// let mut heap = LinkedBinaryHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<T: PriorityElement> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T);

    /// Returns the minimum element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum element, or `None` if the heap is empty
    ///
    /// When several elements compare equal to the minimum, which one is
    /// returned depends on the heap's internal layout.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;
}
