//! Linked Binary Heap implementation
//!
//! A binary min-heap whose complete tree is built from nodes joined by
//! parent, left-child and right-child links instead of being laid out in a
//! flat array.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `peek`    | O(1)       |
//! | `clear`   | O(n)       |
//!
//! # Addressing
//!
//! There is no array index to tell where the next slot or the last node is.
//! Both are recovered from the element count: the slot at 1-based level-order
//! position `p` is reached from the root by reading `p` in binary after its
//! leading bit, 0 meaning left and 1 meaning right (see [`crate::path`]).
//! Insertion attaches at position `len + 1`; extraction removes the node at
//! position `len`. Using one addressing scheme for both keeps the tree
//! complete for every element count.
//!
//! # Ownership
//!
//! Nodes live in a [`SlotMap`] arena owned by the heap, and every link is an
//! arena key. Parent links are plain lookups, so the parent/child pair never
//! forms an ownership cycle, and each node is released exactly once: when
//! `pop` removes it, or when [`clear`](LinkedBinaryHeap::clear) or drop tears
//! the tree down.
//!
//! # Ties
//!
//! During sift-down the left child is compared first and only displaced by a
//! right child that orders strictly before it, so when both children tie the
//! left one moves up. Extraction order among equal elements follows from this.
//!
//! # Example
//!
//! ```rust
//! use linked_tree_heap::Heap;
//! use linked_tree_heap::linked_binary::LinkedBinaryHeap;
//!
//! let mut heap = LinkedBinaryHeap::new();
//! for cost in [3, 65, 85, 20, 45] {
//!     heap.push(cost);
//! }
//!
//! assert_eq!(heap.len(), 5);
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), Some(20));
//! assert_eq!(heap.pop(), Some(45));
//! assert_eq!(heap.pop(), Some(65));
//! assert_eq!(heap.pop(), Some(85));
//! assert_eq!(heap.pop(), None);
//! ```

use crate::error::HeapError;
use crate::path::{self, Direction, TreePath};
use crate::traits::{Heap, PriorityElement};
use log::trace;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::fmt;

new_key_type! {
    /// Arena key of a tree node
    struct NodeKey;
}

#[derive(Clone)]
struct Node<T> {
    item: T,
    parent: Option<NodeKey>,
    left: Option<NodeKey>,
    right: Option<NodeKey>,
}

impl<T> Node<T> {
    fn new(item: T, parent: Option<NodeKey>) -> Self {
        Node {
            item,
            parent,
            left: None,
            right: None,
        }
    }

    #[inline]
    fn child(&self, side: Direction) -> Option<NodeKey> {
        match side {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    #[inline]
    fn child_mut(&mut self, side: Direction) -> &mut Option<NodeKey> {
        match side {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// A binary min-heap stored as a pointer-linked complete binary tree
///
/// Elements are ordered through [`PriorityElement::compare`] only.
#[derive(Clone)]
pub struct LinkedBinaryHeap<T> {
    nodes: SlotMap<NodeKey, Node<T>>,
    root: Option<NodeKey>,
    len: usize,
}

impl<T: PriorityElement> Heap<T> for LinkedBinaryHeap<T> {
    fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root: None,
            len: 0,
        }
    }

    fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn push(&mut self, item: T) {
        let position = self.len + 1;

        let key = match self.root {
            None => {
                let key = self.nodes.insert(Node::new(item, None));
                self.root = Some(key);
                key
            }
            Some(_) => {
                let parent = self
                    .locate(position / 2)
                    .expect("complete tree is missing the parent of its next slot");
                let side = side_of(position);
                let key = self.nodes.insert(Node::new(item, Some(parent)));
                *self.nodes[parent].child_mut(side) = Some(key);
                key
            }
        };

        self.len = position;
        trace!("attached node at position {}", position);

        self.sift_up(key);
        debug_assert_eq!(self.nodes.len(), self.len);
    }

    fn peek(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[root].item)
    }

    fn pop(&mut self) -> Option<T> {
        let root = self.root?;
        let last = self
            .locate(self.len)
            .expect("complete tree is missing its last node");

        let last_node = self.detach_leaf(last);
        trace!("detached node at position {}", self.len);
        self.len -= 1;

        let min = if last == root {
            self.root = None;
            last_node.item
        } else {
            let min = std::mem::replace(&mut self.nodes[root].item, last_node.item);
            self.sift_down(root);
            min
        };

        debug_assert_eq!(self.nodes.len(), self.len);
        Some(min)
    }
}

impl<T: PriorityElement> LinkedBinaryHeap<T> {
    /// Creates a heap holding a single element
    pub fn with_root(item: T) -> Self {
        let mut heap = Self::new();
        heap.push(item);
        heap
    }

    /// Removes every element and returns them in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len);
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Checks the shape, heap-order and count invariants
    ///
    /// Walks the whole tree breadth-first, so this is O(n). Every child must
    /// link back to its parent and must not order before it; every node must
    /// sit within the first `len` level-order positions; and exactly `len`
    /// nodes must be reachable from the root and alive in the arena.
    pub fn verify_invariants(&self) -> Result<(), HeapError> {
        let mut queue = VecDeque::new();
        let mut found = 0;

        if let Some(root) = self.root {
            if self.nodes[root].parent.is_some() {
                return Err(HeapError::BrokenParentLink { position: 1 });
            }
            queue.push_back((root, 1usize));
        }

        while let Some((key, position)) = queue.pop_front() {
            if position > self.len {
                return Err(HeapError::ShapeViolated { position });
            }
            found += 1;

            let node = &self.nodes[key];
            let children = [(node.left, 2 * position), (node.right, 2 * position + 1)];
            for (child, child_position) in children {
                let Some(child) = child else { continue };
                let child_node = &self.nodes[child];
                if child_node.parent != Some(key) {
                    return Err(HeapError::BrokenParentLink {
                        position: child_position,
                    });
                }
                if child_node.item.precedes(&node.item) {
                    return Err(HeapError::HeapOrderViolated {
                        position: child_position,
                    });
                }
                queue.push_back((child, child_position));
            }
        }

        if found != self.len {
            return Err(HeapError::CountMismatch {
                expected: self.len,
                found,
            });
        }
        if self.nodes.len() != self.len {
            return Err(HeapError::CountMismatch {
                expected: self.len,
                found: self.nodes.len(),
            });
        }
        Ok(())
    }

    /// Move the item at `key` up while its parent orders strictly after it
    fn sift_up(&mut self, mut key: NodeKey) {
        while let Some(parent) = self.nodes[key].parent {
            if !self.nodes[key].item.precedes(&self.nodes[parent].item) {
                break;
            }
            self.swap_items(key, parent);
            key = parent;
        }
    }

    /// Move the item at `key` down towards its smaller child
    ///
    /// Left is compared first, so on a tie between the children the left
    /// child is the swap target.
    fn sift_down(&mut self, mut key: NodeKey) {
        loop {
            let (left, right) = {
                let node = &self.nodes[key];
                (node.left, node.right)
            };

            let mut smallest = key;
            if let Some(left) = left {
                if self.nodes[left].item.precedes(&self.nodes[smallest].item) {
                    smallest = left;
                }
            }
            if let Some(right) = right {
                if self.nodes[right].item.precedes(&self.nodes[smallest].item) {
                    smallest = right;
                }
            }

            if smallest == key {
                break;
            }
            self.swap_items(key, smallest);
            key = smallest;
        }
    }
}

impl<T> LinkedBinaryHeap<T> {
    /// Returns the height of the tree; a heap with zero or one element has height 0
    pub fn height(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            path::depth(self.len) as usize
        }
    }

    /// Iterates over the elements in level order, root first
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder {
            nodes: &self.nodes,
            queue: self.root.into_iter().collect(),
        }
    }

    /// Removes every element, releasing the nodes in post-order
    ///
    /// Both subtrees of a node are released before the node itself. The walk
    /// uses an explicit stack, so tree height never bounds the call stack.
    pub fn clear(&mut self) {
        let mut stack: SmallVec<[(NodeKey, bool); 64]> = SmallVec::new();
        if let Some(root) = self.root.take() {
            stack.push((root, false));
        }

        while let Some((key, expanded)) = stack.pop() {
            if expanded {
                self.nodes.remove(key);
                continue;
            }
            stack.push((key, true));
            let node = &self.nodes[key];
            if let Some(right) = node.right {
                stack.push((right, false));
            }
            if let Some(left) = node.left {
                stack.push((left, false));
            }
        }

        self.len = 0;
        debug_assert!(self.nodes.is_empty());
    }

    /// Walk from the root to a 1-based level-order position
    fn locate(&self, position: usize) -> Option<NodeKey> {
        let mut current = self.root?;
        for step in TreePath::new(position) {
            current = self.nodes[current].child(step)?;
        }
        Some(current)
    }

    /// Remove a leaf from the arena and clear its parent's link to it
    fn detach_leaf(&mut self, key: NodeKey) -> Node<T> {
        let node = self
            .nodes
            .remove(key)
            .expect("detached node must be live in the arena");
        debug_assert!(node.is_leaf());

        if let Some(parent) = node.parent {
            let parent = &mut self.nodes[parent];
            if parent.left == Some(key) {
                parent.left = None;
            } else if parent.right == Some(key) {
                parent.right = None;
            }
        }
        node
    }

    /// Exchange the payloads of two distinct nodes; the nodes stay in place
    fn swap_items(&mut self, a: NodeKey, b: NodeKey) {
        if let Some([a, b]) = self.nodes.get_disjoint_mut([a, b]) {
            std::mem::swap(&mut a.item, &mut b.item);
        }
    }
}

/// Which child of its parent a non-root position is
#[inline]
fn side_of(position: usize) -> Direction {
    if position & 1 == 0 {
        Direction::Left
    } else {
        Direction::Right
    }
}

impl<T> Drop for LinkedBinaryHeap<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: PriorityElement> Default for LinkedBinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PriorityElement> FromIterator<T> for LinkedBinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T: PriorityElement> Extend<T> for LinkedBinaryHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedBinaryHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.level_order()).finish()
    }
}

/// Breadth-first iterator over a [`LinkedBinaryHeap`]
pub struct LevelOrder<'a, T> {
    nodes: &'a SlotMap<NodeKey, Node<T>>,
    queue: VecDeque<NodeKey>,
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let key = self.queue.pop_front()?;
        let node = &self.nodes[key];
        self.queue.extend(node.left);
        self.queue.extend(node.right);
        Some(&node.item)
    }
}
