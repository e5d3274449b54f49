//! Level-order addressing for linked complete binary trees
//!
//! A complete binary tree numbered in level order from 1 has the same shape as
//! the implicit tree behind an array heap: position `p` has children `2p` and
//! `2p + 1`. Reading `p` in binary, the leading 1-bit is the root and every
//! following bit, most significant first, is one step down: 0 for the left
//! child, 1 for the right child.
//!
//! ```text
//!              1
//!          /       \
//!        10         11
//!       /  \       /  \
//!     100  101   110  111
//! ```
//!
//! This lets a pointer-linked tree find any slot from its element count alone,
//! without an index array or a stored "last node" pointer.

use smallvec::SmallVec;

/// One step from a node to one of its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Step to the left child (bit 0)
    Left,
    /// Step to the right child (bit 1)
    Right,
}

/// Inline storage for a root-to-slot path; one entry per level below the root
pub type PathBuf = SmallVec<[Direction; 32]>;

/// Iterator over the steps from the root to a 1-based level-order position
///
/// Yields nothing for position 1 (the root itself) and for position 0, which
/// names no slot.
#[derive(Debug, Clone)]
pub struct TreePath {
    position: usize,
    mask: usize,
}

impl TreePath {
    /// Creates the path from the root to `position`
    pub fn new(position: usize) -> Self {
        let mask = if position == 0 {
            0
        } else {
            (1usize << depth(position)) >> 1
        };
        TreePath { position, mask }
    }
}

impl Iterator for TreePath {
    type Item = Direction;

    #[inline]
    fn next(&mut self) -> Option<Direction> {
        if self.mask == 0 {
            return None;
        }
        let step = if self.position & self.mask == 0 {
            Direction::Left
        } else {
            Direction::Right
        };
        self.mask >>= 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.mask == 0 {
            0
        } else {
            self.mask.trailing_zeros() as usize + 1
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TreePath {}

/// Collects the root-to-`position` path
pub fn path_to(position: usize) -> PathBuf {
    TreePath::new(position).collect()
}

/// Depth of a 1-based position; the root is at depth 0
///
/// `position` must be non-zero.
#[inline]
pub fn depth(position: usize) -> u32 {
    debug_assert!(position > 0, "level-order positions start at 1");
    usize::BITS - 1 - position.leading_zeros()
}
