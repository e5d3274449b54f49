//! Weighted edges as heap payloads

use crate::traits::PriorityElement;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// Trait for types that can be used as edge weights.
///
/// `Default` supplies zero, which an adjacency matrix uses to mean "no edge".
pub trait Weight: Ord + Copy + Add<Output = Self> + Default {}

impl<T> Weight for T where T: Ord + Copy + Add<Output = Self> + Default {}

/// A directed, weighted edge between two vertex indices
///
/// Edges order by `cost` alone: two edges with the same cost compare equal
/// under [`PriorityElement`] even when their endpoints differ. `Edge` does not
/// implement `Ord`, so that ordering never leaks into `==`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<W> {
    pub source: usize,
    pub destination: usize,
    pub cost: W,
}

impl<W> Edge<W> {
    pub fn new(source: usize, destination: usize, cost: W) -> Self {
        Edge {
            source,
            destination,
            cost,
        }
    }
}

impl<W: Weight> PriorityElement for Edge<W> {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.cost.cmp(&other.cost)
    }
}

/// Formats as `<source> - <destination> -> <cost>`
impl<W: fmt::Display> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} -> {}", self.source, self.destination, self.cost)
    }
}
