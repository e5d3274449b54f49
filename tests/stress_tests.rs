//! Stress tests that push the heaps through long operation sequences
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases around full levels and deep trees.

mod common;

use common::init_logging;
use linked_tree_heap::edge::Edge;
use linked_tree_heap::graph::AdjacencyMatrix;
use linked_tree_heap::linked_binary::LinkedBinaryHeap;
use linked_tree_heap::prim::minimum_spanning_tree;
use linked_tree_heap::simple_binary::SimpleBinaryHeap;
use linked_tree_heap::Heap;

/// Test massive numbers of inserts and pops
fn test_massive_operations<H: Heap<i32>>() {
    let mut heap = H::new();

    for i in 0..10_000 {
        heap.push(i);
    }
    assert_eq!(heap.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(heap.pop(), Some(i));
    }
    assert!(heap.is_empty());
}

/// Test alternating insert and pop
fn test_alternating_ops<H: Heap<i32>>() {
    let mut heap = H::new();

    for i in 0..2000 {
        heap.push(i * 2);
        heap.push(i * 2 + 1);
        assert_eq!(heap.pop(), Some(i));
    }

    assert_eq!(heap.len(), 2000);
    let mut last = i32::MIN;
    while let Some(value) = heap.pop() {
        assert!(value >= last);
        last = value;
    }
}

/// Fill and drain across every level boundary up to 2^10
fn test_level_boundaries<H: Heap<u32>>() {
    for level in 0..=10u32 {
        let n = 1u32 << level;
        for size in [n - 1, n, n + 1] {
            let mut heap = H::new();
            for i in (0..size).rev() {
                heap.push(i);
            }
            assert_eq!(heap.len(), size as usize);
            for i in 0..size {
                assert_eq!(heap.pop(), Some(i));
            }
            assert_eq!(heap.pop(), None);
        }
    }
}

#[test]
fn test_linked_massive_operations() {
    test_massive_operations::<LinkedBinaryHeap<i32>>();
}

#[test]
fn test_simple_massive_operations() {
    test_massive_operations::<SimpleBinaryHeap<i32>>();
}

#[test]
fn test_linked_alternating_ops() {
    test_alternating_ops::<LinkedBinaryHeap<i32>>();
}

#[test]
fn test_simple_alternating_ops() {
    test_alternating_ops::<SimpleBinaryHeap<i32>>();
}

#[test]
fn test_linked_level_boundaries() {
    test_level_boundaries::<LinkedBinaryHeap<u32>>();
}

#[test]
fn test_simple_level_boundaries() {
    test_level_boundaries::<SimpleBinaryHeap<u32>>();
}

#[test]
fn test_linked_invariants_through_sawtooth() {
    let mut heap = LinkedBinaryHeap::new();

    // Grow by 3, shrink by 2, so the last node keeps crossing subtree borders
    for round in 0..300 {
        for k in 0..3 {
            heap.push((round * 31 + k * 17) % 97);
        }
        heap.pop();
        heap.pop();
        assert_eq!(heap.verify_invariants(), Ok(()));
    }
    assert_eq!(heap.len(), 300);
    assert_eq!(heap.height(), 8);
}

#[test]
fn test_linked_clear_large_tree() {
    let mut heap: LinkedBinaryHeap<u64> = (0..100_000u64).rev().collect();
    assert_eq!(heap.len(), 100_000);
    assert_eq!(heap.peek(), Some(&0));

    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.verify_invariants(), Ok(()));
}

#[test]
fn test_prim_on_large_grid() {
    init_logging();

    // 20x20 grid, horizontal edges cost 1, vertical edges cost 2
    let side = 20;
    let n = side * side;
    let mut rows = vec![vec![0u32; n]; n];
    for r in 0..side {
        for c in 0..side {
            let v = r * side + c;
            if c + 1 < side {
                rows[v][v + 1] = 1;
                rows[v + 1][v] = 1;
            }
            if r + 1 < side {
                rows[v][v + side] = 2;
                rows[v + side][v] = 2;
            }
        }
    }

    let graph = AdjacencyMatrix::<u32>::from_rows(&rows).unwrap();
    let tree = minimum_spanning_tree(&graph);

    assert!(tree.is_spanning());
    assert_eq!(tree.edges().len(), n - 1);
    // Every row is joined by its horizontal edges, rows by one vertical edge each
    let expected = (side as u32) * (side as u32 - 1) + 2 * (side as u32 - 1);
    assert_eq!(tree.total_cost(), expected);
    assert!(tree
        .edges()
        .iter()
        .all(|e: &Edge<u32>| graph.weight(e.source, e.destination) == Some(e.cost)));
}
