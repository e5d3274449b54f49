//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify that the
//! shape, heap-order and count invariants hold after every single one.

use linked_tree_heap::edge::Edge;
use linked_tree_heap::linked_binary::LinkedBinaryHeap;
use linked_tree_heap::path::{path_to, Direction};
use linked_tree_heap::simple_binary::SimpleBinaryHeap;
use linked_tree_heap::Heap;
use proptest::prelude::*;

/// Test that push and pop keep the minimum in sync with a model
fn test_push_pop_invariant<H: Heap<i32>>(ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut heap = H::new();
    let mut inserted = Vec::new();

    for (should_pop, value) in ops {
        if should_pop && !heap.is_empty() {
            if let Some(popped) = heap.pop() {
                let min_in_inserted = inserted.iter().min().copied();
                prop_assert_eq!(Some(popped), min_in_inserted);
                if let Some(pos) = inserted.iter().position(|&p| p == popped) {
                    inserted.remove(pos);
                }
            }
        } else {
            heap.push(value);
            inserted.push(value);
        }

        prop_assert_eq!(heap.peek().copied(), inserted.iter().min().copied());
    }

    Ok(())
}

/// Test that all popped elements are in non-decreasing order
fn test_pop_order_invariant<H: Heap<i32>>(values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut heap = H::new();

    for val in &values {
        heap.push(*val);
    }

    let mut popped = Vec::with_capacity(values.len());
    while let Some(value) = heap.pop() {
        popped.push(value);
    }

    let mut expected = values;
    expected.sort_unstable();
    prop_assert_eq!(popped, expected);

    Ok(())
}

/// Test len() is always correct
fn test_len_invariant<H: Heap<i32>>(ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut heap = H::new();
    let mut expected_len = 0;

    for (should_pop, value) in ops {
        if should_pop {
            let popped = heap.pop();
            if expected_len == 0 {
                prop_assert!(popped.is_none());
            } else {
                prop_assert!(popped.is_some());
                expected_len -= 1;
            }
        } else {
            heap.push(value);
            expected_len += 1;
        }

        prop_assert_eq!(heap.len(), expected_len);
        prop_assert_eq!(heap.is_empty(), expected_len == 0);
    }

    Ok(())
}

/// Structural invariants of the linked tree after every operation
fn test_linked_structure(ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut heap = LinkedBinaryHeap::new();

    for (should_pop, value) in ops {
        if should_pop {
            heap.pop();
        } else {
            heap.push(value);
        }

        prop_assert_eq!(heap.verify_invariants(), Ok(()));

        // Breadth-first, parents come before children and never order after them
        let levels: Vec<i32> = heap.level_order().copied().collect();
        prop_assert_eq!(levels.len(), heap.len());
        for (index, value) in levels.iter().enumerate().skip(1) {
            prop_assert!(levels[(index - 1) / 2] <= *value);
        }

        let expected_height = path_to(heap.len().max(1)).len();
        prop_assert_eq!(heap.height(), expected_height);
    }

    Ok(())
}

/// The linked heap lays elements out exactly like the array heap
fn test_matches_array_layout(ops: Vec<(bool, u32)>) -> Result<(), TestCaseError> {
    let mut linked = LinkedBinaryHeap::new();
    let mut array = SimpleBinaryHeap::new();

    for (i, (should_pop, cost)) in ops.into_iter().enumerate() {
        if should_pop {
            prop_assert_eq!(linked.pop(), array.pop());
        } else {
            // Costs collide often, so the destination tells equal edges apart
            let edge = Edge::new(0, i, cost);
            linked.push(edge);
            array.push(edge);
        }

        let levels: Vec<Edge<u32>> = linked.level_order().copied().collect();
        prop_assert_eq!(levels.as_slice(), array.as_slice());
    }

    Ok(())
}

proptest! {
    #[test]
    fn test_linked_push_pop_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..100)) {
        test_push_pop_invariant::<LinkedBinaryHeap<i32>>(ops)?;
    }

    #[test]
    fn test_linked_pop_order_invariant(values in prop::collection::vec(-100i32..100, 0..200)) {
        test_pop_order_invariant::<LinkedBinaryHeap<i32>>(values)?;
    }

    #[test]
    fn test_linked_len_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..100)) {
        test_len_invariant::<LinkedBinaryHeap<i32>>(ops)?;
    }

    #[test]
    fn test_linked_structure_invariants(ops in prop::collection::vec((prop::bool::ANY, -50i32..50), 0..150)) {
        test_linked_structure(ops)?;
    }

    #[test]
    fn test_linked_matches_array_layout(ops in prop::collection::vec((prop::bool::ANY, 0u32..8), 0..150)) {
        test_matches_array_layout(ops)?;
    }

    #[test]
    fn test_simple_push_pop_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..100)) {
        test_push_pop_invariant::<SimpleBinaryHeap<i32>>(ops)?;
    }

    #[test]
    fn test_simple_pop_order_invariant(values in prop::collection::vec(-100i32..100, 0..200)) {
        test_pop_order_invariant::<SimpleBinaryHeap<i32>>(values)?;
    }

    #[test]
    fn test_simple_len_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..100)) {
        test_len_invariant::<SimpleBinaryHeap<i32>>(ops)?;
    }

    #[test]
    fn test_path_ends_at_position(position in 1usize..1_000_000) {
        let reached = path_to(position).iter().fold(1usize, |p, step| match step {
            Direction::Left => 2 * p,
            Direction::Right => 2 * p + 1,
        });
        prop_assert_eq!(reached, position);
    }
}
