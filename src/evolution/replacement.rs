#[cfg(test)]
#[path = "../../tests/unit/evolution/replacement_test.rs"]
mod replacement_test;

use crate::genome::Fitness;
use std::collections::BinaryHeap;

/// Returns the indices of the `k` lowest fitness individuals in O(n log k): a
/// bounded max-heap keeps the current bottom-k candidates with the worst kept
/// candidate on top, so each remaining individual costs a single comparison and
/// at most one sift.
///
/// Only a strictly smaller fitness evicts the heap top, which keeps the first
/// seen among equals. The order of the returned indices is unspecified.
pub(crate) fn k_min_indexes(fitness: &[Fitness], k: usize) -> Vec<usize> {
    assert!(k <= fitness.len());

    // seeding with the first k raw pairs is sufficient: correctness follows from
    // the heap invariant being restored after every replacement, not from the
    // seed being optimal
    let mut heap = fitness[..k].iter().enumerate().map(|(index, &value)| (value, index)).collect::<BinaryHeap<_>>();

    for (index, &value) in fitness.iter().enumerate().skip(k) {
        if let Some(mut top) = heap.peek_mut() {
            if value < top.0 {
                *top = (value, index);
            }
        }
    }

    heap.into_iter().map(|(_, index)| index).collect()
}
