//! Min-priority open set for A*.
//!
//! Entries are ordered by `(f, seq)`: lower `f` pops first, and among equal
//! `f` the entry pushed earlier wins. `seq` is a counter that only grows, so
//! the pop order is fully determined by the push order.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy)]
struct Entry {
    idx: usize,
    f: i32,
    seq: u64,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Natural order; the heap wraps entries in `Reverse`.
        self.f.cmp(&other.f).then(self.seq.cmp(&other.seq))
    }
}

pub(crate) struct OpenSet {
    heap: BinaryHeap<Reverse<Entry>>,
    seq: u64,
}

impl OpenSet {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Push a cell with priority `f`, stamping it with the next counter.
    pub(crate) fn push(&mut self, idx: usize, f: i32) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { idx, f, seq }));
    }

    /// Pop the cell with the lowest `(f, seq)`.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse(e)| e.idx)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
