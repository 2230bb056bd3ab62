use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Item to be stored on priority queue (aka binary heap) to find the best candidate for closest
/// path
#[derive(PartialEq, Eq, Debug)]
struct QueueItem {
    /// Cost from the beginning
    score: usize,
    /// Insertion order, to take equally scored fields first in first out
    seq: usize,
    /// Field index
    idx: usize,
}

impl std::cmp::PartialOrd for QueueItem {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for QueueItem {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Ordering is reversed, as it is designed to be used in max-heap to look for min candidate
        let left = (Reverse(self.score), Reverse(self.seq));
        let right = (Reverse(other.score), Reverse(other.seq));
        left.cmp(&right)
    }
}

/// Fields which are reached, but not closed yet. Always gives the lowest score first, and among
/// equal scores the one inserted first.
///
/// Only field indices are stored, nodes themselves live in the search table.
#[derive(Default, Debug)]
pub(crate) struct OpenSet {
    queue: BinaryHeap<QueueItem>,
    seq: usize,
}

impl OpenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, idx: usize, score: usize) {
        self.queue.push(QueueItem {
            score,
            seq: self.seq,
            idx,
        });
        self.seq += 1;
    }

    /// Takes `(idx, score)` with the lowest score
    pub fn pop(&mut self) -> Option<(usize, usize)> {
        self.queue.pop().map(|item| (item.idx, item.score))
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
