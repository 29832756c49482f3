//! Time-ordered queue of pending observations.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use gravix_core::events::Observation;

/// Min-queue ordered by observation time, then launch submission order, then
/// insertion order.
#[derive(Debug, Default)]
pub struct ObservationQueue {
    heap: BinaryHeap<Reverse<Entry>>,
    next_seq: u64,
}

#[derive(Debug)]
struct Entry {
    seq: u64,
    observation: Observation,
}

impl Entry {
    fn key(&self) -> (f64, u64, u64) {
        (self.observation.t(), self.observation.launch().0, self.seq)
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        let (ta, la, sa) = self.key();
        let (tb, lb, sb) = other.key();
        ta.total_cmp(&tb).then(la.cmp(&lb)).then(sa.cmp(&sb))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl ObservationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, observation: Observation) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry { seq, observation }));
    }

    /// Earliest observation without removing it.
    pub fn peek(&self) -> Option<&Observation> {
        self.heap.peek().map(|Reverse(e)| &e.observation)
    }

    /// Removes and returns the earliest observation if it happened at or
    /// before `t`.
    pub fn pop_until(&mut self, t: f64) -> Option<Observation> {
        match self.peek() {
            Some(o) if o.t() <= t => self.heap.pop().map(|Reverse(e)| e.observation),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
