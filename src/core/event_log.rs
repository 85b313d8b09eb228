//! Bounded, append-only event log.
//!
//! Oldest entries are evicted once `capacity` is reached so long-running
//! sandboxes keep a fixed memory footprint.

use std::collections::VecDeque;

#[derive(Clone, Debug)]
pub struct EventLog<T> {
    entries: VecDeque<T>,
    capacity: usize,
    evicted: u64,
}

impl<T> EventLog<T> {
    /// `capacity` must be non-zero; callers validate it through their config.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(256)),
            capacity,
            evicted: 0,
        }
    }

    pub fn push(&mut self, entry: T) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
            self.evicted = self.evicted.saturating_add(1);
        }
        self.entries.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries dropped to stay within capacity.
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&T> {
        self.entries.back()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.evicted = 0;
    }
}

impl<T: Clone> EventLog<T> {
    /// Oldest-first copy of the retained entries.
    pub fn to_vec(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
    }
}
