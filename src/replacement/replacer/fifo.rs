use std::collections::VecDeque;
use crate::common::types::{PageNo, Position};
use super::Replacer;

/// First-in first-out replacement: the earliest admitted page leaves first
pub struct FIFOReplacer {
    queue: VecDeque<PageNo>,
}

impl FIFOReplacer {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
        }
    }
}

impl Replacer for FIFOReplacer {
    // Hits never reorder the queue
    fn record_access(&mut self, _page: PageNo, _position: Position) {}

    fn admit(&mut self, page: PageNo, _position: Position) {
        self.queue.push_back(page);
    }

    fn victim(&mut self, _position: Position) -> Option<PageNo> {
        self.queue.pop_front()
    }
}
