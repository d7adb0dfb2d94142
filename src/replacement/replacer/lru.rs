use std::collections::VecDeque;
use crate::common::types::{PageNo, Position};
use super::Replacer;

/// Least recently used replacement.
///
/// Pages are kept in recency order, most recent at the front. Every hit or
/// admission moves a page to the front, so the back always holds the page
/// with the smallest last-used position. Positions are unique per reference,
/// which makes the order total and leaves no ties to break.
pub struct LRUReplacer {
    lru_list: VecDeque<PageNo>,
}

impl LRUReplacer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lru_list: VecDeque::with_capacity(capacity),
        }
    }

    fn touch(&mut self, page: PageNo) {
        if let Some(pos) = self.lru_list.iter().position(|&p| p == page) {
            self.lru_list.remove(pos);
        }
        self.lru_list.push_front(page);
    }
}

impl Replacer for LRUReplacer {
    fn record_access(&mut self, page: PageNo, _position: Position) {
        self.touch(page);
    }

    fn admit(&mut self, page: PageNo, _position: Position) {
        self.touch(page);
    }

    fn victim(&mut self, _position: Position) -> Option<PageNo> {
        self.lru_list.pop_back()
    }
}
