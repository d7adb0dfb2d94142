use std::cmp::Reverse;
use std::collections::HashMap;
use crate::common::types::{PageNo, Position};
use super::Replacer;

/// Belady's optimal replacement: evict the page whose next use lies
/// farthest in the future, or that is never used again.
///
/// The look-ahead is precomputed once per reference string. Each resident
/// page remembers the next occurrence after its most recent reference, which
/// stays valid until that page is referenced again.
pub struct OptimalReplacer {
    next_use: Vec<Option<Position>>,
    upcoming: HashMap<PageNo, Option<Position>>,
}

impl OptimalReplacer {
    pub fn new(reference_string: &[PageNo], capacity: usize) -> Self {
        Self {
            next_use: next_occurrences(reference_string),
            upcoming: HashMap::with_capacity(capacity),
        }
    }

    fn remember(&mut self, page: PageNo, position: Position) {
        let next = self.next_use.get(position).copied().flatten();
        self.upcoming.insert(page, next);
    }
}

impl Replacer for OptimalReplacer {
    fn record_access(&mut self, page: PageNo, position: Position) {
        self.remember(page, position);
    }

    fn admit(&mut self, page: PageNo, position: Position) {
        self.remember(page, position);
    }

    /// Largest next use wins. Pages never used again rank above every real
    /// position; among those the smallest page number is evicted.
    fn victim(&mut self, _position: Position) -> Option<PageNo> {
        let victim = self
            .upcoming
            .iter()
            .max_by_key(|&(&page, &next)| (next.unwrap_or(Position::MAX), Reverse(page)))
            .map(|(&page, _)| page)?;
        self.upcoming.remove(&victim);
        Some(victim)
    }
}

/// For each position, the next position holding the same page, if any
pub fn next_occurrences(reference_string: &[PageNo]) -> Vec<Option<Position>> {
    let mut next_use = vec![None; reference_string.len()];
    let mut seen: HashMap<PageNo, Position> = HashMap::new();
    for (position, &page) in reference_string.iter().enumerate().rev() {
        next_use[position] = seen.insert(page, position);
    }
    next_use
}
