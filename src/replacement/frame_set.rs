use std::collections::HashSet;

use log::debug;

use crate::common::types::{FrameCount, PageNo, Position};
use crate::replacement::replacer::Replacer;
use crate::replacement::trace::AccessOutcome;

/// Capacity-bounded set of resident pages driven by one replacer.
///
/// Holds at most `capacity` distinct pages at any time.
pub struct FrameSet<R: Replacer> {
    capacity: FrameCount,
    resident: HashSet<PageNo>,
    replacer: R,
}

impl<R: Replacer> FrameSet<R> {
    /// `reserve` only sizes the initial allocation; `capacity` bounds residency
    pub fn new(capacity: FrameCount, reserve: usize, replacer: R) -> Self {
        Self {
            capacity,
            resident: HashSet::with_capacity(reserve.min(capacity)),
            replacer,
        }
    }

    /// Serve one reference, evicting if every frame is taken
    pub fn access(&mut self, page: PageNo, position: Position) -> AccessOutcome {
        if self.resident.contains(&page) {
            self.replacer.record_access(page, position);
            return AccessOutcome::Hit;
        }

        let evicted = if self.resident.len() >= self.capacity {
            self.replacer.victim(position)
        } else {
            None
        };
        if let Some(victim) = evicted {
            debug!("Evicting page {} for page {} at position {}", victim, page, position);
            self.resident.remove(&victim);
        }

        self.resident.insert(page);
        self.replacer.admit(page, position);
        debug_assert!(self.resident.len() <= self.capacity);

        AccessOutcome::Fault { evicted }
    }
}
