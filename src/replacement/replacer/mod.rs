mod fifo;
mod lru;
mod optimal;

pub use fifo::FIFOReplacer;
pub use lru::LRUReplacer;
pub use optimal::OptimalReplacer;

use crate::common::types::{PageNo, Position};

/// Eviction bookkeeping for the pages currently resident in a frame set.
///
/// The frame set owns residency; a replacer only orders resident pages so it
/// can name a victim when capacity binds.
pub trait Replacer {
    /// A resident page was referenced again at `position`
    fn record_access(&mut self, page: PageNo, position: Position);

    /// A page was loaded into a frame at `position`
    fn admit(&mut self, page: PageNo, position: Position);

    /// Choose a resident page to evict while serving the reference at
    /// `position`, and stop tracking it
    fn victim(&mut self, position: Position) -> Option<PageNo>;
}
