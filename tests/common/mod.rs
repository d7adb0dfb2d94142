#![allow(dead_code)]

use rand::SeedableRng;
use rand::rngs::StdRng;

use pagesim::common::types::PageNo;
use pagesim::memory::reference;
use pagesim::{Session, SessionConfig};

/// Classic string exhibiting Belady's anomaly under FIFO, over pages 0..5
pub const BELADY_STRING: [PageNo; 12] = [0, 1, 2, 3, 0, 1, 4, 0, 1, 2, 3, 4];

/// Textbook LRU string, over pages 1..=5
pub const LRU_STRING: [PageNo; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

// Create a seeded session with 1 MB of RAM and 4 KB pages
pub fn create_test_session(seed: u64) -> Session {
    let session = Session::new(SessionConfig::seeded(seed));
    session
        .set_memory_profile(1024.0, 4.0)
        .expect("valid memory profile");
    session
}

// Generate a reproducible reference string
pub fn random_reference_string(page_count: usize, length: usize, seed: u64) -> Vec<PageNo> {
    reference::generate(page_count, length, &mut StdRng::seed_from_u64(seed))
}

pub fn distinct_pages(reference_string: &[PageNo]) -> usize {
    let mut pages = reference_string.to_vec();
    pages.sort_unstable();
    pages.dedup();
    pages.len()
}
