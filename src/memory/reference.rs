use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::types::PageNo;

/// Where random reference strings draw their entropy from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceSource {
    /// Seeded from the operating system; every session differs
    #[default]
    Entropy,
    /// Reproducible stream for tests and replays
    Seeded(u64),
}

impl ReferenceSource {
    /// Build the random number generator this source describes
    pub fn rng(&self) -> StdRng {
        match self {
            ReferenceSource::Entropy => StdRng::from_entropy(),
            ReferenceSource::Seeded(seed) => StdRng::seed_from_u64(*seed),
        }
    }
}

/// Draw `length` page numbers uniformly from `0..=max(0, page_count - 1)`.
///
/// With one page or none, every reference is page 0.
pub fn generate<R: Rng + ?Sized>(page_count: usize, length: usize, rng: &mut R) -> Vec<PageNo> {
    let highest = page_count.saturating_sub(1);
    if highest == 0 {
        return vec![0; length];
    }
    (0..length).map(|_| rng.gen_range(0..=highest)).collect()
}

/// Same as [`generate`] using the thread-local entropy source
pub fn generate_from_entropy(page_count: usize, length: usize) -> Vec<PageNo> {
    generate(page_count, length, &mut rand::thread_rng())
}
