use crate::memory::ReferenceSource;

/// Configuration for a simulation session
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Entropy for generated reference strings
    pub reference_source: ReferenceSource,

    /// Simulate files on scoped worker threads instead of one after another
    pub parallel_batch: bool,
}

impl SessionConfig {
    /// Reproducible sessions for tests and replays
    pub fn seeded(seed: u64) -> Self {
        Self {
            reference_source: ReferenceSource::Seeded(seed),
            ..Self::default()
        }
    }
}
