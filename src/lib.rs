// Paging simulator: page replacement over per-file reference strings

pub mod batch;
pub mod common;
pub mod error;
pub mod input;
pub mod memory;
pub mod replacement;
pub mod session;

// Re-export key items for convenient access
pub use batch::{BatchReport, SimulationResult};
pub use error::{ConfigError, PreconditionError, SimulationError, ValidationError};
pub use replacement::{Policy, SimulationTrace, simulate, simulate_trace};
pub use session::{FileEntry, FileRequest, MemoryProfile, Session, SessionConfig};
