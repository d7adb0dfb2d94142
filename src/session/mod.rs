//! Session-scoped store for the memory profile and tracked files

pub mod config;
pub mod entry;
pub mod profile;
mod store;

pub use config::SessionConfig;
pub use entry::{FileEntry, FileRequest, SegmentUsage};
pub use profile::MemoryProfile;
pub use store::Session;
