//! Memory sizing and synthetic workload generation
//!
//! Derives page and frame counts from raw kilobyte sizes and produces the
//! reference strings the replacement simulator replays.

pub mod layout;
pub mod reference;

pub use layout::{frames, pages};
pub use reference::{ReferenceSource, generate, generate_from_entropy};
