//! Page replacement simulation
//!
//! Replays a reference string against a bounded set of frames and counts the
//! page faults each policy incurs.

pub mod frame_set;
pub mod policy;
pub mod replacer;
pub mod simulator;
pub mod trace;

pub use policy::Policy;
pub use simulator::{check_references, simulate, simulate_trace};
pub use trace::{AccessEvent, AccessOutcome, SimulationTrace};
