pub mod report;
pub mod runner;

pub use report::{BatchReport, SimulationResult};
pub use runner::{run_all, run_all_parallel};
