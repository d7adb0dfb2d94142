use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::thread;

use log::{info, warn};
use parking_lot::Mutex;

use crate::batch::report::BatchReport;
use crate::error::SimulationError;
use crate::replacement::{Policy, simulate};
use crate::session::{FileEntry, MemoryProfile};

/// Simulate every entry under `policy`, in name order.
///
/// A failing entry is recorded in the report and does not stop the rest.
pub fn run_all(
    policy: Policy,
    profile: &MemoryProfile,
    entries: &BTreeMap<String, FileEntry>,
) -> BatchReport {
    info!("Running paging simulation with {} over {} files", policy, entries.len());
    let mut report = BatchReport::new(policy);
    for (name, entry) in entries {
        report.record(name, run_entry(policy, profile, entry));
    }
    report
}

/// Same result as [`run_all`], with entries spread over at most
/// `available_parallelism` scoped workers. Workers share only read-only data
/// and pull entries from a common iterator.
pub fn run_all_parallel(
    policy: Policy,
    profile: &MemoryProfile,
    entries: &BTreeMap<String, FileEntry>,
) -> BatchReport {
    let workers = thread::available_parallelism()
        .map_or(1, NonZeroUsize::get)
        .min(entries.len())
        .max(1);
    info!(
        "Running paging simulation with {} over {} files on {} workers",
        policy,
        entries.len(),
        workers
    );

    let pending = Mutex::new(entries.iter());
    let pending = &pending;
    let mut report = BatchReport::new(policy);
    crossbeam::thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                scope.spawn(move |_| {
                    let mut done = Vec::new();
                    loop {
                        let next = pending.lock().next();
                        let Some((name, entry)) = next else {
                            break;
                        };
                        done.push((name, run_entry(policy, profile, entry)));
                    }
                    done
                })
            })
            .collect();

        for handle in handles {
            match handle.join() {
                Ok(done) => {
                    for (name, outcome) in done {
                        report.record(name, outcome);
                    }
                }
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
    })
    .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
    report
}

fn run_entry(
    policy: Policy,
    profile: &MemoryProfile,
    entry: &FileEntry,
) -> Result<usize, SimulationError> {
    let outcome = profile.frames(entry.allocated_kb).and_then(|frames| {
        let faults = simulate(policy, entry.page_count, &entry.reference_string, frames)?;
        info!(
            "File '{}': Pages={}, AllocFrames={}, Faults={}",
            entry.name, entry.page_count, frames, faults
        );
        Ok(faults)
    });
    if let Err(err) = &outcome {
        warn!("File '{}' could not be simulated: {}", entry.name, err);
    }
    outcome
}
