use std::collections::HashSet;

use crate::common::types::{FrameCount, PageNo};
use crate::error::PreconditionError;
use crate::replacement::frame_set::FrameSet;
use crate::replacement::policy::Policy;
use crate::replacement::replacer::{FIFOReplacer, LRUReplacer, OptimalReplacer, Replacer};
use crate::replacement::trace::{AccessEvent, AccessOutcome, SimulationTrace};

/// Count the page faults `reference_string` incurs under `policy` with
/// `allocated_frames` frames.
///
/// Three regimes apply, in order:
/// 1. no frames: every reference faults;
/// 2. at least `page_count` frames: only the first reference to each
///    distinct page faults, whatever the policy;
/// 3. otherwise the string is replayed against a bounded frame set.
///
/// Every reference must lie in `0..page_count`.
pub fn simulate(
    policy: Policy,
    page_count: usize,
    reference_string: &[PageNo],
    allocated_frames: FrameCount,
) -> Result<usize, PreconditionError> {
    let mut faults = 0;
    replay(policy, page_count, reference_string, allocated_frames, |event| {
        if event.outcome.is_fault() {
            faults += 1;
        }
    })?;
    Ok(faults)
}

/// Like [`simulate`], but records the outcome of every reference
pub fn simulate_trace(
    policy: Policy,
    page_count: usize,
    reference_string: &[PageNo],
    allocated_frames: FrameCount,
) -> Result<SimulationTrace, PreconditionError> {
    let mut trace = SimulationTrace {
        events: Vec::with_capacity(reference_string.len()),
        faults: 0,
    };
    replay(policy, page_count, reference_string, allocated_frames, |event| {
        trace.push(event)
    })?;
    Ok(trace)
}

/// Fail on the first reference outside the valid page range
pub fn check_references(page_count: usize, reference_string: &[PageNo]) -> Result<(), PreconditionError> {
    match reference_string.iter().enumerate().find(|&(_, &page)| page >= page_count) {
        Some((position, &page)) => Err(PreconditionError::ReferenceOutOfRange {
            position,
            page,
            page_count,
        }),
        None => Ok(()),
    }
}

fn replay<F: FnMut(AccessEvent)>(
    policy: Policy,
    page_count: usize,
    reference_string: &[PageNo],
    allocated_frames: FrameCount,
    mut observe: F,
) -> Result<(), PreconditionError> {
    check_references(page_count, reference_string)?;

    if allocated_frames == 0 {
        for (position, &page) in reference_string.iter().enumerate() {
            observe(AccessEvent {
                position,
                page,
                outcome: AccessOutcome::Fault { evicted: None },
            });
        }
        return Ok(());
    }

    if allocated_frames >= page_count {
        let mut loaded = HashSet::with_capacity(page_count.min(reference_string.len()));
        for (position, &page) in reference_string.iter().enumerate() {
            let outcome = if loaded.insert(page) {
                AccessOutcome::Fault { evicted: None }
            } else {
                AccessOutcome::Hit
            };
            observe(AccessEvent { position, page, outcome });
        }
        return Ok(());
    }

    // Frame budgets can dwarf the string; never reserve more than it can fill
    let hint = allocated_frames.min(reference_string.len());
    match policy {
        Policy::Fifo => run_bounded(
            FrameSet::new(allocated_frames, hint, FIFOReplacer::new(hint)),
            reference_string,
            observe,
        ),
        Policy::Lru => run_bounded(
            FrameSet::new(allocated_frames, hint, LRUReplacer::new(hint)),
            reference_string,
            observe,
        ),
        Policy::Optimal => run_bounded(
            FrameSet::new(
                allocated_frames,
                hint,
                OptimalReplacer::new(reference_string, hint),
            ),
            reference_string,
            observe,
        ),
    }
    Ok(())
}

fn run_bounded<R: Replacer, F: FnMut(AccessEvent)>(
    mut frames: FrameSet<R>,
    reference_string: &[PageNo],
    mut observe: F,
) {
    for (position, &page) in reference_string.iter().enumerate() {
        let outcome = frames.access(page, position);
        observe(AccessEvent { position, page, outcome });
    }
}
