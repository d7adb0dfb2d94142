use pagesim::replacement::{AccessOutcome, simulate_trace};
use pagesim::{Policy, PreconditionError, simulate};

#[path = "../common/mod.rs"]
mod common;
use common::{BELADY_STRING, LRU_STRING, distinct_pages, random_reference_string};

#[test]
fn test_fifo_textbook_case() {
    assert_eq!(simulate(Policy::Fifo, 5, &BELADY_STRING, 3).unwrap(), 9);
}

#[test]
fn test_fifo_belady_anomaly() {
    // One more frame, one more fault
    assert_eq!(simulate(Policy::Fifo, 5, &BELADY_STRING, 3).unwrap(), 9);
    assert_eq!(simulate(Policy::Fifo, 5, &BELADY_STRING, 4).unwrap(), 10);
}

#[test]
fn test_textbook_string_needs_five_pages() {
    // Page 4 is outside a four page address space
    assert_eq!(
        simulate(Policy::Fifo, 4, &BELADY_STRING, 3),
        Err(PreconditionError::ReferenceOutOfRange {
            position: 6,
            page: 4,
            page_count: 4,
        })
    );
}

#[test]
fn test_lru_textbook_case() {
    assert_eq!(simulate(Policy::Lru, 6, &LRU_STRING, 4).unwrap(), 8);

    let trace = simulate_trace(Policy::Lru, 6, &LRU_STRING, 4).unwrap();
    assert_eq!(trace.evictions(), vec![3, 4, 5, 1]);
}

#[test]
fn test_lru_string_needs_six_pages() {
    assert_eq!(
        simulate(Policy::Lru, 5, &LRU_STRING, 4),
        Err(PreconditionError::ReferenceOutOfRange {
            position: 6,
            page: 5,
            page_count: 5,
        })
    );
}

#[test]
fn test_lru_on_belady_string() {
    assert_eq!(simulate(Policy::Lru, 5, &BELADY_STRING, 3).unwrap(), 10);
    let trace = simulate_trace(Policy::Lru, 5, &BELADY_STRING, 3).unwrap();
    assert_eq!(trace.evictions(), vec![0, 1, 2, 3, 4, 0, 1]);
}

#[test]
fn test_optimal_on_belady_string() {
    assert_eq!(simulate(Policy::Optimal, 5, &BELADY_STRING, 3).unwrap(), 7);

    // Pages 0 and 1 are both never used again at position 9; page 0 goes first
    let trace = simulate_trace(Policy::Optimal, 5, &BELADY_STRING, 3).unwrap();
    assert_eq!(trace.evictions(), vec![2, 3, 0, 1]);
}

#[test]
fn test_fifo_eviction_order() {
    let trace = simulate_trace(Policy::Fifo, 5, &BELADY_STRING, 3).unwrap();
    assert_eq!(trace.evictions(), vec![0, 1, 2, 3, 0, 1]);
    assert_eq!(trace.hits(), 3);
}

#[test]
fn test_lru_hit_refreshes_but_fifo_does_not() {
    let refs = [0, 1, 0, 2, 0];
    assert_eq!(simulate(Policy::Fifo, 3, &refs, 2).unwrap(), 4);
    assert_eq!(simulate(Policy::Lru, 3, &refs, 2).unwrap(), 3);
    assert_eq!(simulate(Policy::Optimal, 3, &refs, 2).unwrap(), 3);
}

#[test]
fn test_zero_frames_fault_on_every_reference() {
    for policy in Policy::ALL {
        assert_eq!(simulate(policy, 5, &BELADY_STRING, 0).unwrap(), BELADY_STRING.len());

        let trace = simulate_trace(policy, 5, &BELADY_STRING, 0).unwrap();
        assert!(trace.events.iter().all(|e| e.outcome == AccessOutcome::Fault { evicted: None }));
    }
}

#[test]
fn test_enough_frames_only_compulsory_misses() {
    let refs = [2, 2, 0, 2, 0];
    for policy in Policy::ALL {
        assert_eq!(simulate(policy, 3, &refs, 3).unwrap(), 2);
        assert_eq!(simulate(policy, 3, &refs, 100).unwrap(), 2);
        assert_eq!(simulate(policy, 5, &BELADY_STRING, 5).unwrap(), 5);
    }
}

#[test]
fn test_unreferenced_pages_do_not_fault() {
    for policy in Policy::ALL {
        assert_eq!(simulate(policy, 5, &[0, 0, 0], 5).unwrap(), 1);
    }
}

#[test]
fn test_single_frame_faults_on_every_change() {
    let refs = [0, 0, 1, 1, 0, 2, 2];
    for policy in Policy::ALL {
        assert_eq!(simulate(policy, 3, &refs, 1).unwrap(), 4);
    }
}

#[test]
fn test_single_page_address_space() {
    for policy in Policy::ALL {
        assert_eq!(simulate(policy, 1, &[0, 0, 0, 0], 1).unwrap(), 1);
        assert_eq!(simulate(policy, 1, &[0, 0, 0, 0], 0).unwrap(), 4);
    }
}

#[test]
fn test_simulation_is_repeatable() {
    let refs = random_reference_string(20, 500, 99);
    for policy in Policy::ALL {
        let first = simulate_trace(policy, 20, &refs, 7).unwrap();
        let second = simulate_trace(policy, 20, &refs, 7).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_large_random_string_stays_in_bounds() {
    let refs = random_reference_string(64, 5_000, 3);
    let distinct = distinct_pages(&refs);
    for policy in Policy::ALL {
        for frames in [1, 8, 32, 63] {
            let faults = simulate(policy, 64, &refs, frames).unwrap();
            assert!(faults >= distinct);
            assert!(faults <= refs.len());
        }
    }
}
