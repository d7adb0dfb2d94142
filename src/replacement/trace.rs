use serde::Serialize;

use crate::common::types::{PageNo, Position};

/// What happened when one reference was served
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccessOutcome {
    Hit,
    /// The page had to be loaded, possibly displacing `evicted`
    Fault { evicted: Option<PageNo> },
}

impl AccessOutcome {
    pub fn is_fault(&self) -> bool {
        matches!(self, AccessOutcome::Fault { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccessEvent {
    pub position: Position,
    pub page: PageNo,
    pub outcome: AccessOutcome,
}

/// Step-by-step record of one simulation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimulationTrace {
    pub events: Vec<AccessEvent>,
    pub faults: usize,
}

impl SimulationTrace {
    pub fn push(&mut self, event: AccessEvent) {
        if event.outcome.is_fault() {
            self.faults += 1;
        }
        self.events.push(event);
    }

    pub fn hits(&self) -> usize {
        self.events.len() - self.faults
    }

    /// Pages evicted, in eviction order
    pub fn evictions(&self) -> Vec<PageNo> {
        self.events
            .iter()
            .filter_map(|event| match event.outcome {
                AccessOutcome::Fault { evicted } => evicted,
                AccessOutcome::Hit => None,
            })
            .collect()
    }
}
