use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::SimulationError;
use crate::replacement::Policy;

/// Fault count per file name, in name order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SimulationResult(BTreeMap<String, usize>);

impl SimulationResult {
    pub fn get(&self, name: &str) -> Option<usize> {
        self.0.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(name, &faults)| (name.as_str(), faults))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Outcome of one batch run: partial results plus the entries that failed
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub policy: Policy,
    results: SimulationResult,
    failures: BTreeMap<String, SimulationError>,
}

impl BatchReport {
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            results: SimulationResult::default(),
            failures: BTreeMap::new(),
        }
    }

    pub(crate) fn record(&mut self, name: &str, outcome: Result<usize, SimulationError>) {
        match outcome {
            Ok(faults) => {
                self.results.0.insert(name.to_string(), faults);
            }
            Err(err) => {
                self.failures.insert(name.to_string(), err);
            }
        }
    }

    pub fn results(&self) -> &SimulationResult {
        &self.results
    }

    pub fn failures(&self) -> &BTreeMap<String, SimulationError> {
        &self.failures
    }

    pub fn fault_count(&self, name: &str) -> Option<usize> {
        self.results.get(name)
    }

    /// True when every entry produced a fault count
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
