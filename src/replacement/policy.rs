use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValidationError;

/// Page replacement policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, clap::ValueEnum)]
pub enum Policy {
    /// Evict the earliest admitted page
    #[value(name = "fifo")]
    Fifo,
    /// Evict the least recently referenced page
    #[value(name = "lru")]
    Lru,
    /// Evict the page whose next use is farthest away
    #[value(name = "optimal", alias = "opt")]
    Optimal,
}

impl Policy {
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "optimal" | "opt" => Ok(Policy::Optimal),
            _ => Err(ValidationError::UnknownPolicy(s.to_string())),
        }
    }
}
