use thiserror::Error;

use crate::common::types::{PageNo, Position};

/// Problems with the session-wide memory profile
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Page size must be positive, got {0} KB")]
    NonPositivePageSize(f64),
    #[error("Total RAM must be positive, got {0} KB")]
    NonPositiveTotalRam(f64),
    #[error("Memory profile has not been set")]
    ProfileNotSet,
    #[error("Memory profile is already set to {current_ram} KB RAM / {current_page} KB pages, cannot change to {requested_ram} KB / {requested_page} KB")]
    ProfileAlreadySet {
        current_ram: f64,
        current_page: f64,
        requested_ram: f64,
        requested_page: f64,
    },
}

/// Malformed per-file input, detected before any state is touched
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("File name must not be empty")]
    EmptyName,
    #[error("Missing value for {0}")]
    MissingField(&'static str),
    #[error("{field} must be a valid number, got '{input}'")]
    NotANumber { field: &'static str, input: String },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must not be negative, got {value}")]
    NegativeSize { field: &'static str, value: f64 },
    #[error("Reference {page} at position {position} is outside page range 0..{page_count}")]
    ReferenceOutOfRange {
        position: Position,
        page: PageNo,
        page_count: usize,
    },
    #[error("No file named '{0}' is registered")]
    UnknownFile(String),
    #[error("Unknown replacement policy '{0}' (expected FIFO, LRU or Optimal)")]
    UnknownPolicy(String),
}

/// A core algorithm was handed internally inconsistent input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreconditionError {
    #[error("Reference {page} at position {position} is outside page range 0..{page_count}")]
    ReferenceOutOfRange {
        position: Position,
        page: PageNo,
        page_count: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Precondition violated: {0}")]
    Precondition(#[from] PreconditionError),
}

pub type Result<T> = std::result::Result<T, SimulationError>;
