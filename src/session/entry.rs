use serde::Serialize;

use crate::common::types::{Kilobytes, PageNo};

/// One tracked file or process and its synthetic workload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileEntry {
    pub name: String,
    pub size_kb: Kilobytes,
    pub allocated_kb: Kilobytes,
    pub page_count: usize,
    pub reference_string: Vec<PageNo>,
}

/// Raw parameters for registering a file with a generated reference string
#[derive(Debug, Clone, PartialEq)]
pub struct FileRequest {
    pub name: String,
    pub size_kb: Kilobytes,
    pub allocated_kb: Kilobytes,
    pub reference_length: usize,
}

impl FileRequest {
    pub fn new(
        name: impl Into<String>,
        size_kb: Kilobytes,
        allocated_kb: Kilobytes,
        reference_length: usize,
    ) -> Self {
        Self {
            name: name.into(),
            size_kb,
            allocated_kb,
            reference_length,
        }
    }
}

/// Required versus allocated memory for one file, as shown in the
/// segmentation view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentUsage {
    pub name: String,
    pub required_kb: Kilobytes,
    pub allocated_kb: Kilobytes,
}

impl From<&FileEntry> for SegmentUsage {
    fn from(entry: &FileEntry) -> Self {
        Self {
            name: entry.name.clone(),
            required_kb: entry.size_kb,
            allocated_kb: entry.allocated_kb,
        }
    }
}
