use serde::Serialize;

use crate::common::types::{FrameCount, Kilobytes};
use crate::error::{ConfigError, Result};
use crate::memory::layout;

/// Session-wide memory parameters, fixed once the first file is registered
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MemoryProfile {
    pub total_ram_kb: Kilobytes,
    pub page_size_kb: Kilobytes,
}

impl MemoryProfile {
    pub fn new(total_ram_kb: Kilobytes, page_size_kb: Kilobytes) -> std::result::Result<Self, ConfigError> {
        if !total_ram_kb.is_finite() || total_ram_kb <= 0.0 {
            return Err(ConfigError::NonPositiveTotalRam(total_ram_kb));
        }
        layout::check_page_size(page_size_kb)?;
        Ok(Self {
            total_ram_kb,
            page_size_kb,
        })
    }

    pub fn pages(&self, size_kb: Kilobytes) -> Result<usize> {
        layout::pages(size_kb, self.page_size_kb)
    }

    pub fn frames(&self, allocated_kb: Kilobytes) -> Result<FrameCount> {
        layout::frames(allocated_kb, self.page_size_kb)
    }

    /// Frames in the whole simulated RAM
    pub fn total_frames(&self) -> FrameCount {
        (self.total_ram_kb / self.page_size_kb).ceil() as FrameCount
    }
}
