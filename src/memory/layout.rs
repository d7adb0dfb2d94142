use crate::common::types::{FrameCount, Kilobytes};
use crate::error::{ConfigError, Result, ValidationError};

/// Number of pages needed to hold `size_kb`, i.e. `ceil(size_kb / page_size)`.
///
/// A size of zero yields zero pages, a file with no valid references.
pub fn pages(size_kb: Kilobytes, page_size: Kilobytes) -> Result<usize> {
    ceil_ratio("file size", size_kb, page_size)
}

/// Number of frames granted by an allocation of `allocated_kb`.
pub fn frames(allocated_kb: Kilobytes, page_size: Kilobytes) -> Result<FrameCount> {
    ceil_ratio("allocated RAM", allocated_kb, page_size)
}

/// Rejects page sizes that cannot divide anything
pub fn check_page_size(page_size: Kilobytes) -> std::result::Result<(), ConfigError> {
    if !page_size.is_finite() || page_size <= 0.0 {
        return Err(ConfigError::NonPositivePageSize(page_size));
    }
    Ok(())
}

/// Checks that a kilobyte quantity is finite and non-negative
pub fn check_size(field: &'static str, value: Kilobytes) -> std::result::Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeSize { field, value });
    }
    Ok(())
}

fn ceil_ratio(field: &'static str, value: Kilobytes, page_size: Kilobytes) -> Result<usize> {
    check_page_size(page_size)?;
    check_size(field, value)?;
    Ok((value / page_size).ceil() as usize)
}
