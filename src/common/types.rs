/// Logical page number within a single file's address space
pub type PageNo = usize;

/// Number of resident frames granted to a file
pub type FrameCount = usize;

/// Sizes are expressed in kilobytes and may be fractional
pub type Kilobytes = f64;

/// Position of a reference inside a reference string
pub type Position = usize;
