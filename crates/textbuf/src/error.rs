use thiserror::Error;

/// Errors returned by bounds-checked [`TextBuffer`](crate::TextBuffer)
/// accessors. Out-of-range requests are reported, never silently clamped.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextError {
    /// A position at or past the end of the view.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// A `[start, end)` range that is inverted or extends past the view.
    #[error("invalid range {start}..{end} for length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },
}

/// Errors returned by the fallible [`RecordArray`](crate::RecordArray)
/// operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    /// The allocator could not provide the requested capacity.
    #[error("allocation of {bytes} bytes failed")]
    AllocationFailure { bytes: usize },
}
