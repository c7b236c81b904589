//! Growable array of uniform-size records.
//!
//! The container stores opaque fixed-size values and never inspects their
//! internals; the element size is fixed by the type parameter. Growth
//! doubles capacity for amortized
//! O(1) appends. Plain [`push`](RecordArray::push) keeps the fatal-on-OOM
//! policy of the global allocator; [`try_push`](RecordArray::try_push) is
//! the recoverable alternative for callers that want to handle allocation
//! failure themselves.

use alloc::vec::Vec;
use core::mem;

use crate::error::ArrayError;

/// A growable array of uniform-size records with doubling growth.
///
/// ```
/// use textbuf::{RecordArray, TextBuffer};
///
/// let mut log = RecordArray::new();
/// log.push(TextBuffer::from("first"));
/// log.push(TextBuffer::from("second"));
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.get(1).map(TextBuffer::as_bytes), Some(&b"second"[..]));
/// assert!(log.get(2).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct RecordArray<T> {
    records: Vec<T>,
}

impl<T> RecordArray<T> {
    /// Creates an empty array. No allocation happens until the first push.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Creates an empty array with room for `records` elements.
    #[must_use]
    pub fn with_capacity(records: usize) -> Self {
        Self {
            records: Vec::with_capacity(records),
        }
    }

    /// Appends a record. Amortized O(1); aborts on allocation failure.
    pub fn push(&mut self, record: T) {
        self.records.push(record);
    }

    /// Appends a record, reporting allocation failure instead of aborting.
    ///
    /// Growth is explicit here: a full array doubles its capacity (from a
    /// minimum of one element) before the append.
    ///
    /// # Errors
    ///
    /// [`ArrayError::AllocationFailure`] when the allocator cannot provide
    /// the doubled capacity. The array is unchanged on failure.
    pub fn try_push(&mut self, record: T) -> Result<(), ArrayError> {
        if self.records.len() == self.records.capacity() {
            let additional = self.records.capacity().max(1);
            self.records
                .try_reserve_exact(additional)
                .map_err(|_| ArrayError::AllocationFailure {
                    bytes: additional * mem::size_of::<T>(),
                })?;
        }
        self.records.push(record);
        Ok(())
    }

    /// Removes and returns the last record, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        self.records.pop()
    }

    /// Record at `index`, or `None` when the index is out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.records.get(index)
    }

    /// Number of records currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` when no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records the array can hold before growing again.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.records.capacity()
    }
}

impl<T> Default for RecordArray<T> {
    fn default() -> Self {
        Self::new()
    }
}
