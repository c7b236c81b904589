use core::fmt;

use bstr::{BStr, ByteSlice};

use crate::{error::TextError, scan, text::TextBuffer};

/// A borrowed view into a subrange of a [`TextBuffer`].
///
/// Slices share the owner's lifetime and are never independently released;
/// promote one with [`to_text_buffer`](TextSlice::to_text_buffer) when an
/// owned copy is needed past the borrow.
#[derive(Clone, Copy)]
pub struct TextSlice<'a> {
    bytes: &'a [u8],
}

impl<'a> TextSlice<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Length of the view, in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` when the view holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The view as a byte slice, borrowing from the owning buffer.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The view as a [`BStr`] for lossy display and inspection.
    #[must_use]
    pub fn as_bstr(&self) -> &'a BStr {
        self.bytes.as_bstr()
    }

    /// Byte at position `pos` within the view.
    ///
    /// # Errors
    ///
    /// [`TextError::IndexOutOfRange`] when `pos >= self.len()`.
    pub fn byte_at(&self, pos: usize) -> Result<u8, TextError> {
        self.bytes
            .get(pos)
            .copied()
            .ok_or(TextError::IndexOutOfRange {
                index: pos,
                len: self.bytes.len(),
            })
    }

    /// Offset of the first occurrence of `needle` in the view.
    pub fn find(&self, needle: impl AsRef<[u8]>) -> Option<usize> {
        scan::find(self.bytes, needle.as_ref())
    }

    /// Offset of the last occurrence of `needle` in the view.
    pub fn rfind(&self, needle: impl AsRef<[u8]>) -> Option<usize> {
        scan::rfind(self.bytes, needle.as_ref())
    }

    /// Number of non-overlapping occurrences of `needle` in the view.
    #[must_use]
    pub fn count(&self, needle: impl AsRef<[u8]>) -> usize {
        scan::count(self.bytes, needle.as_ref())
    }

    /// `true` iff `prefix` occurs at offset 0.
    #[must_use]
    pub fn starts_with(&self, prefix: impl AsRef<[u8]>) -> bool {
        self.find(prefix) == Some(0)
    }

    /// `true` iff the last occurrence of `suffix` ends exactly at the end of
    /// the view.
    #[must_use]
    pub fn ends_with(&self, suffix: impl AsRef<[u8]>) -> bool {
        let suffix = suffix.as_ref();
        self.rfind(suffix)
            .is_some_and(|at| at + suffix.len() == self.bytes.len())
    }

    /// Copies the view into a fresh, independently owned [`TextBuffer`].
    #[must_use]
    pub fn to_text_buffer(&self) -> TextBuffer {
        TextBuffer::new(self.bytes)
    }
}

impl fmt::Display for TextSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_bstr(), f)
    }
}

impl fmt::Debug for TextSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_bstr(), f)
    }
}

impl PartialEq for TextSlice<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for TextSlice<'_> {}

impl PartialEq<[u8]> for TextSlice<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes == other
    }
}

impl PartialEq<&[u8]> for TextSlice<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.bytes == *other
    }
}

impl PartialEq<&str> for TextSlice<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}
