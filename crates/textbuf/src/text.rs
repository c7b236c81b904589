//! The owned, mutable byte string at the heart of the crate.
//!
//! Why a view over a `Vec` instead of a bare pointer/length pair
//! - Trimming and slicing narrow the string without copying. Narrowing is
//!   recorded as a `(start, len)` window into the backing `Vec`, which keeps
//!   its true bounds, so a trimmed buffer still frees the whole allocation
//!   on drop and a later widening bug cannot scribble outside it.
//! - Borrowed sub-views ([`TextSlice`]) carry the owner's lifetime; only the
//!   owner can release the backing storage, and the borrow checker rules out
//!   use-after-free and double-free outright.
//!
//! Invariants
//! - `start + len <= bytes.len()` at all times.
//! - Every index `i < len` is readable and writable through the view.
//! - Mutating operations touch only bytes inside the current view.

use alloc::vec::Vec;
use core::fmt;

use bstr::{BStr, ByteSlice};

use crate::{ascii, error::TextError, scan, slice::TextSlice};

/// An owned, mutable, length-tracked ASCII byte string.
///
/// Transformations work in place and return `&mut Self` so they chain the
/// way the underlying operations compose:
///
/// ```
/// use textbuf::TextBuffer;
///
/// let mut text = TextBuffer::from("   the go gopher   ");
/// text.trim().make_title();
/// assert_eq!(text.as_bytes(), b"The Go Gopher");
/// ```
///
/// Queries never mutate; [`substring`](TextBuffer::substring) hands out a
/// borrowed [`TextSlice`] rather than truncating the buffer.
#[derive(Clone)]
pub struct TextBuffer {
    bytes: Vec<u8>,
    start: usize,
    len: usize,
}

impl TextBuffer {
    /// Creates a buffer by copying `input` in full.
    ///
    /// The empty input produces a zero-length buffer. The copy never aliases
    /// caller-owned memory; releasing the buffer is just dropping it.
    pub fn new(input: impl AsRef<[u8]>) -> Self {
        let bytes = input.as_ref().to_vec();
        let len = bytes.len();
        Self {
            bytes,
            start: 0,
            len,
        }
    }

    /// Logical length of the current view, in bytes. O(1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` when the current view holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The current view as a byte slice.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[self.start..self.start + self.len]
    }

    /// The current view as a [`BStr`] for lossy display and inspection.
    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        self.as_bytes().as_bstr()
    }

    /// Copy of the current view with a trailing NUL byte, for interop with
    /// APIs that expect C strings.
    #[must_use]
    pub fn to_nul_terminated(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len + 1);
        out.extend_from_slice(self.as_bytes());
        out.push(0);
        out
    }

    /// Byte at position `pos` within the view.
    ///
    /// # Errors
    ///
    /// [`TextError::IndexOutOfRange`] when `pos >= self.len()`.
    pub fn byte_at(&self, pos: usize) -> Result<u8, TextError> {
        self.as_bytes()
            .get(pos)
            .copied()
            .ok_or(TextError::IndexOutOfRange {
                index: pos,
                len: self.len,
            })
    }

    fn view_mut(&mut self) -> &mut [u8] {
        let end = self.start + self.len;
        &mut self.bytes[self.start..end]
    }

    /// Maps `A-Z` to `a-z` in place; all other bytes are unchanged.
    pub fn make_lowercase(&mut self) -> &mut Self {
        self.view_mut().make_ascii_lowercase();
        self
    }

    /// Maps `a-z` to `A-Z` in place; all other bytes are unchanged.
    pub fn make_uppercase(&mut self) -> &mut Self {
        self.view_mut().make_ascii_uppercase();
        self
    }

    /// Uppercases the first byte of every space-delimited word in place:
    /// byte 0 (when present) and every byte immediately following a `' '`.
    pub fn make_title(&mut self) -> &mut Self {
        let view = self.view_mut();
        for i in 0..view.len() {
            if i == 0 || view[i - 1] == b' ' {
                view[i] = view[i].to_ascii_uppercase();
            }
        }
        self
    }

    /// Advances the view past leading ASCII whitespace, shrinking the length
    /// by the same amount. No bytes are copied or written.
    ///
    /// An all-whitespace buffer trims down to length zero.
    pub fn trim_start(&mut self) -> &mut Self {
        let leading = self
            .as_bytes()
            .iter()
            .take_while(|&&b| ascii::is_space(b))
            .count();
        self.start += leading;
        self.len -= leading;
        self
    }

    /// Truncates the view after the last non-whitespace byte. The scan runs
    /// backward from the last valid index; no bytes are copied or written.
    pub fn trim_end(&mut self) -> &mut Self {
        let trailing = self
            .as_bytes()
            .iter()
            .rev()
            .take_while(|&&b| ascii::is_space(b))
            .count();
        self.len -= trailing;
        self
    }

    /// [`trim_start`](TextBuffer::trim_start) then
    /// [`trim_end`](TextBuffer::trim_end).
    pub fn trim(&mut self) -> &mut Self {
        self.trim_start().trim_end()
    }

    /// Offset of the first occurrence of `needle` in the view, earliest
    /// match winning. The empty needle is found at offset 0.
    pub fn find(&self, needle: impl AsRef<[u8]>) -> Option<usize> {
        scan::find(self.as_bytes(), needle.as_ref())
    }

    /// Offset of the last occurrence of `needle` in the view, latest match
    /// winning. The empty needle is found at `self.len()`.
    pub fn rfind(&self, needle: impl AsRef<[u8]>) -> Option<usize> {
        scan::rfind(self.as_bytes(), needle.as_ref())
    }

    /// Number of non-overlapping occurrences of `needle` in the view.
    #[must_use]
    pub fn count(&self, needle: impl AsRef<[u8]>) -> usize {
        scan::count(self.as_bytes(), needle.as_ref())
    }

    /// `true` iff `needle` occurs at offset 0.
    #[must_use]
    pub fn starts_with(&self, prefix: impl AsRef<[u8]>) -> bool {
        self.find(prefix) == Some(0)
    }

    /// `true` iff the last occurrence of `suffix` ends exactly at the end of
    /// the view. The empty suffix always matches.
    #[must_use]
    pub fn ends_with(&self, suffix: impl AsRef<[u8]>) -> bool {
        let suffix = suffix.as_ref();
        self.rfind(suffix)
            .is_some_and(|at| at + suffix.len() == self.len)
    }

    /// Borrowed view of byte offsets `[start, end)` of the current view.
    ///
    /// The buffer itself is untouched; the slice lives as long as the borrow
    /// of `self` and cannot outlive or release the backing allocation.
    ///
    /// # Errors
    ///
    /// [`TextError::InvalidRange`] when `start > end` or `end > self.len()`.
    pub fn substring(&self, start: usize, end: usize) -> Result<TextSlice<'_>, TextError> {
        if start > end || end > self.len {
            return Err(TextError::InvalidRange {
                start,
                end,
                len: self.len,
            });
        }
        Ok(TextSlice::new(&self.as_bytes()[start..end]))
    }

    /// `true` iff every byte is an ASCII letter. Vacuously true when empty.
    #[must_use]
    pub fn is_alpha(&self) -> bool {
        self.as_bytes().iter().all(u8::is_ascii_alphabetic)
    }

    /// `true` iff every byte is an ASCII digit. Vacuously true when empty.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.as_bytes().iter().all(u8::is_ascii_digit)
    }

    /// `true` iff every byte is an ASCII letter or digit. Vacuously true
    /// when empty.
    #[must_use]
    pub fn is_alphanumeric(&self) -> bool {
        self.as_bytes().iter().all(u8::is_ascii_alphanumeric)
    }

    /// `true` iff every byte is a lowercase ASCII letter; non-letters fail.
    /// Vacuously true when empty.
    #[must_use]
    pub fn is_lower(&self) -> bool {
        self.as_bytes().iter().all(u8::is_ascii_lowercase)
    }

    /// `true` iff every byte is an uppercase ASCII letter; non-letters fail.
    /// Vacuously true when empty.
    #[must_use]
    pub fn is_upper(&self) -> bool {
        self.as_bytes().iter().all(u8::is_ascii_uppercase)
    }

    /// `true` iff every byte is ASCII whitespace (space, tab, newline,
    /// carriage return, vertical tab, form feed). Vacuously true when empty.
    #[must_use]
    pub fn is_space(&self) -> bool {
        self.as_bytes().iter().all(|&b| ascii::is_space(b))
    }
}

impl From<&str> for TextBuffer {
    fn from(input: &str) -> Self {
        Self::new(input.as_bytes())
    }
}

impl From<&[u8]> for TextBuffer {
    fn from(input: &[u8]) -> Self {
        Self::new(input)
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_bstr(), f)
    }
}

impl fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_bstr(), f)
    }
}

// Equality compares the current views, not the backing allocations: a
// trimmed buffer equals a freshly created copy of its view.
impl PartialEq for TextBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for TextBuffer {}

impl PartialEq<[u8]> for TextBuffer {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for TextBuffer {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<&str> for TextBuffer {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}
