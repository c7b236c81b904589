//! In-place ASCII byte-string manipulation.
//!
//! [`TextBuffer`] is an owned, mutable, length-tracked byte string. Its
//! transformations (trimming, case mapping) work on a *view* of the backing
//! allocation: they advance a start offset and shrink the reported length
//! instead of copying, while the backing storage keeps its true bounds so
//! narrowing can never leak or double-free. Queries (search, classification)
//! read the current view only.
//!
//! Everything is byte-wise and ASCII-only by design: case maps `A-Z <-> a-z`,
//! classification uses the fixed ASCII ranges, and whitespace is the
//! six-byte ASCII class. Multi-byte encodings pass through untouched.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod ascii;
mod error;
mod record_array;
mod scan;
mod slice;
mod text;

#[cfg(test)]
mod tests;

pub use error::{ArrayError, TextError};
pub use record_array::RecordArray;
pub use slice::TextSlice;
pub use text::TextBuffer;
