//! Byte-wise ASCII character classes.
//!
//! Classification is done on raw bytes against the fixed ranges `a..=z`,
//! `A..=Z` and `0..=9`, never against locale tables or Unicode properties.
//! Letter and digit classes come straight from the `u8::is_ascii_*` methods;
//! the whitespace class is wider than the one `core` ships and lives here.

/// The ASCII whitespace class: space, tab, newline, carriage return,
/// vertical tab, form feed.
///
/// `u8::is_ascii_whitespace` excludes vertical tab (0x0B); the classic
/// `isspace` class this engine mirrors includes it.
#[inline]
pub(crate) const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}
