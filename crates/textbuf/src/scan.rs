//! Naive substring search over byte slices.
//!
//! Direct comparison at every candidate start position, no preprocessing:
//! no failure function, no hashing, O(n·m) in the worst case. Both the
//! forward and backward scans share the same shape and differ only in the
//! direction candidate offsets are tried, so ties resolve to the lowest
//! offset for [`find`] and the highest for [`rfind`].

/// Byte offset of the first occurrence of `needle` in `haystack`.
///
/// The empty needle matches at offset 0 by convention. A needle longer than
/// the haystack cannot occur and yields `None` immediately.
pub(crate) fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    let last = haystack.len().checked_sub(needle.len())?;
    (0..=last).find(|&at| haystack[at..at + needle.len()] == *needle)
}

/// Byte offset of the last occurrence of `needle` in `haystack`.
///
/// The empty needle matches at the end of the haystack, mirroring the
/// convention of [`find`].
pub(crate) fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(haystack.len());
    }
    let last = haystack.len().checked_sub(needle.len())?;
    (0..=last).rev().find(|&at| haystack[at..at + needle.len()] == *needle)
}

/// Number of non-overlapping occurrences of `needle` in `haystack`.
///
/// Each match is consumed whole before the search resumes, so `"aaaa"`
/// contains `"aa"` twice, not three times. The empty needle counts as zero
/// occurrences; anything else would not terminate.
pub(crate) fn count(haystack: &[u8], needle: &[u8]) -> usize {
    if needle.is_empty() {
        return 0;
    }
    let mut occurrences = 0;
    let mut rest = haystack;
    while let Some(at) = find(rest, needle) {
        occurrences += 1;
        rest = &rest[at + needle.len()..];
    }
    occurrences
}
