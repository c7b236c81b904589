use rstest::rstest;

use crate::TextBuffer;

#[rstest]
#[case("MiXeD 123!", "mixed 123!")]
#[case("ALL CAPS", "all caps")]
#[case("", "")]
fn lowercase_maps_ascii_letters_only(#[case] input: &str, #[case] expected: &str) {
    let mut buf = TextBuffer::from(input);
    buf.make_lowercase();
    assert_eq!(buf, expected);
}

#[rstest]
#[case("MiXeD 123!", "MIXED 123!")]
#[case("quiet", "QUIET")]
#[case("", "")]
fn uppercase_maps_ascii_letters_only(#[case] input: &str, #[case] expected: &str) {
    let mut buf = TextBuffer::from(input);
    buf.make_uppercase();
    assert_eq!(buf, expected);
}

#[rstest]
#[case("the go gopher", "The Go Gopher")]
#[case("x", "X")]
#[case("", "")]
#[case("a  b", "A  B")]
#[case(" leading", " Leading")]
#[case("already Title", "Already Title")]
#[case("1st 2nd", "1st 2nd")]
fn title_capitalizes_each_space_delimited_word(#[case] input: &str, #[case] expected: &str) {
    let mut buf = TextBuffer::from(input);
    buf.make_title();
    assert_eq!(buf, expected);
}

#[rstest]
#[case("   hi   ", "hi")]
#[case("hi", "hi")]
#[case("", "")]
#[case(" \t\r\n\x0b\x0c", "")]
#[case("\tmid dle\n", "mid dle")]
fn trim_strips_both_ends(#[case] input: &str, #[case] expected: &str) {
    let mut buf = TextBuffer::from(input);
    buf.trim();
    assert_eq!(buf, expected);
    assert_eq!(buf.len(), expected.len());
}

#[test]
fn trim_start_leaves_trailing_whitespace() {
    let mut buf = TextBuffer::from("  hi  ");
    buf.trim_start();
    assert_eq!(buf, "hi  ");
}

#[test]
fn trim_end_leaves_leading_whitespace() {
    let mut buf = TextBuffer::from("  hi  ");
    buf.trim_end();
    assert_eq!(buf, "  hi");
}

// The backward scan must start at the last valid index: a buffer with no
// trailing whitespace comes through unchanged.
#[test]
fn trim_end_without_trailing_whitespace_is_a_no_op() {
    let mut buf = TextBuffer::from("abc");
    buf.trim_end();
    assert_eq!(buf, "abc");
    assert_eq!(buf.len(), 3);
}

#[test]
fn trim_of_all_whitespace_yields_empty() {
    let mut buf = TextBuffer::from("   ");
    buf.trim();
    assert!(buf.is_empty());
}

#[test]
fn trimmed_view_supports_further_operations() {
    let mut buf = TextBuffer::from("  the go gopher  ");
    buf.trim().make_title();
    assert_eq!(buf, "The Go Gopher");
    assert_eq!(buf.find("Gopher"), Some(7));
    assert_eq!(buf.byte_at(0), Ok(b'T'));
}

#[test]
fn vertical_tab_counts_as_whitespace() {
    let mut buf = TextBuffer::from("\x0bhi\x0b");
    buf.trim();
    assert_eq!(buf, "hi");
}
