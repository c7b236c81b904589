use rstest::rstest;

use crate::TextBuffer;

#[rstest]
#[case("abc", true)]
#[case("aBc", true)]
#[case("abc123", false)]
#[case("ab c", false)]
#[case("", true)] // vacuous
fn is_alpha_requires_every_byte_to_be_a_letter(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(TextBuffer::from(input).is_alpha(), expected);
}

#[rstest]
#[case("0123456789", true)]
#[case("12a", false)]
#[case("1 2", false)]
#[case("-12", false)]
#[case("", true)]
fn is_numeric_requires_every_byte_to_be_a_digit(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(TextBuffer::from(input).is_numeric(), expected);
}

#[rstest]
#[case("abc123", true)]
#[case("ABC", true)]
#[case("a-1", false)]
#[case("a 1", false)]
#[case("", true)]
fn is_alphanumeric_unions_letters_and_digits(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(TextBuffer::from(input).is_alphanumeric(), expected);
}

#[rstest]
#[case("abc", true)]
#[case("aBc", false)]
#[case("abc1", false)] // non-letters fail the case classes
#[case("", true)]
fn is_lower_rejects_anything_but_lowercase_letters(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(TextBuffer::from(input).is_lower(), expected);
}

#[rstest]
#[case("ABC", true)]
#[case("AbC", false)]
#[case("ABC!", false)]
#[case("", true)]
fn is_upper_rejects_anything_but_uppercase_letters(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(TextBuffer::from(input).is_upper(), expected);
}

#[rstest]
#[case(" \t\r\n\x0b\x0c", true)]
#[case(" x ", false)]
#[case("", true)]
fn is_space_covers_the_six_byte_whitespace_class(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(TextBuffer::from(input).is_space(), expected);
}

#[test]
fn classification_runs_over_the_narrowed_view() {
    let mut buf = TextBuffer::from("  abc  ");
    assert!(!buf.is_alpha());
    buf.trim();
    assert!(buf.is_alpha());
    assert!(buf.is_lower());
}
