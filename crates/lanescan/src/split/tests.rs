use alloc::{vec, vec::Vec};

use bstr::{BStr, ByteSlice};
use rstest::rstest;

use super::*;

fn parts<'a>(haystack: &'a [u8], separator: &[u8], remove_empty: bool) -> Vec<&'a BStr> {
    split_sequence(haystack, separator, remove_empty)
        .bstrs()
        .collect()
}

fn strs<'a>(expected: &[&'a str]) -> Vec<&'a BStr> {
    expected.iter().map(|&s| s.as_bytes().as_bstr()).collect()
}

#[rstest]
#[case(b"a,,b", b",", false, &["a", "", "b"])]
#[case(b"a,,b", b",", true, &["a", "b"])]
#[case(b",", b",", false, &["", ""])]
#[case(b",", b",", true, &[])]
#[case(b",a", b",", false, &["", "a"])]
#[case(b"a,", b",", false, &["a", ""])]
#[case(b",,a,,", b",", true, &["a"])]
#[case(b"abc", b",", false, &["abc"])]
#[case(b"", b",", false, &[])]
#[case(b"", b",", true, &[])]
#[case(b"one two  three", b" ", true, &["one", "two", "three"])]
#[case(b"one two  three", b" ", false, &["one", "two", "", "three"])]
#[case(b"a::b::c", b"::", false, &["a", "b", "c"])]
#[case(b"::a::::b::", b"::", false, &["", "a", "", "b", ""])]
#[case(b"::a::::b::", b"::", true, &["a", "b"])]
#[case(b"a:::b", b"::", false, &["a", ":b"])]
#[case(b"::", b"::", false, &["", ""])]
#[case(b"a:", b"::", false, &["a:"])]
fn splits(
    #[case] haystack: &[u8],
    #[case] separator: &[u8],
    #[case] remove_empty: bool,
    #[case] expected: &[&str],
) {
    assert_eq!(parts(haystack, separator, remove_empty), strs(expected));
}

#[test]
fn single_element_and_sequence_agree() {
    let haystack = b",x,,yy,zzz,";
    for remove_empty in [false, true] {
        let single: Vec<&[u8]> = split(haystack, b',', remove_empty).collect();
        let sequence: Vec<&[u8]> = split_sequence(haystack, b",", remove_empty).collect();
        assert_eq!(single, sequence);
    }
}

#[test]
fn cursor_protocol() {
    let mut cursor = split(b"a,b", b',', false);
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.remaining_separators(), 1);
    assert!(cursor.advance());
    assert_eq!(cursor.current(), Some(&b"a"[..]));
    assert_eq!(cursor.current_range(), Some(0..1));
    assert!(cursor.advance());
    assert_eq!(cursor.current(), Some(&b"b"[..]));
    assert_eq!(cursor.current_range(), Some(2..3));
    assert_eq!(cursor.remaining_separators(), 0);
    assert!(!cursor.advance());
    assert!(cursor.is_exhausted());
    assert_eq!(cursor.current(), None);
    // Exhaustion is sticky.
    assert!(!cursor.advance());
    assert_eq!(cursor.next(), None);
}

#[test]
fn size_hint_is_exact_when_keeping_empties() {
    let mut cursor = split(b",a,,b,", b',', false);
    for remaining in (0..=5).rev() {
        assert_eq!(cursor.size_hint(), (remaining, Some(remaining)));
        cursor.next();
    }
    let cursor = split(b",a,,b,", b',', true);
    assert_eq!(cursor.size_hint(), (0, Some(5)));
}

#[test]
fn slices_borrow_from_the_input() {
    let haystack = [b'x'; 100];
    let range = haystack.as_ptr_range();
    for slice in split(&haystack[..], b'x', false) {
        assert!(slice.is_empty());
        assert!(range.contains(&slice.as_ptr()) || slice.as_ptr() == range.end);
    }
}

#[test]
fn long_inputs_cross_vector_boundaries() {
    let mut haystack = Vec::new();
    let mut expected = Vec::new();
    for len in 0..80 {
        let field = vec![b'f'; len];
        expected.push(field.clone());
        haystack.extend_from_slice(&field);
        haystack.push(b'\t');
    }
    haystack.pop();
    let got: Vec<&[u8]> = split(&haystack[..], b'\t', false).collect();
    assert_eq!(got, expected);
    let got: Vec<&[u8]> = split(&haystack[..], b'\t', true).collect();
    assert_eq!(got, &expected[1..]);
}

#[test]
fn utf16_units() {
    let text: Vec<u16> = "a\u{2029}\u{1F600}\u{2029}".encode_utf16().collect();
    let parts: Vec<&[u16]> = split(&text[..], 0x2029, false).collect();
    let expected: [&[u16]; 3] = [&[0x61], &[0xd83d, 0xde00], &[]];
    assert_eq!(parts, expected);
}

#[test]
fn strings() {
    let parts: Vec<&str> = split_str("née::ça::", "::", false).collect();
    assert_eq!(parts, ["née", "ça", ""]);
    let parts: Vec<&str> = split_str("α→β→→γ", "→", true).collect();
    assert_eq!(parts, ["α", "β", "γ"]);
    assert_eq!(split_str("a b c", " ", false).remaining_separators(), 2);
}

#[test]
fn empty_separator() {
    assert_eq!(
        try_split_sequence(b"abc", b"", false).err(),
        Some(SplitError::EmptySeparator)
    );
    assert!(try_split_str("abc", "", false).is_err());
}

#[test]
#[should_panic(expected = "separator must contain at least one element")]
fn empty_separator_panics() {
    let _ = split_sequence(b"abc", b"", false);
}
