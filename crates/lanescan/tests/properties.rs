#![allow(missing_docs)]

use lanescan::{
    Predicate, ScanOptions, Strategy, scan_with, split, split_sequence, split_str,
};
use quickcheck::{Arbitrary, Gen, QuickCheck};
use quickcheck_macros::quickcheck;

/// Byte values that sit on either side of every interesting threshold.
const ALPHABET: [u8; 8] = [0, 9, 31, 32, 33, 127, 128, 255];
const TEXT_ALPHABET: [u8; 4] = [b'a', b'b', b',', b':'];

fn tests() -> u64 {
    if cfg!(any(miri, feature = "test-fast")) {
        50
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    }
}

fn pick(g: &mut Gen, alphabet: &[u8]) -> u8 {
    g.choose(alphabet).copied().unwrap_or_default()
}

/// A byte buffer viewed from a random offset, so the vector prologue sees
/// every alignment.
#[derive(Debug, Clone)]
struct Haystack {
    bytes: Vec<u8>,
    offset: usize,
}

impl Haystack {
    fn view(&self) -> &[u8] {
        &self.bytes[self.offset.min(self.bytes.len())..]
    }
}

impl Arbitrary for Haystack {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 300;
        let bytes = (0..len).map(|_| pick(g, &ALPHABET)).collect();
        Haystack {
            bytes,
            offset: usize::arbitrary(g) % 16,
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let offset = self.offset;
        Box::new(self.bytes.shrink().map(move |bytes| Haystack { bytes, offset }))
    }
}

#[derive(Debug, Clone, Copy)]
struct AnyPredicate(Predicate<u8>);

impl Arbitrary for AnyPredicate {
    fn arbitrary(g: &mut Gen) -> Self {
        let (a, b, c) = (pick(g, &ALPHABET), pick(g, &ALPHABET), pick(g, &ALPHABET));
        AnyPredicate(match usize::arbitrary(g) % 11 {
            0 => Predicate::Equals(a),
            1 => Predicate::EqualsEither(a, b),
            2 => Predicate::EqualsAny(a, b, c),
            3 => Predicate::LessThan(a),
            4 => Predicate::GreaterThan(a),
            5 => Predicate::EqualsOrLessThan {
                value: a,
                threshold: c,
            },
            6 => Predicate::EitherOrLessThan {
                values: [a, b],
                threshold: c,
            },
            7 => Predicate::EqualsOrGreaterThan {
                value: a,
                threshold: c,
            },
            8 => Predicate::EitherOrGreaterThan {
                values: [a, b],
                threshold: c,
            },
            9 => Predicate::NotEquals(a),
            _ => Predicate::Neither(a, b),
        })
    }
}

/// Short text over a four-letter alphabet that includes the separators.
#[derive(Debug, Clone)]
struct Text(Vec<u8>);

impl Arbitrary for Text {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 64;
        Text((0..len).map(|_| pick(g, &TEXT_ALPHABET)).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Text))
    }
}

/// A non-empty separator of up to three elements.
#[derive(Debug, Clone)]
struct Separator(Vec<u8>);

impl Arbitrary for Separator {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = 1 + usize::arbitrary(g) % 3;
        Separator((0..len).map(|_| pick(g, &TEXT_ALPHABET)).collect())
    }
}

fn join(parts: &[&[u8]], separator: &[u8]) -> Vec<u8> {
    parts.join(separator)
}

#[test]
fn every_strategy_matches_a_naive_scan() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(haystack: Haystack, predicate: AnyPredicate) -> bool {
        let view = haystack.view();
        let expected = view.iter().position(|&b| predicate.0.matches(b));
        [Strategy::Auto, Strategy::Scalar, Strategy::Portable]
            .into_iter()
            .all(|strategy| {
                scan_with(view, predicate.0, ScanOptions::with_strategy(strategy)) == expected
            })
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Haystack, AnyPredicate) -> bool);
}

#[test]
fn split_then_join_reproduces_input() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: Text, separator: Separator) -> bool {
        let parts: Vec<&[u8]> = split_sequence(&text.0[..], &separator.0[..], false).collect();
        join(&parts, &separator.0) == text.0
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Text, Separator) -> bool);
}

#[test]
fn resplitting_a_join_is_idempotent() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: Text, separator: Separator) -> bool {
        let first: Vec<&[u8]> = split_sequence(&text.0[..], &separator.0[..], false).collect();
        let joined = join(&first, &separator.0);
        let second: Vec<&[u8]> = split_sequence(&joined[..], &separator.0[..], false).collect();
        first == second
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Text, Separator) -> bool);
}

#[test]
fn remove_empty_drops_exactly_the_empty_slices() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: Text, separator: Separator) -> bool {
        let kept: Vec<&[u8]> = split_sequence(&text.0[..], &separator.0[..], false)
            .filter(|s| !s.is_empty())
            .collect();
        let removed: Vec<&[u8]> = split_sequence(&text.0[..], &separator.0[..], true).collect();
        kept == removed
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Text, Separator) -> bool);
}

#[test]
fn single_byte_split_matches_slice_split() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(haystack: Haystack, separator: u8) -> bool {
        let view = haystack.view();
        if view.is_empty() {
            return split(view, separator, false).next().is_none();
        }
        let ours: Vec<&[u8]> = split(view, separator, false).collect();
        let expected: Vec<&[u8]> = view.split(|&b| b == separator).collect();
        ours == expected
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Haystack, u8) -> bool);
}

#[test]
fn string_split_matches_str_split() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: Text, separator: Separator) -> bool {
        // Both alphabets are ASCII.
        let (Ok(text), Ok(separator)) = (
            core::str::from_utf8(&text.0),
            core::str::from_utf8(&separator.0),
        ) else {
            return false;
        };
        if text.is_empty() {
            return split_str(text, separator, false).next().is_none();
        }
        let ours: Vec<&str> = split_str(text, separator, false).collect();
        let expected: Vec<&str> = text.split(separator).collect();
        ours == expected
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Text, Separator) -> bool);
}

#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn kept_slices_never_hold_the_separator(text: Text, choice: usize) -> bool {
    let separator = TEXT_ALPHABET[choice % TEXT_ALPHABET.len()];
    split(&text.0[..], separator, true)
        .all(|slice| !slice.is_empty() && !slice.contains(&separator))
}
