#![no_main]

use arbitrary::Arbitrary;
use lanescan::{Predicate, ScanOptions, Strategy, scan_with};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Shape {
    Equals,
    EqualsEither,
    EqualsAny,
    LessThan,
    GreaterThan,
    EqualsOrLessThan,
    EitherOrLessThan,
    EqualsOrGreaterThan,
    EitherOrGreaterThan,
    NotEquals,
    Neither,
}

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    shape: Shape,
    values: [u8; 3],
    // Skipping a few bytes moves the slice start across alignments.
    offset: u8,
    haystack: &'a [u8],
}

impl Input<'_> {
    fn predicate(&self) -> Predicate<u8> {
        let [a, b, c] = self.values;
        match self.shape {
            Shape::Equals => Predicate::Equals(a),
            Shape::EqualsEither => Predicate::EqualsEither(a, b),
            Shape::EqualsAny => Predicate::EqualsAny(a, b, c),
            Shape::LessThan => Predicate::LessThan(a),
            Shape::GreaterThan => Predicate::GreaterThan(a),
            Shape::EqualsOrLessThan => Predicate::EqualsOrLessThan {
                value: a,
                threshold: c,
            },
            Shape::EitherOrLessThan => Predicate::EitherOrLessThan {
                values: [a, b],
                threshold: c,
            },
            Shape::EqualsOrGreaterThan => Predicate::EqualsOrGreaterThan {
                value: a,
                threshold: c,
            },
            Shape::EitherOrGreaterThan => Predicate::EitherOrGreaterThan {
                values: [a, b],
                threshold: c,
            },
            Shape::NotEquals => Predicate::NotEquals(a),
            Shape::Neither => Predicate::Neither(a, b),
        }
    }
}

fuzz_target!(|input: Input<'_>| {
    let predicate = input.predicate();
    let skip = usize::from(input.offset % 16).min(input.haystack.len());
    let haystack = &input.haystack[skip..];
    let expected = haystack.iter().position(|&b| predicate.matches(b));

    for strategy in [Strategy::Auto, Strategy::Scalar, Strategy::Portable] {
        let got = scan_with(haystack, predicate, ScanOptions::with_strategy(strategy));
        assert_eq!(got, expected, "{strategy:?} {predicate:?}");
    }
});
