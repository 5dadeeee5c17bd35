//! Scanner façade.
//!
//! Every entry point reports the lowest index at which its predicate holds,
//! or `None`. The result does not depend on the code path: scalar, portable
//! vector and hardware vector scans agree on every input.

mod lane;
mod scalar;
mod vector;


use crate::{
    options::{ScanOptions, Strategy},
    predicate::Predicate,
};

/// The "no match" sentinel for callers that want a signed index.
pub const NOT_FOUND: isize = -1;

/// Converts a scan result to a signed index, with [`NOT_FOUND`] for `None`.
///
/// ```rust
/// use lanescan::{NOT_FOUND, index_of, to_sentinel};
///
/// assert_eq!(to_sentinel(index_of(b"A B", b' ')), 1);
/// assert_eq!(to_sentinel(index_of(b"", 0)), NOT_FOUND);
/// ```
#[must_use]
pub fn to_sentinel(index: Option<usize>) -> isize {
    index
        .and_then(|i| isize::try_from(i).ok())
        .unwrap_or(NOT_FOUND)
}

/// Whether [`Strategy::Auto`] scans use a hardware vector unit in this build.
#[must_use]
pub const fn is_hardware_accelerated() -> bool {
    vector::HARDWARE_ACCELERATED
}

/// Elements compared per step by [`Strategy::Auto`] scans: the hardware
/// vector width in bytes, or 1 without hardware acceleration.
#[must_use]
pub const fn vector_width() -> usize {
    vector::hardware_lanes()
}

/// Index of the first byte of `haystack` matching `predicate`.
///
/// ```rust
/// use lanescan::{Predicate, scan};
///
/// assert_eq!(scan(&[0x41, 0x20, 0x42], Predicate::Equals(0x20)), Some(1));
/// assert_eq!(scan(&[], Predicate::Equals(0)), None);
/// ```
#[inline]
#[must_use]
pub fn scan(haystack: &[u8], predicate: Predicate<u8>) -> Option<usize> {
    scan_with(haystack, predicate, ScanOptions::default())
}

/// [`scan`] with an explicit code path.
#[inline]
#[must_use]
pub fn scan_with(haystack: &[u8], predicate: Predicate<u8>, options: ScanOptions) -> Option<usize> {
    if haystack.is_empty() {
        return None;
    }
    match options.strategy {
        Strategy::Auto => vector::scan_hardware(haystack, predicate),
        Strategy::Scalar => scalar::scan(haystack, predicate),
        Strategy::Portable => vector::scan::<vector::Portable>(haystack, predicate),
    }
}

/// Index of the first UTF-16 code unit of `units` matching `predicate`.
///
/// Code units always take the unrolled scalar loop, whatever the build's
/// vector support.
///
/// ```rust
/// use lanescan::{Predicate, scan_units};
///
/// let units: Vec<u16> = "héllo".encode_utf16().collect();
/// assert_eq!(scan_units(&units, Predicate::GreaterThan(0x7f)), Some(1));
/// ```
#[inline]
#[must_use]
pub fn scan_units(units: &[u16], predicate: Predicate<u16>) -> Option<usize> {
    scalar::scan(units, predicate)
}

/// First byte equal to `value`.
#[inline]
#[must_use]
pub fn index_of(haystack: &[u8], value: u8) -> Option<usize> {
    scan(haystack, Predicate::Equals(value))
}

/// First byte equal to `a` or `b`.
#[inline]
#[must_use]
pub fn index_of_either(haystack: &[u8], a: u8, b: u8) -> Option<usize> {
    scan(haystack, Predicate::EqualsEither(a, b))
}

/// First byte equal to `a`, `b` or `c`.
#[inline]
#[must_use]
pub fn index_of_any(haystack: &[u8], a: u8, b: u8, c: u8) -> Option<usize> {
    scan(haystack, Predicate::EqualsAny(a, b, c))
}

/// First byte below `threshold`.
#[inline]
#[must_use]
pub fn index_of_less_than(haystack: &[u8], threshold: u8) -> Option<usize> {
    scan(haystack, Predicate::LessThan(threshold))
}

/// First byte above `threshold`.
#[inline]
#[must_use]
pub fn index_of_greater_than(haystack: &[u8], threshold: u8) -> Option<usize> {
    scan(haystack, Predicate::GreaterThan(threshold))
}

/// First byte equal to `value` or below `threshold`.
#[inline]
#[must_use]
pub fn index_of_equal_or_less_than(haystack: &[u8], value: u8, threshold: u8) -> Option<usize> {
    scan(haystack, Predicate::EqualsOrLessThan { value, threshold })
}

/// First byte equal to `a` or `b`, or below `threshold`.
#[inline]
#[must_use]
pub fn index_of_either_or_less_than(
    haystack: &[u8],
    a: u8,
    b: u8,
    threshold: u8,
) -> Option<usize> {
    scan(
        haystack,
        Predicate::EitherOrLessThan {
            values: [a, b],
            threshold,
        },
    )
}

/// First byte equal to `value` or above `threshold`.
#[inline]
#[must_use]
pub fn index_of_equal_or_greater_than(
    haystack: &[u8],
    value: u8,
    threshold: u8,
) -> Option<usize> {
    scan(haystack, Predicate::EqualsOrGreaterThan { value, threshold })
}

/// First byte equal to `a` or `b`, or above `threshold`.
#[inline]
#[must_use]
pub fn index_of_either_or_greater_than(
    haystack: &[u8],
    a: u8,
    b: u8,
    threshold: u8,
) -> Option<usize> {
    scan(
        haystack,
        Predicate::EitherOrGreaterThan {
            values: [a, b],
            threshold,
        },
    )
}

/// First byte different from `value`.
#[inline]
#[must_use]
pub fn index_of_not(haystack: &[u8], value: u8) -> Option<usize> {
    scan(haystack, Predicate::NotEquals(value))
}

/// First byte different from both `a` and `b`.
#[inline]
#[must_use]
pub fn index_of_neither(haystack: &[u8], a: u8, b: u8) -> Option<usize> {
    scan(haystack, Predicate::Neither(a, b))
}

/// First ASCII control byte (below `0x20`).
#[inline]
#[must_use]
pub fn scan_control_byte(haystack: &[u8]) -> Option<usize> {
    index_of_less_than(haystack, b' ')
}

/// First space.
#[inline]
#[must_use]
pub fn scan_whitespace(haystack: &[u8]) -> Option<usize> {
    index_of(haystack, b' ')
}

/// First byte that is not a space, or not a space or tab when
/// `tabs_are_whitespace` is set.
///
/// ```rust
/// use lanescan::scan_non_whitespace;
///
/// assert_eq!(scan_non_whitespace(b"  \tx", false), Some(2));
/// assert_eq!(scan_non_whitespace(b"  \tx", true), Some(3));
/// ```
#[inline]
#[must_use]
pub fn scan_non_whitespace(haystack: &[u8], tabs_are_whitespace: bool) -> Option<usize> {
    if tabs_are_whitespace {
        index_of_neither(haystack, b' ', b'\t')
    } else {
        index_of_not(haystack, b' ')
    }
}
