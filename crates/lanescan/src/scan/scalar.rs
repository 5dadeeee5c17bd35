//! One-element-at-a-time scanning.
//!
//! Handles inputs too short to vectorize, the alignment prologue, the tail
//! after the last whole vector, and every scan when vectors are unavailable.
//! The loop is unrolled in groups of eight, then four, then single elements;
//! every probe returns its own constant offset so no arithmetic happens on the
//! exit path.

#![expect(clippy::inline_always)]

use crate::predicate::{Predicate, Unit};

macro_rules! probe {
    ($predicate:expr, $group:expr, $base:expr, $($offset:literal)+) => {
        $(
            if $predicate.matches($group[$offset]) {
                return Some($base + $offset);
            }
        )+
    };
}

/// Index of the first element of `haystack` matching `predicate`.
#[inline(always)]
pub(crate) fn scan<T: Unit>(haystack: &[T], predicate: Predicate<T>) -> Option<usize> {
    let len = haystack.len();
    let mut at = 0;

    while len - at >= 8 {
        let group = &haystack[at..at + 8];
        probe!(predicate, group, at, 0 1 2 3 4 5 6 7);
        at += 8;
    }

    if len - at >= 4 {
        let group = &haystack[at..at + 4];
        probe!(predicate, group, at, 0 1 2 3);
        at += 4;
    }

    while at < len {
        if predicate.matches(haystack[at]) {
            return Some(at);
        }
        at += 1;
    }

    None
}
