//! Separator discovery.
//!
//! One left-to-right pass records the start offset of every separator
//! occurrence. Occurrences never overlap: after a multi-element match the
//! search resumes past the whole separator, so `":::"` holds a single `"::"`.

use alloc::vec::Vec;

use crate::element::Element;

/// Ascending start offsets of every non-overlapping `separator` occurrence in
/// `haystack`.
///
/// # Panics
///
/// Panics if `separator` is empty.
pub(crate) fn index_separators<T: Element>(haystack: &[T], separator: &[T]) -> Vec<usize> {
    let mut offsets = Vec::new();
    match *separator {
        [] => panic!("separator must contain at least one element"),
        [single] => {
            let mut at = 0;
            while let Some(i) = T::position(&haystack[at..], single) {
                offsets.push(at + i);
                at += i + 1;
            }
        }
        [first, ..] => {
            let width = separator.len();
            let mut at = 0;
            while haystack.len() - at >= width {
                // Only positions with room for the whole separator are
                // candidates; the first element rejects most of them.
                let last_start = haystack.len() - width;
                let Some(i) = T::position(&haystack[at..=last_start], first) else {
                    break;
                };
                let candidate = at + i;
                if haystack[candidate..candidate + width] == *separator {
                    offsets.push(candidate);
                    at = candidate + width;
                } else {
                    at = candidate + 1;
                }
            }
        }
    }
    offsets
}
