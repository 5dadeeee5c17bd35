//! Zero-copy splitting.
//!
//! A split operation finds every separator occurrence once, up front, then
//! hands out borrowed subslices of the input on demand. Nothing but the
//! offset list is allocated.

mod cursor;
mod indexer;

#[cfg(test)]
mod tests;

use core::iter::FusedIterator;

pub use cursor::Split;
use indexer::index_separators;

use crate::{element::Element, error::SplitError, options::SplitOptions};

/// Splits `elements` around every occurrence of `separator`.
///
/// Empty slices are kept unless `options` asks for their removal:
///
/// ```rust
/// use lanescan::{SplitOptions, split};
///
/// let kept: Vec<&[u8]> = split(b"a,,b", b',', false).collect();
/// assert_eq!(kept, [&b"a"[..], b"", b"b"]);
///
/// let removed: Vec<&[u8]> = split(b"a,,b", b',', SplitOptions::remove_empty()).collect();
/// assert_eq!(removed, [&b"a"[..], b"b"]);
///
/// let edges: Vec<&[u8]> = split(b",", b',', false).collect();
/// assert_eq!(edges, [&b""[..], b""]);
/// ```
///
/// An empty input produces no slices.
pub fn split<T: Element>(
    elements: &[T],
    separator: T,
    options: impl Into<SplitOptions>,
) -> Split<'_, T> {
    let options = options.into();
    let separators = index_separators(elements, &[separator]);
    Split::new(elements, separators, 1, options.remove_empty_entries)
}

/// Splits `elements` around every non-overlapping occurrence of the
/// `separator` sequence.
///
/// ```rust
/// use lanescan::split_sequence;
///
/// let parts: Vec<&[u8]> = split_sequence(b"a::b::c", b"::", false).collect();
/// assert_eq!(parts, [&b"a"[..], b"b", b"c"]);
/// ```
///
/// # Panics
///
/// Panics if `separator` is empty; see [`try_split_sequence`].
pub fn split_sequence<'a, T: Element>(
    elements: &'a [T],
    separator: &[T],
    options: impl Into<SplitOptions>,
) -> Split<'a, T> {
    match try_split_sequence(elements, separator, options) {
        Ok(split) => split,
        Err(err) => panic!("{err}"),
    }
}

/// [`split_sequence`] that reports an empty separator instead of panicking.
///
/// # Errors
///
/// Returns [`SplitError::EmptySeparator`] if `separator` is empty.
pub fn try_split_sequence<'a, T: Element>(
    elements: &'a [T],
    separator: &[T],
    options: impl Into<SplitOptions>,
) -> Result<Split<'a, T>, SplitError> {
    if separator.is_empty() {
        return Err(SplitError::EmptySeparator);
    }
    let options = options.into();
    let separators = index_separators(elements, separator);
    Ok(Split::new(
        elements,
        separators,
        separator.len(),
        options.remove_empty_entries,
    ))
}

/// Splits a string around every non-overlapping occurrence of `separator`.
///
/// A match of a valid UTF-8 separator always starts and ends on a character
/// boundary, so every produced slice is itself a `&str`.
///
/// ```rust
/// use lanescan::split_str;
///
/// let words: Vec<&str> = split_str("one two  three", " ", true).collect();
/// assert_eq!(words, ["one", "two", "three"]);
/// ```
///
/// # Panics
///
/// Panics if `separator` is empty; see [`try_split_str`].
pub fn split_str<'a>(
    haystack: &'a str,
    separator: &str,
    options: impl Into<SplitOptions>,
) -> SplitStr<'a> {
    match try_split_str(haystack, separator, options) {
        Ok(split) => split,
        Err(err) => panic!("{err}"),
    }
}

/// [`split_str`] that reports an empty separator instead of panicking.
///
/// # Errors
///
/// Returns [`SplitError::EmptySeparator`] if `separator` is empty.
pub fn try_split_str<'a>(
    haystack: &'a str,
    separator: &str,
    options: impl Into<SplitOptions>,
) -> Result<SplitStr<'a>, SplitError> {
    let inner = try_split_sequence(haystack.as_bytes(), separator.as_bytes(), options)?;
    Ok(SplitStr { haystack, inner })
}

/// Lazy sequence of `&str` slices, produced by [`split_str`].
#[derive(Debug, Clone)]
pub struct SplitStr<'a> {
    haystack: &'a str,
    inner: Split<'a, u8>,
}

impl SplitStr<'_> {
    /// Separator occurrences not yet consumed.
    #[must_use]
    pub fn remaining_separators(&self) -> usize {
        self.inner.remaining_separators()
    }
}

impl<'a> Iterator for SplitStr<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let haystack = self.haystack;
        self.inner.next_range().map(|range| &haystack[range])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl FusedIterator for SplitStr<'_> {}
