//! Vectorized predicate scanning and zero-copy splitting over borrowed
//! slices.
//!
//! The scanner finds the first element of a `&[u8]` (or `&[u16]`) that
//! satisfies a [`Predicate`]: equality with up to three values, unsigned
//! less-than / greater-than, combinations of the two, and inequality. Long
//! byte slices are processed a whole vector of lanes at a time; short heads
//! and tails go through an unrolled scalar loop with the same truth table.
//!
//! The splitter walks a slice lazily and yields borrowed subslices between
//! occurrences of a single-element or multi-element separator.
//!
//! ```rust
//! use lanescan::{Predicate, SplitOptions, scan, split, split_sequence};
//!
//! assert_eq!(scan(b"A B", Predicate::Equals(b' ')), Some(1));
//! assert_eq!(scan(b"\x01\x02", Predicate::LessThan(32)), Some(0));
//!
//! let words: Vec<&[u8]> = split(b"one two  three", b' ', SplitOptions::remove_empty()).collect();
//! assert_eq!(words, [&b"one"[..], b"two", b"three"]);
//!
//! let parts: Vec<&[u8]> = split_sequence(b"a::b::c", b"::", false).collect();
//! assert_eq!(parts, [&b"a"[..], b"b", b"c"]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod element;
mod error;
mod options;
mod predicate;
mod scan;
mod split;

pub use element::Element;
pub use error::SplitError;
pub use options::{ScanOptions, SplitOptions, Strategy};
pub use predicate::{Predicate, Unit};
pub use scan::{
    NOT_FOUND, index_of, index_of_any, index_of_either, index_of_either_or_greater_than,
    index_of_either_or_less_than, index_of_equal_or_greater_than, index_of_equal_or_less_than,
    index_of_greater_than, index_of_less_than, index_of_neither, index_of_not,
    is_hardware_accelerated, scan, scan_control_byte, scan_non_whitespace, scan_units,
    scan_whitespace, scan_with, to_sentinel, vector_width,
};
pub use split::{
    Split, SplitStr, split, split_sequence, split_str, try_split_sequence, try_split_str,
};
