//! The split state machine.
//!
//! ```text
//! Ready ──advance──▶ Positioned(slice) ──advance──▶ … ──▶ Exhausted
//! ```
//!
//! The cursor owns the separator offsets found up front and walks them
//! together with a scan position. It only moves forward and never restarts;
//! advancing an exhausted cursor keeps reporting exhaustion.
//!
//! Invariant: `slice_start + slice_len <= buffer.len()`.

use alloc::vec::Vec;
use core::{iter::FusedIterator, ops::Range};

use bstr::{BStr, ByteSlice};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Ready,
    Positioned,
    Exhausted,
}

/// Lazy sequence of the subslices between separator occurrences.
///
/// Produced by [`split`](crate::split) and
/// [`split_sequence`](crate::split_sequence). It can be driven either as an
/// [`Iterator`] or explicitly through [`advance`](Split::advance) and
/// [`current`](Split::current).
///
/// ```rust
/// use lanescan::split;
///
/// let mut parts = split(b"a,,b", b',', false);
/// assert!(parts.advance());
/// assert_eq!(parts.current(), Some(&b"a"[..]));
/// assert!(parts.advance());
/// assert_eq!(parts.current(), Some(&b""[..]));
/// assert_eq!(parts.next(), Some(&b"b"[..]));
/// assert!(!parts.advance());
/// assert!(parts.is_exhausted());
/// ```
#[derive(Debug, Clone)]
pub struct Split<'a, T> {
    buffer: &'a [T],
    separators: Vec<usize>,
    separator_len: usize,
    remove_empty: bool,
    /// Next unconsumed entry of `separators`.
    next_separator: usize,
    /// Scan position: start of the next slice.
    position: usize,
    slice_start: usize,
    slice_len: usize,
    /// The last slice was closed by a separator ending at the buffer end.
    trailing_empty: bool,
    state: State,
}

impl<'a, T> Split<'a, T> {
    pub(crate) fn new(
        buffer: &'a [T],
        separators: Vec<usize>,
        separator_len: usize,
        remove_empty: bool,
    ) -> Self {
        debug_assert!(separator_len > 0);
        debug_assert!(separators.is_sorted());
        Self {
            buffer,
            separators,
            separator_len,
            remove_empty,
            next_separator: 0,
            position: 0,
            slice_start: 0,
            slice_len: 0,
            trailing_empty: false,
            state: State::Ready,
        }
    }

    /// Moves to the next slice. Returns `false` once the input is used up,
    /// and on every call after that.
    pub fn advance(&mut self) -> bool {
        if self.state == State::Exhausted {
            return false;
        }

        if self.remove_empty {
            // Collapse a run of separators starting at the scan position.
            while self.separators.get(self.next_separator) == Some(&self.position) {
                self.position += self.separator_len;
                self.next_separator += 1;
            }
        }

        let len = self.buffer.len();
        if self.position >= len {
            if self.trailing_empty && !self.remove_empty {
                self.trailing_empty = false;
                self.slice_start = len;
                self.slice_len = 0;
                self.state = State::Positioned;
                return true;
            }
            self.state = State::Exhausted;
            return false;
        }

        self.slice_start = self.position;
        if let Some(&offset) = self.separators.get(self.next_separator) {
            self.slice_len = offset - self.position;
            self.position = offset + self.separator_len;
            self.next_separator += 1;
            self.trailing_empty = self.position == len;
        } else {
            self.slice_len = len - self.position;
            self.position = len;
            self.trailing_empty = false;
        }
        debug_assert!(self.slice_start + self.slice_len <= len);
        self.state = State::Positioned;
        true
    }

    /// The slice the cursor is positioned on, or `None` before the first
    /// [`advance`](Self::advance) and after exhaustion.
    #[must_use]
    pub fn current(&self) -> Option<&'a [T]> {
        self.current_range().map(|range| &self.buffer[range])
    }

    /// Offsets of [`current`](Self::current) within the input.
    #[must_use]
    pub fn current_range(&self) -> Option<Range<usize>> {
        (self.state == State::Positioned)
            .then(|| self.slice_start..self.slice_start + self.slice_len)
    }

    /// Whether the cursor has run past the last slice.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.state == State::Exhausted
    }

    /// Separator occurrences not yet consumed.
    #[must_use]
    pub fn remaining_separators(&self) -> usize {
        self.separators.len() - self.next_separator
    }

    /// Advances and returns the offsets of the new slice.
    pub(crate) fn next_range(&mut self) -> Option<Range<usize>> {
        if self.advance() {
            self.current_range()
        } else {
            None
        }
    }
}

impl<'a> Split<'a, u8> {
    /// Yields the slices as [`BStr`], which prints as text in `Debug` output.
    ///
    /// ```rust
    /// use lanescan::split;
    ///
    /// let parts: Vec<_> = split(b"k=v", b'=', false).bstrs().collect();
    /// assert_eq!(format!("{parts:?}"), r#"["k", "v"]"#);
    /// ```
    pub fn bstrs(self) -> impl Iterator<Item = &'a BStr> {
        self.map(ByteSlice::as_bstr)
    }
}

impl<'a, T> Iterator for Split<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        let buffer = self.buffer;
        self.next_range().map(|range| &buffer[range])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let more = match self.state {
            State::Exhausted => false,
            _ => self.position < self.buffer.len() || self.trailing_empty,
        };
        if !more {
            return (0, Some(0));
        }
        // Every remaining separator closes one slice, plus the final one.
        let upper = self.remaining_separators() + 1;
        if self.remove_empty {
            (0, Some(upper))
        } else {
            (upper, Some(upper))
        }
    }
}

impl<T> FusedIterator for Split<'_, T> {}
