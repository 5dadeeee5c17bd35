use crate::{predicate::Predicate, scan};

/// An element type that can be split on.
///
/// Splitting only needs value equality. Implementations may override
/// [`position`](Element::position) with something faster than a linear
/// search; bytes and UTF-16 code units route it through the scanner.
///
/// ```rust
/// use lanescan::{Element, split};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Token {
///     Word,
///     Comma,
/// }
///
/// impl Element for Token {}
///
/// let tokens = [Token::Word, Token::Comma, Token::Word];
/// assert_eq!(split(&tokens, Token::Comma, false).count(), 2);
/// ```
pub trait Element: Copy + PartialEq {
    /// Index of the first element of `haystack` equal to `needle`.
    #[inline]
    fn position(haystack: &[Self], needle: Self) -> Option<usize> {
        haystack.iter().position(|e| *e == needle)
    }
}

impl Element for u8 {
    #[inline]
    fn position(haystack: &[Self], needle: Self) -> Option<usize> {
        scan::index_of(haystack, needle)
    }
}

impl Element for u16 {
    #[inline]
    fn position(haystack: &[Self], needle: Self) -> Option<usize> {
        scan::scan_units(haystack, Predicate::Equals(needle))
    }
}

macro_rules! impl_element {
    ($($ty:ty),* $(,)?) => {
        $(impl Element for $ty {})*
    };
}

impl_element!(
    i8, i16, u32, i32, u64, i64, u128, i128, usize, isize, char, bool
);
