//! Predicate shapes understood by the scanner.
//!
//! A predicate is evaluated against the unsigned value of one element. The
//! scalar path calls [`Predicate::matches`] directly; the vector path builds
//! the same truth table out of lane-wise compares. Keeping both in lockstep is
//! what makes the two paths interchangeable.

use core::fmt::Debug;

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
}

/// A fixed-width unsigned code unit: bytes or UTF-16 code units.
pub trait Unit: Copy + Ord + Debug + sealed::Sealed {}

impl Unit for u8 {}
impl Unit for u16 {}

/// The condition a scan looks for.
///
/// Comparisons are unsigned, so over bytes `LessThan(32)` matches the ASCII
/// control characters and `GreaterThan(127)` matches every non-ASCII byte.
/// The combined shapes hold when any of their parts holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate<T> {
    /// `x == v`
    Equals(T),
    /// `x == a || x == b`
    EqualsEither(T, T),
    /// `x == a || x == b || x == c`
    EqualsAny(T, T, T),
    /// `x < t`
    LessThan(T),
    /// `x > t`
    GreaterThan(T),
    /// `x == value || x < threshold`
    EqualsOrLessThan {
        /// Value matched by equality.
        value: T,
        /// Exclusive upper bound.
        threshold: T,
    },
    /// `x == values[0] || x == values[1] || x < threshold`
    EitherOrLessThan {
        /// Values matched by equality.
        values: [T; 2],
        /// Exclusive upper bound.
        threshold: T,
    },
    /// `x == value || x > threshold`
    EqualsOrGreaterThan {
        /// Value matched by equality.
        value: T,
        /// Exclusive lower bound.
        threshold: T,
    },
    /// `x == values[0] || x == values[1] || x > threshold`
    EitherOrGreaterThan {
        /// Values matched by equality.
        values: [T; 2],
        /// Exclusive lower bound.
        threshold: T,
    },
    /// `x != v`
    NotEquals(T),
    /// `x != a && x != b`
    Neither(T, T),
}

impl<T: Unit> Predicate<T> {
    /// Evaluates the predicate for a single element.
    ///
    /// ```rust
    /// use lanescan::Predicate;
    ///
    /// let p = Predicate::EqualsOrLessThan { value: b'"', threshold: 0x20 };
    /// assert!(p.matches(b'"'));
    /// assert!(p.matches(b'\n'));
    /// assert!(!p.matches(b'a'));
    /// ```
    #[inline]
    #[must_use]
    pub fn matches(self, x: T) -> bool {
        match self {
            Predicate::Equals(v) => x == v,
            Predicate::EqualsEither(a, b) => x == a || x == b,
            Predicate::EqualsAny(a, b, c) => x == a || x == b || x == c,
            Predicate::LessThan(t) => x < t,
            Predicate::GreaterThan(t) => x > t,
            Predicate::EqualsOrLessThan { value, threshold } => x == value || x < threshold,
            Predicate::EitherOrLessThan {
                values: [a, b],
                threshold,
            } => x == a || x == b || x < threshold,
            Predicate::EqualsOrGreaterThan { value, threshold } => x == value || x > threshold,
            Predicate::EitherOrGreaterThan {
                values: [a, b],
                threshold,
            } => x == a || x == b || x > threshold,
            Predicate::NotEquals(v) => x != v,
            Predicate::Neither(a, b) => x != a && x != b,
        }
    }
}
