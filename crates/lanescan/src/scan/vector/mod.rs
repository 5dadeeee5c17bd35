//! Whole-vector scanning.
//!
//! [`Vector`] is the small set of lane-wise operations the scanner needs. The
//! driver in [`scan`] walks a byte slice in three phases:
//!
//! 1. a scalar prologue up to the first address aligned to the vector width,
//! 2. the vector body over every whole vector that follows,
//! 3. a scalar epilogue over the remainder, re-based on the position where
//!    the body stopped.
//!
//! Every phase reports absolute offsets into the original slice.

#![expect(clippy::inline_always)]

mod portable;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
mod avx2;
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
mod neon;
#[cfg(all(
    target_arch = "x86_64",
    target_feature = "sse2",
    any(test, not(target_feature = "avx2"))
))]
mod sse2;

pub(crate) use portable::Portable;

use super::{lane, scalar};
use crate::predicate::Predicate;

/// Whether this build has a hardware vector implementation.
pub(crate) const HARDWARE_ACCELERATED: bool = cfg!(any(
    all(target_arch = "x86_64", target_feature = "sse2"),
    all(target_arch = "aarch64", target_feature = "neon"),
));

/// Lane-wise operations over a fixed number of byte lanes.
///
/// Compare results are lane masks: `0xFF` where the condition holds, `0x00`
/// elsewhere. `cmplt` and `cmpgt` compare lanes as unsigned bytes.
pub(crate) trait Vector: Copy {
    /// Number of byte lanes.
    const LANES: usize;

    fn splat(value: u8) -> Self;

    /// Loads the first `LANES` bytes of `chunk`.
    ///
    /// # Panics
    ///
    /// Panics if `chunk` is shorter than `LANES`.
    fn load(chunk: &[u8]) -> Self;

    fn cmpeq(self, other: Self) -> Self;
    fn cmplt(self, other: Self) -> Self;
    fn cmpgt(self, other: Self) -> Self;
    fn or(self, other: Self) -> Self;
    fn not(self) -> Self;

    /// Whether any lane of a mask is set.
    fn any(self) -> bool;

    /// Index of the first set lane of a mask with at least one set lane.
    fn first_set_lane(self) -> usize;
}

/// A [`Predicate`] with its operands splatted across every lane.
#[derive(Clone, Copy)]
enum VectorPredicate<V> {
    Equals(V),
    EqualsEither(V, V),
    EqualsAny(V, V, V),
    LessThan(V),
    GreaterThan(V),
    EqualsOrLessThan(V, V),
    EitherOrLessThan(V, V, V),
    EqualsOrGreaterThan(V, V),
    EitherOrGreaterThan(V, V, V),
    NotEquals(V),
    Neither(V, V),
}

impl<V: Vector> VectorPredicate<V> {
    #[inline(always)]
    fn new(predicate: Predicate<u8>) -> Self {
        match predicate {
            Predicate::Equals(v) => Self::Equals(V::splat(v)),
            Predicate::EqualsEither(a, b) => Self::EqualsEither(V::splat(a), V::splat(b)),
            Predicate::EqualsAny(a, b, c) => {
                Self::EqualsAny(V::splat(a), V::splat(b), V::splat(c))
            }
            Predicate::LessThan(t) => Self::LessThan(V::splat(t)),
            Predicate::GreaterThan(t) => Self::GreaterThan(V::splat(t)),
            Predicate::EqualsOrLessThan { value, threshold } => {
                Self::EqualsOrLessThan(V::splat(value), V::splat(threshold))
            }
            Predicate::EitherOrLessThan {
                values: [a, b],
                threshold,
            } => Self::EitherOrLessThan(V::splat(a), V::splat(b), V::splat(threshold)),
            Predicate::EqualsOrGreaterThan { value, threshold } => {
                Self::EqualsOrGreaterThan(V::splat(value), V::splat(threshold))
            }
            Predicate::EitherOrGreaterThan {
                values: [a, b],
                threshold,
            } => Self::EitherOrGreaterThan(V::splat(a), V::splat(b), V::splat(threshold)),
            Predicate::NotEquals(v) => Self::NotEquals(V::splat(v)),
            Predicate::Neither(a, b) => Self::Neither(V::splat(a), V::splat(b)),
        }
    }

    /// Lane mask of the elements of `x` that satisfy the predicate. Mirrors
    /// [`Predicate::matches`] lane by lane.
    #[inline(always)]
    fn matches(self, x: V) -> V {
        match self {
            Self::Equals(v) => x.cmpeq(v),
            Self::EqualsEither(a, b) => x.cmpeq(a).or(x.cmpeq(b)),
            Self::EqualsAny(a, b, c) => x.cmpeq(a).or(x.cmpeq(b)).or(x.cmpeq(c)),
            Self::LessThan(t) => x.cmplt(t),
            Self::GreaterThan(t) => x.cmpgt(t),
            Self::EqualsOrLessThan(v, t) => x.cmpeq(v).or(x.cmplt(t)),
            Self::EitherOrLessThan(a, b, t) => x.cmpeq(a).or(x.cmpeq(b)).or(x.cmplt(t)),
            Self::EqualsOrGreaterThan(v, t) => x.cmpeq(v).or(x.cmpgt(t)),
            Self::EitherOrGreaterThan(a, b, t) => x.cmpeq(a).or(x.cmpeq(b)).or(x.cmpgt(t)),
            Self::NotEquals(v) => x.cmpeq(v).not(),
            Self::Neither(a, b) => x.cmpeq(a).or(x.cmpeq(b)).not(),
        }
    }
}

/// Scans `haystack` with vector `V`, or entirely with the scalar loop when it
/// is shorter than two vectors.
#[inline]
pub(crate) fn scan<V: Vector>(haystack: &[u8], predicate: Predicate<u8>) -> Option<usize> {
    if haystack.len() < 2 * V::LANES {
        return scalar::scan(haystack, predicate);
    }

    let prologue = prologue_len::<V>(haystack);
    if let Some(i) = scalar::scan(&haystack[..prologue], predicate) {
        return Some(i);
    }

    let lanes = VectorPredicate::<V>::new(predicate);
    let mut chunks = haystack[prologue..].chunks_exact(V::LANES);
    let mut at = prologue;
    for chunk in chunks.by_ref() {
        let mask = lanes.matches(V::load(chunk));
        if mask.any() {
            return Some(at + mask.first_set_lane());
        }
        at += V::LANES;
    }

    // The tail starts where the body stopped, not at the prologue.
    let tail = chunks.remainder();
    debug_assert_eq!(at + tail.len(), haystack.len());
    scalar::scan(tail, predicate).map(|i| at + i)
}

/// Number of leading bytes before the first `V::LANES`-aligned address,
/// clamped to the slice length.
#[inline(always)]
fn prologue_len<V: Vector>(haystack: &[u8]) -> usize {
    haystack.as_ptr().align_offset(V::LANES).min(haystack.len())
}

/// Scans with the hardware vector when the build has one.
#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
#[inline]
pub(crate) fn scan_hardware(haystack: &[u8], predicate: Predicate<u8>) -> Option<usize> {
    scan::<avx2::Avx2>(haystack, predicate)
}

/// Scans with the hardware vector when the build has one.
#[cfg(all(
    target_arch = "x86_64",
    target_feature = "sse2",
    not(target_feature = "avx2")
))]
#[inline]
pub(crate) fn scan_hardware(haystack: &[u8], predicate: Predicate<u8>) -> Option<usize> {
    scan::<sse2::Sse2>(haystack, predicate)
}

/// Scans with the hardware vector when the build has one.
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
#[inline]
pub(crate) fn scan_hardware(haystack: &[u8], predicate: Predicate<u8>) -> Option<usize> {
    scan::<neon::Neon>(haystack, predicate)
}

/// Scans with the hardware vector when the build has one.
#[cfg(not(any(
    all(target_arch = "x86_64", target_feature = "sse2"),
    all(target_arch = "aarch64", target_feature = "neon"),
)))]
#[inline]
pub(crate) fn scan_hardware(haystack: &[u8], predicate: Predicate<u8>) -> Option<usize> {
    scalar::scan(haystack, predicate)
}

/// Lanes per hardware vector, or 1 when scans run one element at a time.
pub(crate) const fn hardware_lanes() -> usize {
    if cfg!(all(target_arch = "x86_64", target_feature = "avx2")) {
        32
    } else if HARDWARE_ACCELERATED {
        16
    } else {
        1
    }
}

#[inline(always)]
fn first_set_lane16(lanes: [u8; 16]) -> usize {
    lane::first_set_lane(&lane::mask_words(lanes))
}

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
#[inline(always)]
fn first_set_lane32(lanes: [u8; 32]) -> usize {
    lane::first_set_lane(&lane::mask_words32(lanes))
}
