//! A 16-lane vector built from plain byte arrays.
//!
//! Each operation is a fixed-length loop over the lanes, which the compiler
//! lowers to whatever vector unit the target has (or to scalar code when it
//! has none). It is always available, so [`Strategy::Portable`] can exercise
//! the vector body on every machine.
//!
//! [`Strategy::Portable`]: crate::Strategy::Portable

use super::{Vector, first_set_lane16};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Portable(pub(super) [u8; 16]);

impl Portable {
    #[inline]
    fn compare(self, other: Self, cmp: impl Fn(u8, u8) -> bool) -> Self {
        let mut mask = [0u8; 16];
        for ((m, &a), &b) in mask.iter_mut().zip(&self.0).zip(&other.0) {
            *m = if cmp(a, b) { 0xFF } else { 0x00 };
        }
        Portable(mask)
    }
}

impl Vector for Portable {
    const LANES: usize = 16;

    #[inline]
    fn splat(value: u8) -> Self {
        Portable([value; 16])
    }

    #[inline]
    fn load(chunk: &[u8]) -> Self {
        let mut lanes = [0u8; 16];
        lanes.copy_from_slice(&chunk[..Self::LANES]);
        Portable(lanes)
    }

    #[inline]
    fn cmpeq(self, other: Self) -> Self {
        self.compare(other, |a, b| a == b)
    }

    #[inline]
    fn cmplt(self, other: Self) -> Self {
        self.compare(other, |a, b| a < b)
    }

    #[inline]
    fn cmpgt(self, other: Self) -> Self {
        self.compare(other, |a, b| a > b)
    }

    #[inline]
    fn or(self, other: Self) -> Self {
        let mut lanes = self.0;
        for (l, &o) in lanes.iter_mut().zip(&other.0) {
            *l |= o;
        }
        Portable(lanes)
    }

    #[inline]
    fn not(self) -> Self {
        Portable(self.0.map(|l| !l))
    }

    #[inline]
    fn any(self) -> bool {
        u128::from_ne_bytes(self.0) != 0
    }

    #[inline]
    fn first_set_lane(self) -> usize {
        first_set_lane16(self.0)
    }
}
