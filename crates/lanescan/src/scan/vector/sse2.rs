//! SSE2 vector for `x86_64`.
//!
//! SSE2 has no unsigned byte compare, so `cmplt`/`cmpgt` go through the
//! unsigned min/max: `a < b` exactly when `max(a, b) != a`, and `a > b`
//! exactly when `min(a, b) != a`.
//!
//! This module is only compiled when `sse2` is enabled for the target, which
//! is what makes every intrinsic call below sound.

#![allow(unused_unsafe, clippy::inline_always)]

use core::arch::x86_64::{
    __m128i, _mm_cmpeq_epi8, _mm_loadu_si128, _mm_max_epu8, _mm_min_epu8, _mm_movemask_epi8,
    _mm_or_si128, _mm_set1_epi8, _mm_storeu_si128, _mm_xor_si128,
};

use super::{Vector, first_set_lane16};

#[derive(Clone, Copy)]
pub(crate) struct Sse2(__m128i);

impl Vector for Sse2 {
    const LANES: usize = 16;

    #[inline(always)]
    fn splat(value: u8) -> Self {
        // SAFETY: sse2 is enabled for this target.
        Sse2(unsafe { _mm_set1_epi8(i8::from_ne_bytes([value])) })
    }

    #[expect(
        clippy::cast_ptr_alignment,
        reason = "_mm_loadu_si128 and _mm_storeu_si128 accept unaligned pointers"
    )]
    #[inline(always)]
    fn load(chunk: &[u8]) -> Self {
        assert!(chunk.len() >= Self::LANES);
        // SAFETY: the assert above keeps the 16-byte unaligned read in bounds.
        Sse2(unsafe { _mm_loadu_si128(chunk.as_ptr().cast::<__m128i>()) })
    }

    #[inline(always)]
    fn cmpeq(self, other: Self) -> Self {
        // SAFETY: sse2 is enabled for this target.
        Sse2(unsafe { _mm_cmpeq_epi8(self.0, other.0) })
    }

    #[inline(always)]
    fn cmplt(self, other: Self) -> Self {
        // SAFETY: sse2 is enabled for this target.
        let max = Sse2(unsafe { _mm_max_epu8(self.0, other.0) });
        max.cmpeq(self).not()
    }

    #[inline(always)]
    fn cmpgt(self, other: Self) -> Self {
        // SAFETY: sse2 is enabled for this target.
        let min = Sse2(unsafe { _mm_min_epu8(self.0, other.0) });
        min.cmpeq(self).not()
    }

    #[inline(always)]
    fn or(self, other: Self) -> Self {
        // SAFETY: sse2 is enabled for this target.
        Sse2(unsafe { _mm_or_si128(self.0, other.0) })
    }

    #[inline(always)]
    fn not(self) -> Self {
        // SAFETY: sse2 is enabled for this target.
        Sse2(unsafe { _mm_xor_si128(self.0, _mm_set1_epi8(-1)) })
    }

    #[inline(always)]
    fn any(self) -> bool {
        // SAFETY: sse2 is enabled for this target.
        unsafe { _mm_movemask_epi8(self.0) != 0 }
    }

    #[expect(
        clippy::cast_ptr_alignment,
        reason = "_mm_loadu_si128 and _mm_storeu_si128 accept unaligned pointers"
    )]
    #[inline(always)]
    fn first_set_lane(self) -> usize {
        let mut lanes = [0u8; 16];
        // SAFETY: `lanes` is 16 writable bytes; sse2 is enabled.
        unsafe { _mm_storeu_si128(lanes.as_mut_ptr().cast::<__m128i>(), self.0) };
        first_set_lane16(lanes)
    }
}
