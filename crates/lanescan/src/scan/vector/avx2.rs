//! AVX2 vector for `x86_64`: 32 lanes per step.
//!
//! Unsigned `cmplt`/`cmpgt` use the same min/max identity as the SSE2 vector.
//! The mask spans four 64-bit words, so lane location walks past the second
//! word whenever the first half of the mask is clear.
//!
//! This module is only compiled when `avx2` is enabled for the target, which
//! is what makes every intrinsic call below sound.

#![allow(unused_unsafe, clippy::inline_always)]

use core::arch::x86_64::{
    __m256i, _mm256_cmpeq_epi8, _mm256_loadu_si256, _mm256_max_epu8, _mm256_min_epu8,
    _mm256_movemask_epi8, _mm256_or_si256, _mm256_set1_epi8, _mm256_storeu_si256,
    _mm256_xor_si256,
};

use super::{Vector, first_set_lane32};

#[derive(Clone, Copy)]
pub(crate) struct Avx2(__m256i);

impl Avx2 {
    #[expect(
        clippy::cast_ptr_alignment,
        reason = "_mm256_storeu_si256 accepts unaligned pointers"
    )]
    #[inline(always)]
    fn lanes(self) -> [u8; 32] {
        let mut lanes = [0u8; 32];
        // SAFETY: `lanes` is 32 writable bytes; avx2 is enabled.
        unsafe { _mm256_storeu_si256(lanes.as_mut_ptr().cast::<__m256i>(), self.0) };
        lanes
    }
}

impl Vector for Avx2 {
    const LANES: usize = 32;

    #[inline(always)]
    fn splat(value: u8) -> Self {
        // SAFETY: avx2 is enabled for this target.
        Avx2(unsafe { _mm256_set1_epi8(i8::from_ne_bytes([value])) })
    }

    #[expect(
        clippy::cast_ptr_alignment,
        reason = "_mm256_loadu_si256 accepts unaligned pointers"
    )]
    #[inline(always)]
    fn load(chunk: &[u8]) -> Self {
        assert!(chunk.len() >= Self::LANES);
        // SAFETY: the assert above keeps the 32-byte unaligned read in bounds.
        Avx2(unsafe { _mm256_loadu_si256(chunk.as_ptr().cast::<__m256i>()) })
    }

    #[inline(always)]
    fn cmpeq(self, other: Self) -> Self {
        // SAFETY: avx2 is enabled for this target.
        Avx2(unsafe { _mm256_cmpeq_epi8(self.0, other.0) })
    }

    #[inline(always)]
    fn cmplt(self, other: Self) -> Self {
        // SAFETY: avx2 is enabled for this target.
        let max = Avx2(unsafe { _mm256_max_epu8(self.0, other.0) });
        max.cmpeq(self).not()
    }

    #[inline(always)]
    fn cmpgt(self, other: Self) -> Self {
        // SAFETY: avx2 is enabled for this target.
        let min = Avx2(unsafe { _mm256_min_epu8(self.0, other.0) });
        min.cmpeq(self).not()
    }

    #[inline(always)]
    fn or(self, other: Self) -> Self {
        // SAFETY: avx2 is enabled for this target.
        Avx2(unsafe { _mm256_or_si256(self.0, other.0) })
    }

    #[inline(always)]
    fn not(self) -> Self {
        // SAFETY: avx2 is enabled for this target.
        Avx2(unsafe { _mm256_xor_si256(self.0, _mm256_set1_epi8(-1)) })
    }

    #[inline(always)]
    fn any(self) -> bool {
        // SAFETY: avx2 is enabled for this target.
        unsafe { _mm256_movemask_epi8(self.0) != 0 }
    }

    #[inline(always)]
    fn first_set_lane(self) -> usize {
        first_set_lane32(self.lanes())
    }
}
