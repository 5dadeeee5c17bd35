//! NEON vector for `aarch64`.
//!
//! NEON compares unsigned bytes natively and reduces a mask with a horizontal
//! max, so every operation is a single instruction.
//!
//! This module is only compiled when `neon` is enabled for the target, which
//! is what makes every intrinsic call below sound.

#![allow(unused_unsafe, clippy::inline_always)]

use core::arch::aarch64::{
    uint8x16_t, vceqq_u8, vcgtq_u8, vcltq_u8, vdupq_n_u8, vld1q_u8, vmaxvq_u8, vmvnq_u8,
    vorrq_u8, vst1q_u8,
};

use super::{Vector, first_set_lane16};

#[derive(Clone, Copy)]
pub(crate) struct Neon(uint8x16_t);

impl Vector for Neon {
    const LANES: usize = 16;

    #[inline(always)]
    fn splat(value: u8) -> Self {
        // SAFETY: neon is enabled for this target.
        Neon(unsafe { vdupq_n_u8(value) })
    }

    #[inline(always)]
    fn load(chunk: &[u8]) -> Self {
        assert!(chunk.len() >= Self::LANES);
        // SAFETY: the assert above keeps the 16-byte read in bounds.
        Neon(unsafe { vld1q_u8(chunk.as_ptr()) })
    }

    #[inline(always)]
    fn cmpeq(self, other: Self) -> Self {
        // SAFETY: neon is enabled for this target.
        Neon(unsafe { vceqq_u8(self.0, other.0) })
    }

    #[inline(always)]
    fn cmplt(self, other: Self) -> Self {
        // SAFETY: neon is enabled for this target.
        Neon(unsafe { vcltq_u8(self.0, other.0) })
    }

    #[inline(always)]
    fn cmpgt(self, other: Self) -> Self {
        // SAFETY: neon is enabled for this target.
        Neon(unsafe { vcgtq_u8(self.0, other.0) })
    }

    #[inline(always)]
    fn or(self, other: Self) -> Self {
        // SAFETY: neon is enabled for this target.
        Neon(unsafe { vorrq_u8(self.0, other.0) })
    }

    #[inline(always)]
    fn not(self) -> Self {
        // SAFETY: neon is enabled for this target.
        Neon(unsafe { vmvnq_u8(self.0) })
    }

    #[inline(always)]
    fn any(self) -> bool {
        // SAFETY: neon is enabled for this target.
        unsafe { vmaxvq_u8(self.0) != 0 }
    }

    #[inline(always)]
    fn first_set_lane(self) -> usize {
        let mut lanes = [0u8; 16];
        // SAFETY: `lanes` is 16 writable bytes; neon is enabled.
        unsafe { vst1q_u8(lanes.as_mut_ptr(), self.0) };
        first_set_lane16(lanes)
    }
}
