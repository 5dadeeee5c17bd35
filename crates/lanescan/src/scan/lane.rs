//! First-true-lane extraction for lane masks.
//!
//! A lane mask holds `0xFF` in every lane whose element matched and `0x00`
//! everywhere else. Read as little-endian 64-bit words, lane `i` of a word is
//! its byte `i`, so the first matching lane is the byte holding the lowest set
//! bit of the first non-zero word.
//!
//! `x ^ (x - 1)` keeps every bit up to and including the lowest set one. For
//! a mask whose first true lane is byte `k` that is `k` bytes of `0xFF`
//! followed by `0x01`. Multiplying by [`POWER_OF_TWO_TO_HIGH_BYTE`] sums
//! the shifted copies of its per-byte weights so that the top seven bits of
//! the product equal `k`. The extraction has no branches and no loops.

#![expect(clippy::cast_possible_truncation, clippy::inline_always)]

/// `(0x07 | 0x06 << 8 | 0x05 << 16 | 0x04 << 24 | 0x03 << 32 | 0x02 << 40 | 0x01 << 48) + 1`
const POWER_OF_TWO_TO_HIGH_BYTE: u64 = 0x0001_0203_0405_0608;

/// Byte offset (0..8) of the lowest `0xFF` lane in a non-zero mask word.
#[inline(always)]
pub(crate) fn first_set_byte(word: u64) -> usize {
    debug_assert_ne!(word, 0);
    let flag = word ^ word.wrapping_sub(1);
    (flag.wrapping_mul(POWER_OF_TWO_TO_HIGH_BYTE) >> 57) as usize
}

/// Lane index of the first true lane across `words`.
///
/// # Panics
///
/// Panics if every word is zero; callers check `any()` first.
#[inline]
pub(crate) fn first_set_lane(words: &[u64]) -> usize {
    for (w, &word) in words.iter().enumerate() {
        if word != 0 {
            return w * 8 + first_set_byte(word);
        }
    }
    panic!("first_set_lane called on a mask with no true lane");
}

/// Reinterprets a 16-lane byte mask as two little-endian words.
#[inline(always)]
pub(crate) fn mask_words(lanes: [u8; 16]) -> [u64; 2] {
    let bits = u128::from_le_bytes(lanes);
    [bits as u64, (bits >> 64) as u64]
}

/// Reinterprets a 32-lane byte mask as four little-endian words.
#[cfg(any(test, all(target_arch = "x86_64", target_feature = "avx2")))]
#[inline(always)]
pub(crate) fn mask_words32(lanes: [u8; 32]) -> [u64; 4] {
    let mut words = [0u64; 4];
    for (word, bytes) in words.iter_mut().zip(lanes.chunks_exact(8)) {
        let mut le = [0u8; 8];
        le.copy_from_slice(bytes);
        *word = u64::from_le_bytes(le);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expands an 8-bit lane pattern into a mask word with `0xFF` lanes.
    fn word_from_pattern(pattern: u8) -> u64 {
        (0..8)
            .filter(|lane| pattern & (1 << lane) != 0)
            .fold(0, |word, lane| word | (0xFF << (lane * 8)))
    }

    #[test]
    fn every_pattern_in_a_word() {
        for pattern in 1..=u8::MAX {
            let expected = pattern.trailing_zeros() as usize;
            assert_eq!(
                first_set_byte(word_from_pattern(pattern)),
                expected,
                "pattern {pattern:#010b}"
            );
        }
    }

    #[test]
    fn every_pattern_at_every_word_position() {
        for position in 0..4 {
            for pattern in 1..=u8::MAX {
                let mut words = [0u64; 4];
                words[position] = word_from_pattern(pattern);
                // Later words never influence the result.
                for later in words.iter_mut().skip(position + 1) {
                    *later = u64::MAX;
                }
                let expected = position * 8 + pattern.trailing_zeros() as usize;
                assert_eq!(first_set_lane(&words), expected);
            }
        }
    }

    #[test]
    fn lowest_lane_wins_with_all_lanes_set() {
        assert_eq!(first_set_lane(&[u64::MAX, u64::MAX]), 0);
        assert_eq!(first_set_lane(&[0, u64::MAX]), 8);
    }

    #[test]
    fn mask_words_keeps_lane_order() {
        let mut lanes = [0u8; 16];
        lanes[11] = 0xFF;
        lanes[13] = 0xFF;
        let words = mask_words(lanes);
        assert_eq!(words[0], 0);
        assert_eq!(first_set_lane(&words), 11);
    }

    #[test]
    fn wide_masks_walk_every_word() {
        for first in 0..32 {
            let mut lanes = [0u8; 32];
            lanes[first..].iter_mut().step_by(3).for_each(|lane| *lane = 0xFF);
            let words = mask_words32(lanes);
            assert_eq!(first_set_lane(&words), first, "first true lane {first}");
        }
    }

    #[test]
    #[should_panic(expected = "no true lane")]
    fn empty_mask_fails_fast() {
        let _ = first_set_lane(&[0, 0]);
    }
}
