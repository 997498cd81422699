//! Resumable cursor for the word-granular clock sweep.
//!
//! The hand names a bitmap word and the bits of that word it has not yet
//! examined. `mask` is always `!0 << n` for some `n` in `0..64`: the low
//! `n` bits were already consumed during the current pass over the word.
//!
//! ```text
//!   word = 2, mask = 0xFFFF_FFFF_FFFF_FFE0
//!                                   └─ bits 0..5 consumed, next candidate >= bit 5
//! ```

/// Mask with every bit of the current word still to examine.
const FULL: u64 = !0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockHand {
    word: usize,
    mask: u64,
}

impl ClockHand {
    /// Returns a hand parked at word 0 with nothing consumed.
    #[inline]
    pub const fn new() -> Self {
        Self {
            word: 0,
            mask: FULL,
        }
    }

    #[inline]
    pub fn word(&self) -> usize {
        self.word
    }

    #[inline]
    pub fn mask(&self) -> u64 {
        self.mask
    }

    /// Parks the hand back at word 0.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Moves to the start of the next word, wrapping after `word_count` words.
    #[inline]
    pub fn advance_word(&mut self, word_count: usize) {
        self.mask = FULL;
        self.word += 1;
        if self.word == word_count {
            self.word = 0;
        }
    }

    /// Marks `bit` and every lower bit of the current word as consumed.
    ///
    /// Consuming bit 63 exhausts the word and moves the hand to the next one.
    #[inline]
    pub fn consume(&mut self, bit: u32, word_count: usize) {
        debug_assert!(bit < u64::BITS);
        self.mask = FULL.checked_shl(bit + 1).unwrap_or(0);
        if self.mask == 0 {
            self.advance_word(word_count);
        }
    }

    /// Returns `true` if the mask is a run of high-order ones.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.mask != 0 && self.mask == FULL << self.mask.trailing_zeros()
    }
}

impl Default for ClockHand {
    fn default() -> Self {
        Self::new()
    }
}
