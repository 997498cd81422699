//! Atomic per-slot "ejectable" bitmap.
//!
//! One bit per slot, packed into 64-bit words. A set bit marks the slot as an
//! eviction candidate; a cleared bit means the slot was referenced since the
//! clock hand last granted its word a second chance.
//!
//! ## Architecture
//!
//! ```text
//!   words: Box<[AtomicU64]>
//!
//!   word 0                                word 1
//!   ┌────────────────────────────────┐    ┌────────────────────────────────┐
//!   │ bit 63 ............ bit 1 bit 0│    │ bit 63 ............ bit 1 bit 0│
//!   │  slot 63          slot 1 slot 0│    │ slot 127        slot 65 slot 64│
//!   └────────────────────────────────┘    └────────────────────────────────┘
//!
//!   clear_bit(i): words[i / 64].fetch_and(!(1 << (i % 64)))   (readers, shared lock)
//!   set_bit(i):   words[i / 64].fetch_or(1 << (i % 64))       (writers)
//!   fill(w):      words[w].store(!0)                          (sweep, second chance)
//! ```
//!
//! ## Ordering
//!
//! Every update is a single read-modify-write on one word, so concurrent
//! readers never lose each other's clears. All accesses use `Relaxed`: the
//! cache's reader/writer lock orders shared-side clears before any exclusive
//! operation that inspects the words.

use std::sync::atomic::{AtomicU64, Ordering};

/// Number of slots tracked by one bitmap word.
pub const WORD_BITS: usize = u64::BITS as usize;

/// All bits set: every slot of the word is ejectable.
pub const ALL_EJECTABLE: u64 = !0;

/// Returns the mask that keeps every bit of a word except the one for `index`.
///
/// Slots store this mask so the hot read path is a single `fetch_and`.
#[inline]
pub const fn keep_mask(index: usize) -> u64 {
    !(1u64 << (index % WORD_BITS))
}

/// Fixed-size array of atomic words, one bit per slot.
#[derive(Debug)]
pub struct EjectableBitmap {
    words: Box<[AtomicU64]>,
}

impl EjectableBitmap {
    /// Creates a bitmap of `word_count` words with every bit set.
    pub fn new(word_count: usize) -> Self {
        let words = (0..word_count)
            .map(|_| AtomicU64::new(ALL_EJECTABLE))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Self { words }
    }

    /// Returns the number of 64-bit words.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Returns the number of slots covered.
    #[inline]
    pub fn bit_count(&self) -> usize {
        self.words.len() * WORD_BITS
    }

    /// Loads word `word`.
    #[inline]
    pub fn load(&self, word: usize) -> u64 {
        self.words[word].load(Ordering::Relaxed)
    }

    /// Marks `index` as referenced by AND-ing its word with `keep`.
    ///
    /// `keep` must be [`keep_mask(index)`](keep_mask); slots cache it so the
    /// caller does not recompute the shift.
    #[inline]
    pub fn clear_with_mask(&self, index: usize, keep: u64) {
        debug_assert_eq!(keep, keep_mask(index));
        self.words[index / WORD_BITS].fetch_and(keep, Ordering::Relaxed);
    }

    /// Marks `index` as referenced (not ejectable).
    #[inline]
    pub fn clear_bit(&self, index: usize) {
        self.words[index / WORD_BITS].fetch_and(keep_mask(index), Ordering::Relaxed);
    }

    /// Marks `index` as ejectable.
    #[inline]
    pub fn set_bit(&self, index: usize) {
        self.words[index / WORD_BITS].fetch_or(!keep_mask(index), Ordering::Relaxed);
    }

    /// Sets or clears the bit for `index`.
    #[inline]
    pub fn assign(&self, index: usize, ejectable: bool) {
        if ejectable {
            self.set_bit(index);
        } else {
            self.clear_bit(index);
        }
    }

    /// Returns `true` if `index` is currently ejectable.
    #[inline]
    pub fn is_set(&self, index: usize) -> bool {
        self.load(index / WORD_BITS) & !keep_mask(index) != 0
    }

    /// Marks every slot of word `word` ejectable.
    #[inline]
    pub fn fill(&self, word: usize) {
        self.words[word].store(ALL_EJECTABLE, Ordering::Relaxed);
    }

    /// Marks every slot ejectable.
    pub fn fill_all(&self) {
        for word in self.words.iter() {
            word.store(ALL_EJECTABLE, Ordering::Relaxed);
        }
    }
}
