//! Fixed-size bit set over board cells

use super::{Pos, TOTAL_CELLS};

const WORDS: usize = TOTAL_CELLS.div_ceil(64);

/// One bit per cell, 6 x u64 covers the 361 addressable cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    words: [u64; WORDS],
}

impl Bitboard {
    pub const fn new() -> Self {
        Self { words: [0; WORDS] }
    }

    #[inline]
    pub fn set(&mut self, pos: Pos) {
        let idx = pos.to_index();
        self.words[idx / 64] |= 1u64 << (idx % 64);
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        let idx = pos.to_index();
        self.words[idx / 64] & (1u64 << (idx % 64)) != 0
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Cells set in either board
    #[inline]
    pub fn union(&self, other: &Bitboard) -> Bitboard {
        let mut words = self.words;
        for (w, o) in words.iter_mut().zip(other.words.iter()) {
            *w |= o;
        }
        Bitboard { words }
    }

    /// Iterate set cells in index (row-major) order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter {
            words: self.words,
            word_idx: 0,
        }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    words: [u64; WORDS],
    word_idx: usize,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        while self.word_idx < WORDS {
            let word = self.words[self.word_idx];
            if word == 0 {
                self.word_idx += 1;
                continue;
            }
            // Pop the lowest set bit
            self.words[self.word_idx] = word & (word - 1);
            let idx = self.word_idx * 64 + word.trailing_zeros() as usize;
            return (idx < TOTAL_CELLS).then(|| Pos::from_index(idx));
        }
        None
    }
}
