//! Fixed-capacity bit set used by the cover search.
//!
//! The minimization engine numbers the required minterms `0..r` and records, for
//! every candidate prime implicant, which of them it covers. Testing whether a
//! combination of candidates is a cover then boils down to word-wise unions.

/// A bit set backed by a vector of u64 words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitSet {
    words: Vec<u64>,
    /// Number of addressable bits
    capacity: usize,
}

impl BitSet {
    const BITS_PER_WORD: usize = 64;

    /// Creates an empty set of `capacity` bits.
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(Self::BITS_PER_WORD)],
            capacity,
        }
    }

    /// Number of set bits.
    fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if every addressable bit is set.
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    /// Sets bit `index`. Returns `false` if it was already set.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub fn insert(&mut self, index: usize) -> bool {
        assert!(index < self.capacity, "Bit {} out of capacity {}", index, self.capacity);
        let word = &mut self.words[index / Self::BITS_PER_WORD];
        let bit = 1u64 << (index % Self::BITS_PER_WORD);
        let was_clear = *word & bit == 0;
        *word |= bit;
        was_clear
    }

    /// Sets every bit that is set in `other`.
    pub fn union_with(&mut self, other: &BitSet) {
        for (word, &theirs) in self.words.iter_mut().zip(&other.words) {
            *word |= theirs;
        }
    }

    pub fn clear(&mut self) {
        self.words.fill(0);
    }
}
