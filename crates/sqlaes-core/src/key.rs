//! Key types: the folded 128-bit key and its expanded schedule.

use crate::block::{xor_into, Block, BLOCK_SIZE};

/// A 128-bit AES key folded from arbitrary key material.
///
/// Folding follows MySQL: the raw key is cut into 16-byte chunks starting at
/// offset 0, and each chunk is XORed into a zeroed accumulator at the same
/// offsets. Keys shorter than 16 bytes leave the accumulator tail zero; an
/// empty key folds to all zeros.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DerivedKey([u8; BLOCK_SIZE]);

impl DerivedKey {
    /// Folds `raw` into a 16-byte key. Never fails.
    pub fn derive(raw: &[u8]) -> Self {
        let mut acc = [0u8; BLOCK_SIZE];
        for chunk in raw.chunks(BLOCK_SIZE) {
            xor_into(&mut acc, chunk);
        }
        Self(acc)
    }

    /// Returns the folded key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.0
    }
}

impl From<[u8; BLOCK_SIZE]> for DerivedKey {
    fn from(value: [u8; BLOCK_SIZE]) -> Self {
        Self(value)
    }
}

// Key bytes stay out of logs.
impl core::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("DerivedKey(..)")
    }
}

/// Expanded round keys for AES-128.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct RoundKeys(pub(crate) [Block; 11]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub(crate) fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }
}

impl core::fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("RoundKeys(..)")
    }
}
