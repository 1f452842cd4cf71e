//! AES-128 key schedule and the single-block cipher.

use crate::block::{Block, BLOCK_SIZE};
use crate::error::CipherError;
use crate::key::{DerivedKey, RoundKeys};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::sbox;

const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// A cipher that transforms one 16-byte block at a time.
pub trait BlockCipher {
    /// Encrypts `block` in place.
    fn encrypt_block(&self, block: &mut Block);
    /// Decrypts `block` in place.
    fn decrypt_block(&self, block: &mut Block);
}

fn expand_key(key: &[u8; BLOCK_SIZE]) -> RoundKeys {
    // Key schedule as 44 four-byte words.
    let mut w = [[0u8; 4]; 44];
    for (word, chunk) in w.iter_mut().zip(key.chunks_exact(4)) {
        word.copy_from_slice(chunk);
    }

    for i in 4..44 {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp.rotate_left(1);
            temp.iter_mut().for_each(|b| *b = sbox(*b));
            temp[0] ^= RCON[i / 4 - 1];
        }
        for (j, byte) in temp.iter().enumerate() {
            w[i][j] = w[i - 4][j] ^ byte;
        }
    }

    let mut round_keys = [[0u8; BLOCK_SIZE]; 11];
    for (round, rk) in round_keys.iter_mut().enumerate() {
        for (word_idx, bytes) in rk.chunks_exact_mut(4).enumerate() {
            bytes.copy_from_slice(&w[round * 4 + word_idx]);
        }
    }

    RoundKeys(round_keys)
}

/// AES-128 with a pre-expanded key schedule.
#[derive(Clone, Debug)]
pub struct Aes128 {
    round_keys: RoundKeys,
}

impl Aes128 {
    /// Builds the cipher from a folded key.
    pub fn new(key: &DerivedKey) -> Self {
        Self {
            round_keys: expand_key(key.as_bytes()),
        }
    }

    /// Builds the cipher from raw key bytes, which must be exactly 16 bytes.
    pub fn from_slice(key: &[u8]) -> Result<Self, CipherError> {
        let bytes: &[u8; BLOCK_SIZE] = key
            .try_into()
            .map_err(|_| CipherError::InvalidKeyLength(key.len()))?;
        Ok(Self {
            round_keys: expand_key(bytes),
        })
    }
}

impl BlockCipher for Aes128 {
    fn encrypt_block(&self, state: &mut Block) {
        let rk = &self.round_keys;
        add_round_key(state, rk.get(0));
        for round in 1..10 {
            sub_bytes(state);
            shift_rows(state);
            mix_columns(state);
            add_round_key(state, rk.get(round));
        }
        sub_bytes(state);
        shift_rows(state);
        add_round_key(state, rk.get(10));
    }

    fn decrypt_block(&self, state: &mut Block) {
        let rk = &self.round_keys;
        add_round_key(state, rk.get(10));
        for round in (1..10).rev() {
            inv_shift_rows(state);
            inv_sub_bytes(state);
            add_round_key(state, rk.get(round));
            inv_mix_columns(state);
        }
        inv_shift_rows(state);
        inv_sub_bytes(state);
        add_round_key(state, rk.get(0));
    }
}
