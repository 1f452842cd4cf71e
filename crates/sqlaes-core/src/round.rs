//! AES round transformations over a column-major 16-byte state.

use crate::block::{xor_into, Block};
use crate::sbox::{inv_sbox, sbox};

/// Source index for each output byte of ShiftRows: row `r` rotates left by `r`.
const SHIFT: [usize; 16] = [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11];

/// Source index for each output byte of InvShiftRows.
const INV_SHIFT: [usize; 16] = [0, 13, 10, 7, 4, 1, 14, 11, 8, 5, 2, 15, 12, 9, 6, 3];

fn permute(state: &mut Block, table: &[usize; 16]) {
    let src = *state;
    for (dst, &idx) in state.iter_mut().zip(table) {
        *dst = src[idx];
    }
}

/// Applies SubBytes to the state in place.
#[inline]
pub(crate) fn sub_bytes(state: &mut Block) {
    state.iter_mut().for_each(|b| *b = sbox(*b));
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub(crate) fn inv_sub_bytes(state: &mut Block) {
    state.iter_mut().for_each(|b| *b = inv_sbox(*b));
}

/// Performs ShiftRows in place.
#[inline]
pub(crate) fn shift_rows(state: &mut Block) {
    permute(state, &SHIFT);
}

/// Performs the inverse of ShiftRows in place.
#[inline]
pub(crate) fn inv_shift_rows(state: &mut Block) {
    permute(state, &INV_SHIFT);
}

/// Multiplication by `x` in GF(2^8) modulo the AES polynomial.
#[inline]
fn xtime(byte: u8) -> u8 {
    (byte << 1) ^ if byte & 0x80 != 0 { 0x1b } else { 0 }
}

/// General GF(2^8) multiplication (shift-and-add).
fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

/// MixColumns over all four columns.
pub(crate) fn mix_columns(state: &mut Block) {
    for col in state.chunks_exact_mut(4) {
        let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
        let all = a0 ^ a1 ^ a2 ^ a3;
        col[0] = a0 ^ all ^ xtime(a0 ^ a1);
        col[1] = a1 ^ all ^ xtime(a1 ^ a2);
        col[2] = a2 ^ all ^ xtime(a2 ^ a3);
        col[3] = a3 ^ all ^ xtime(a3 ^ a0);
    }
}

/// Inverse MixColumns over all four columns.
pub(crate) fn inv_mix_columns(state: &mut Block) {
    for col in state.chunks_exact_mut(4) {
        let a = [col[0], col[1], col[2], col[3]];
        for (row, out) in col.iter_mut().enumerate() {
            *out = gmul(a[row], 0x0e)
                ^ gmul(a[(row + 1) % 4], 0x0b)
                ^ gmul(a[(row + 2) % 4], 0x0d)
                ^ gmul(a[(row + 3) % 4], 0x09);
        }
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub(crate) fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_into(state, round_key);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_columns_matches_known_column() {
        // FIPS-197 worked example column: db 13 53 45 -> 8e 4d a1 bc.
        let mut state = [0u8; 16];
        state[..4].copy_from_slice(&[0xdb, 0x13, 0x53, 0x45]);
        mix_columns(&mut state);
        assert_eq!(&state[..4], &[0x8e, 0x4d, 0xa1, 0xbc]);
        inv_mix_columns(&mut state);
        assert_eq!(&state[..4], &[0xdb, 0x13, 0x53, 0x45]);
    }

    #[test]
    fn shift_rows_inverts() {
        let original: Block = core::array::from_fn(|i| i as u8);
        let mut state = original;
        shift_rows(&mut state);
        assert_eq!(state[1], 5);
        inv_shift_rows(&mut state);
        assert_eq!(state, original);
    }

    #[test]
    fn gmul_basics() {
        assert_eq!(gmul(0x57, 0x83), 0xc1);
        assert_eq!(gmul(0x57, 0x13), 0xfe);
        assert_eq!(gmul(0x01, 0x0e), 0x0e);
    }
}
