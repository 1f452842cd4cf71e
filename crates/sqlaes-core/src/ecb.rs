//! ECB mode with PKCS#7 padding.
//!
//! Every block is processed independently with the same key; there is no IV
//! and no chaining. Encryption always appends 1..=16 padding bytes, so the
//! ciphertext of an empty plaintext is one full block.

use crate::block::{Block, BLOCK_SIZE};
use crate::cipher::{Aes128, BlockCipher};
use crate::error::CipherError;
use crate::key::DerivedKey;

/// Number of padding bytes PKCS#7 appends to a plaintext of `len` bytes.
#[inline]
pub fn padding_len(len: usize) -> usize {
    BLOCK_SIZE - len % BLOCK_SIZE
}

/// Pads `plaintext` and encrypts it block by block with `cipher`.
pub fn encrypt_with<C: BlockCipher>(cipher: &C, plaintext: &[u8]) -> Vec<u8> {
    let pad = padding_len(plaintext.len());
    let mut buf = Vec::with_capacity(plaintext.len() + pad);
    buf.extend_from_slice(plaintext);
    // pad is in 1..=16, so the cast is lossless.
    buf.resize(plaintext.len() + pad, pad as u8);

    for chunk in buf.chunks_exact_mut(BLOCK_SIZE) {
        let mut block: Block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        cipher.encrypt_block(&mut block);
        chunk.copy_from_slice(&block);
    }
    buf
}

/// Decrypts `ciphertext` block by block with `cipher` and strips the padding.
///
/// Fails with [`CipherError::MalformedLength`] before touching the cipher if
/// the input is empty or not block aligned, and with
/// [`CipherError::BadPadding`] if the trailing bytes are not valid PKCS#7.
pub fn decrypt_with<C: BlockCipher>(cipher: &C, ciphertext: &[u8]) -> Result<Vec<u8>, CipherError> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CipherError::MalformedLength(ciphertext.len()));
    }

    let mut buf = ciphertext.to_vec();
    for chunk in buf.chunks_exact_mut(BLOCK_SIZE) {
        let mut block: Block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        cipher.decrypt_block(&mut block);
        chunk.copy_from_slice(&block);
    }

    let plain_len = unpadded_len(&buf)?;
    buf.truncate(plain_len);
    Ok(buf)
}

/// Validates PKCS#7 padding on `padded` and returns the unpadded length.
pub fn unpadded_len(padded: &[u8]) -> Result<usize, CipherError> {
    let &last = padded.last().ok_or(CipherError::BadPadding)?;
    let pad = usize::from(last);
    if pad == 0 || pad > BLOCK_SIZE || pad > padded.len() {
        return Err(CipherError::BadPadding);
    }
    let (body, tail) = padded.split_at(padded.len() - pad);
    if tail.iter().any(|&b| b != last) {
        return Err(CipherError::BadPadding);
    }
    Ok(body.len())
}

/// Encrypts `plaintext` with AES-128-ECB under `key`.
pub fn encrypt(plaintext: &[u8], key: &DerivedKey) -> Vec<u8> {
    encrypt_with(&Aes128::new(key), plaintext)
}

/// Decrypts AES-128-ECB `ciphertext` under `key`.
pub fn decrypt(ciphertext: &[u8], key: &DerivedKey) -> Result<Vec<u8>, CipherError> {
    decrypt_with(&Aes128::new(key), ciphertext)
}
