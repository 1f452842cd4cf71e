//! Errors raised by the cipher and the ECB codec.

use thiserror::Error;

/// Failure of a cipher operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Ciphertext is empty or not a whole number of blocks.
    #[error("ciphertext length {0} is not a positive multiple of 16")]
    MalformedLength(usize),
    /// Decrypted padding is not valid PKCS#7.
    #[error("invalid PKCS#7 padding")]
    BadPadding,
    /// Raw key handed to the block cipher is not 16 bytes.
    #[error("AES-128 key must be 16 bytes, got {0}")]
    InvalidKeyLength(usize),
}

impl CipherError {
    /// Returns true for failures caused by the ciphertext or the key it was
    /// decrypted with, as opposed to misuse of the cipher itself.
    ///
    /// SQL callers map these to `NULL` instead of raising an error.
    pub fn is_decrypt_failure(&self) -> bool {
        matches!(self, Self::MalformedLength(_) | Self::BadPadding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decrypt_failure_classification() {
        assert!(CipherError::MalformedLength(0).is_decrypt_failure());
        assert!(CipherError::MalformedLength(17).is_decrypt_failure());
        assert!(CipherError::BadPadding.is_decrypt_failure());
        assert!(!CipherError::InvalidKeyLength(24).is_decrypt_failure());
    }
}
