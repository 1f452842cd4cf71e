//! AES-128 primitives behind the MySQL-compatible `AES_ENCRYPT` and
//! `AES_DECRYPT` SQL functions.
//!
//! The crate provides:
//! - Byte-folding of arbitrary key material into a 128-bit key.
//! - A FIPS-197 AES-128 block cipher.
//! - ECB mode with PKCS#7 padding, including full padding validation on decrypt.
//!
//! ECB and XOR key folding are kept for bit-for-bit compatibility with MySQL;
//! nothing here is authenticated and none of it is side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
pub mod ecb;
mod error;
mod key;
mod round;
mod sbox;

pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::cipher::{Aes128, BlockCipher};
pub use crate::ecb::{decrypt, encrypt};
pub use crate::error::CipherError;
pub use crate::key::DerivedKey;
