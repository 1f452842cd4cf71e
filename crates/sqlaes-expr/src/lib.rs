//! `AES_ENCRYPT` and `AES_DECRYPT` as null-aware SQL scalar functions.
//!
//! Values cross the function boundary as [`Datum`]s. A `NULL` argument makes
//! the result `NULL` without touching the cipher, and a ciphertext that fails
//! length or padding checks decrypts to `NULL` instead of raising an error.
//! Only faults inside the cipher itself surface as [`EvalError`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod datum;
mod error;
mod function;

pub use crate::datum::Datum;
pub use crate::error::EvalError;
pub use crate::function::{
    aes_decrypt, aes_encrypt, builtin, eval_rows, AesDecrypt, AesEncrypt, ScalarFunction,
    BUILTINS,
};
