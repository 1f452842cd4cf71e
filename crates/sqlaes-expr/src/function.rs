//! Scalar function implementations and the builtin lookup table.

use std::borrow::Cow;
use std::fmt::Debug;

use log::{debug, trace};
use sqlaes_core::{ecb, Aes128, CipherError, DerivedKey};

use crate::datum::Datum;
use crate::error::EvalError;

/// A SQL scalar function evaluated one row at a time.
pub trait ScalarFunction: Debug + Send + Sync {
    /// Lowercase SQL name.
    fn name(&self) -> &'static str;

    /// Number of arguments the function takes.
    fn arity(&self) -> usize;

    /// Evaluates the function over one row of arguments.
    fn eval(&self, args: &[Datum]) -> Result<Datum, EvalError>;
}

/// `AES_ENCRYPT(str, key_str)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AesEncrypt;

/// `AES_DECRYPT(crypt_str, key_str)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AesDecrypt;

/// All functions provided by this crate.
pub static BUILTINS: &[&dyn ScalarFunction] = &[&AesEncrypt, &AesDecrypt];

/// Looks up a builtin by SQL name, ignoring ASCII case.
pub fn builtin(name: &str) -> Option<&'static dyn ScalarFunction> {
    BUILTINS
        .iter()
        .copied()
        .find(|f| f.name().eq_ignore_ascii_case(name))
}

/// Splits `args` into the two operands of a binary function.
fn binary_args<'a>(
    func: &dyn ScalarFunction,
    args: &'a [Datum],
) -> Result<(&'a Datum, &'a Datum), EvalError> {
    match args {
        [input, key] if func.arity() == 2 => Ok((input, key)),
        _ => Err(EvalError::ArgumentCount {
            name: func.name(),
            expected: func.arity(),
            actual: args.len(),
        }),
    }
}

/// Coerces both operands to bytes, or `None` when either is `NULL`.
fn byte_args<'a>(
    name: &'static str,
    input: &'a Datum,
    key: &'a Datum,
) -> Option<(Cow<'a, [u8]>, Cow<'a, [u8]>)> {
    match (input.to_bytes(), key.to_bytes()) {
        (Some(input), Some(key)) => Some((input, key)),
        _ => {
            trace!("{name}: NULL argument");
            None
        }
    }
}

fn cipher_for(name: &'static str, raw_key: &[u8]) -> Result<Aes128, EvalError> {
    let key = DerivedKey::derive(raw_key);
    Aes128::from_slice(key.as_bytes()).map_err(|source| EvalError::Cipher { name, source })
}

/// Maps a decrypt outcome onto the SQL result: bad ciphertext is `NULL`,
/// anything else the cipher reports is a hard error.
fn decrypt_outcome(
    name: &'static str,
    outcome: Result<Vec<u8>, CipherError>,
) -> Result<Datum, EvalError> {
    match outcome {
        Ok(plain) => Ok(Datum::Bytes(plain)),
        Err(err) if err.is_decrypt_failure() => {
            debug!("{name}: {err}, returning NULL");
            Ok(Datum::Null)
        }
        Err(source) => Err(EvalError::Cipher { name, source }),
    }
}

impl ScalarFunction for AesEncrypt {
    fn name(&self) -> &'static str {
        "aes_encrypt"
    }

    fn arity(&self) -> usize {
        2
    }

    fn eval(&self, args: &[Datum]) -> Result<Datum, EvalError> {
        let (input, key) = binary_args(self, args)?;
        aes_encrypt(input, key)
    }
}

impl ScalarFunction for AesDecrypt {
    fn name(&self) -> &'static str {
        "aes_decrypt"
    }

    fn arity(&self) -> usize {
        2
    }

    fn eval(&self, args: &[Datum]) -> Result<Datum, EvalError> {
        let (input, key) = binary_args(self, args)?;
        aes_decrypt(input, key)
    }
}

/// Evaluates `AES_ENCRYPT(input, key)`.
pub fn aes_encrypt(input: &Datum, key: &Datum) -> Result<Datum, EvalError> {
    let name = AesEncrypt.name();
    let Some((plain, key)) = byte_args(name, input, key) else {
        return Ok(Datum::Null);
    };
    let cipher = cipher_for(name, &key)?;
    Ok(Datum::Bytes(ecb::encrypt_with(&cipher, &plain)))
}

/// Evaluates `AES_DECRYPT(input, key)`.
pub fn aes_decrypt(input: &Datum, key: &Datum) -> Result<Datum, EvalError> {
    let name = AesDecrypt.name();
    let Some((crypt, key)) = byte_args(name, input, key) else {
        return Ok(Datum::Null);
    };
    let cipher = cipher_for(name, &key)?;
    decrypt_outcome(name, ecb::decrypt_with(&cipher, &crypt))
}

/// Evaluates `func` once per row. The first hard error aborts the batch.
pub fn eval_rows(func: &dyn ScalarFunction, rows: &[Vec<Datum>]) -> Result<Vec<Datum>, EvalError> {
    rows.iter().map(|row| func.eval(row)).collect()
}
