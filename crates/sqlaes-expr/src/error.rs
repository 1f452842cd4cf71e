//! Hard evaluation errors.

use sqlaes_core::CipherError;
use thiserror::Error;

/// An error that aborts evaluation, as opposed to a `NULL` result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The function was called with the wrong number of arguments.
    #[error("{name} expects {expected} arguments, got {actual}")]
    ArgumentCount {
        /// Function name.
        name: &'static str,
        /// Declared arity.
        expected: usize,
        /// Number of arguments supplied.
        actual: usize,
    },
    /// The cipher failed for a reason other than bad ciphertext.
    #[error("{name}: cipher fault: {source}")]
    Cipher {
        /// Function name.
        name: &'static str,
        /// Underlying cipher error.
        #[source]
        source: CipherError,
    },
}
