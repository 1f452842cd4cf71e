//! Block representation helpers.

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// XORs `rhs` into the leading bytes of `dst`.
///
/// `rhs` may be shorter than `dst`; bytes past its end are left untouched.
#[inline]
pub(crate) fn xor_into(dst: &mut [u8], rhs: &[u8]) {
    for (d, r) in dst.iter_mut().zip(rhs) {
        *d ^= *r;
    }
}
