use tracing::debug;

use crate::errors::CipherError;
use crate::utils::inverse_offset;

/// Shifts every byte of `clear_text` by `offset`, modulo 256, writing the
/// result into the front of `out`.
///
/// The caller owns the destination and sizes it: `out.len()` must be at least
/// `clear_text.len()`. Bytes of `out` past `clear_text.len()` are left as
/// they were.
///
/// # Panics
///
/// Panics if `out` is shorter than `clear_text`.
pub fn caesar_ciphered_into(offset: u8, clear_text: &[u8], out: &mut [u8]) {
    let dst = &mut out[..clear_text.len()];
    for (d, b) in dst.iter_mut().zip(clear_text) {
        *d = b.wrapping_add(offset);
    }
}

/// Shifts every byte of `clear_text` by `offset`, modulo 256.
///
/// The slice length is the number of bytes processed; zero bytes are regular
/// data. The caller hands in exactly the bytes to transform, and gets back a
/// fresh buffer of the same length.
///
/// # Errors
///
/// Returns [`CipherError::Allocation`] if the output buffer cannot be reserved.
pub fn caesar_ciphered(offset: u8, clear_text: &[u8]) -> Result<Vec<u8>, CipherError> {
    let mut result = Vec::new();
    result
        .try_reserve_exact(clear_text.len())
        .map_err(|_| CipherError::Allocation {
            requested: clear_text.len(),
        })?;
    result.resize(clear_text.len(), 0);

    caesar_ciphered_into(offset, clear_text, &mut result);

    debug!(offset, len = result.len(), "shifted buffer");
    Ok(result)
}

/// Undoes [`caesar_ciphered`] for the same `offset`.
pub fn caesar_deciphered(offset: u8, cipher_text: &[u8]) -> Result<Vec<u8>, CipherError> {
    caesar_ciphered(inverse_offset(offset), cipher_text)
}
