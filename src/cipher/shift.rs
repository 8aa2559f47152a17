//! Per-character shift cipher over the printable ASCII alphabet.
//!
//! Each position gets its own shift value in `0..95`, applied as modular
//! addition anchored at code 32. Unlike the Vigenère stage the key is never
//! cycled: it must cover every character of the message.

use super::{is_transformable, shift_char, CipherError, ALPHABET_SIZE};

/// Shift-encrypts a message with one key value per character.
///
/// Transformable characters (codes 32-126) become
/// `((code - 32 + keys[i]) mod 95) + 32`; everything else is left unchanged
/// but still consumes its key slot.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKeyLength`] if `keys` has fewer entries than
/// the message has characters. Extra key entries are ignored.
pub fn shift_encrypt(message: &str, keys: &[u8]) -> Result<String, CipherError> {
    check_key_length(message, keys)?;
    Ok(apply_shift_encrypt(message, keys))
}

/// Shift-decrypts a message, inverting [`shift_encrypt`].
///
/// Transformable characters become `((code - 32 - keys[i] + 95) mod 95) + 32`.
///
/// # Errors
///
/// Same length requirement as [`shift_encrypt`].
pub fn shift_decrypt(message: &str, keys: &[u8]) -> Result<String, CipherError> {
    check_key_length(message, keys)?;
    Ok(transform(message, keys, true))
}

/// Length-unchecked encryption, for pipeline-internal use where the key was
/// just generated to fit.
pub(crate) fn apply_shift_encrypt(message: &str, keys: &[u8]) -> String {
    transform(message, keys, false)
}

fn check_key_length(message: &str, keys: &[u8]) -> Result<(), CipherError> {
    let expected = message.chars().count();
    if keys.len() < expected {
        return Err(CipherError::InvalidKeyLength {
            expected,
            actual: keys.len(),
        });
    }
    Ok(())
}

fn transform(message: &str, keys: &[u8], invert: bool) -> String {
    message
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if is_transformable(c) {
                let k = u32::from(keys[i]) % ALPHABET_SIZE;
                let shift = if invert { ALPHABET_SIZE - k } else { k };
                shift_char(c, shift % ALPHABET_SIZE)
            } else {
                c
            }
        })
        .collect()
}
