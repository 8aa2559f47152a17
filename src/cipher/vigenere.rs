//! Vigenère-style cipher with a cycled letter key.
//!
//! The shift amount at position `i` is the code of `key[i mod key_len]`
//! minus 32, applied over the same 95-symbol printable alphabet as the shift
//! stage. Unlike the shift key, the Vigenère key wraps around and may be
//! shorter than the message.

use super::{is_transformable, shift_char, CipherError, ALPHABET_SIZE, ALPHABET_START};

/// Vigenère-encrypts a message with a cycled key.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKeyLength`] if the key is empty while the
/// message is not; there is no shift amount to cycle.
pub fn vigenere_encrypt(message: &str, key: &str) -> Result<String, CipherError> {
    check_key(message, key)?;
    Ok(apply_vigenere_encrypt(message, key))
}

/// Vigenère-decrypts a message, inverting [`vigenere_encrypt`] under the same
/// key.
///
/// # Errors
///
/// Same empty-key rule as [`vigenere_encrypt`].
pub fn vigenere_decrypt(message: &str, key: &str) -> Result<String, CipherError> {
    check_key(message, key)?;
    Ok(transform(message, key, true))
}

/// Length-unchecked encryption, for pipeline-internal use where the key was
/// just generated to fit.
pub(crate) fn apply_vigenere_encrypt(message: &str, key: &str) -> String {
    transform(message, key, false)
}

fn check_key(message: &str, key: &str) -> Result<(), CipherError> {
    if key.is_empty() && !message.is_empty() {
        return Err(CipherError::InvalidKeyLength {
            expected: 1,
            actual: 0,
        });
    }
    Ok(())
}

fn transform(message: &str, key: &str, invert: bool) -> String {
    let key_chars: Vec<char> = key.chars().collect();

    message
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if is_transformable(c) {
                let key_char = key_chars[i % key_chars.len()];
                let k = (key_char as u32 - ALPHABET_START) % ALPHABET_SIZE;
                let shift = if invert { ALPHABET_SIZE - k } else { k };
                shift_char(c, shift % ALPHABET_SIZE)
            } else {
                c
            }
        })
        .collect()
}
