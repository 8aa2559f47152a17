//! Two-stage cipher pipeline for Cloakchat.
//!
//! This module provides:
//! - Per-character shift cipher over printable ASCII ([`shift`])
//! - Vigenère-style cycled-key cipher ([`vigenere`])
//! - Single-use random key generation ([`keys`])
//! - The combined encrypt/decrypt pipeline ([`encrypt`], [`decrypt`])
//!
//! Encryption runs the shift stage first, then the Vigenère stage on the
//! intermediate ciphertext; decryption undoes them in reverse order. Both
//! keys are freshly random per call and exactly as long as the message, so
//! the caller must persist them alongside the ciphertext to ever decrypt.

pub mod keys;
pub mod shift;
pub mod vigenere;

pub use keys::{
    generate_shift_key, generate_shift_key_with_rng, generate_vigenere_key,
    generate_vigenere_key_with_rng,
};
pub use shift::{shift_decrypt, shift_encrypt};
pub use vigenere::{vigenere_decrypt, vigenere_encrypt};

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// First code of the transformable alphabet (ASCII space).
pub(crate) const ALPHABET_START: u32 = 32;

/// Last code of the transformable alphabet (ASCII `~`).
pub(crate) const ALPHABET_END: u32 = 126;

/// Size of the transformable alphabet (space through `~`).
pub(crate) const ALPHABET_SIZE: u32 = 95;

/// Errors that can occur during cipher operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CipherError {
    #[error("Key too short: message has {expected} characters but key has {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },
}

/// Result of encrypting a single message.
///
/// The three fields together are the sole persisted representation of the
/// message; all of them are required for decryption and none is derivable
/// from the others.
///
/// Field names serialize in camelCase to match the record format the
/// external store expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptionResult {
    /// Final (stage-2) ciphertext, same character length as the plaintext.
    pub cipher_text: String,
    /// One shift value in `0..95` per plaintext character.
    pub shift_keys: Vec<u8>,
    /// One letter (`A-Za-z`) per intermediate-ciphertext character.
    pub vigenere_key: String,
}

/// Returns true if the character participates in the cipher transforms.
///
/// Only printable ASCII (codes 32-126) is transformable; everything else
/// passes through both stages unchanged.
pub(crate) fn is_transformable(c: char) -> bool {
    let code = c as u32;
    (ALPHABET_START..=ALPHABET_END).contains(&code)
}

/// Applies a modular shift to a transformable character.
///
/// `shift` is taken modulo the alphabet size, so both encryption offsets and
/// decryption offsets (`95 - k`) go through the same path.
pub(crate) fn shift_char(c: char, shift: u32) -> char {
    let code = c as u32;
    let shifted = (code - ALPHABET_START + shift) % ALPHABET_SIZE + ALPHABET_START;
    // Result stays within 32..=126, always a valid char.
    char::from_u32(shifted).unwrap_or(c)
}

/// Encrypts a plaintext with freshly generated single-use keys.
///
/// Pipeline:
/// 1. Generate one random shift value per plaintext character.
/// 2. Shift-encrypt to get the intermediate ciphertext.
/// 3. Generate a random Vigenère letter key sized to the intermediate
///    ciphertext.
/// 4. Vigenère-encrypt to get the final ciphertext.
///
/// Infallible: the keys are generated to fit the message exactly. Every call
/// draws fresh randomness, so encrypting the same plaintext twice yields
/// different results.
pub fn encrypt(plaintext: &str) -> EncryptionResult {
    encrypt_with_rng(plaintext, &mut rand::thread_rng())
}

/// Encrypts a plaintext using the provided random number generator.
///
/// Same pipeline as [`encrypt`]; a seeded RNG makes the output deterministic,
/// which is only appropriate in tests.
pub fn encrypt_with_rng<R: Rng>(plaintext: &str, rng: &mut R) -> EncryptionResult {
    let shift_keys = generate_shift_key_with_rng(plaintext, rng);
    let stage1 = shift::apply_shift_encrypt(plaintext, &shift_keys);
    let vigenere_key = generate_vigenere_key_with_rng(&stage1, rng);
    let cipher_text = vigenere::apply_vigenere_encrypt(&stage1, &vigenere_key);

    EncryptionResult {
        cipher_text,
        shift_keys,
        vigenere_key,
    }
}

/// Decrypts a ciphertext produced by [`encrypt`].
///
/// Undoes the stages in reverse order: Vigenère first, then shift. Exactly
/// inverts `encrypt` for any plaintext; non-transformable characters are the
/// identity at their position in both directions.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKeyLength`] if `shift_keys` is shorter than
/// the ciphertext, or if `vigenere_key` is empty while the ciphertext is not.
/// A wrong (but well-sized) key does not error - it produces garbled text.
pub fn decrypt(
    cipher_text: &str,
    shift_keys: &[u8],
    vigenere_key: &str,
) -> Result<String, CipherError> {
    let stage1 = vigenere_decrypt(cipher_text, vigenere_key)?;
    shift_decrypt(&stage1, shift_keys)
}
