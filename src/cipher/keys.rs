//! Single-use random key generation.
//!
//! Keys are uniform, independent per position, and not reproducible: nothing
//! derives them from the message or from any long-term secret. The caller
//! must persist them to ever decrypt. Both generators size their output to
//! the full character count of the input, including positions whose
//! characters the ciphers will never touch.

use rand::Rng;

use super::ALPHABET_SIZE;

/// The 52-letter alphabet Vigenère keys are drawn from.
const VIGENERE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Generates one uniform shift value in `0..95` per character of `text`.
pub fn generate_shift_key(text: &str) -> Vec<u8> {
    generate_shift_key_with_rng(text, &mut rand::thread_rng())
}

/// Same as [`generate_shift_key`] with an injected RNG, for deterministic
/// tests.
pub fn generate_shift_key_with_rng<R: Rng>(text: &str, rng: &mut R) -> Vec<u8> {
    text.chars()
        .map(|_| rng.gen_range(0..ALPHABET_SIZE as u8))
        .collect()
}

/// Generates one uniform letter (`A-Z`, `a-z`) per character of `text`.
pub fn generate_vigenere_key(text: &str) -> String {
    generate_vigenere_key_with_rng(text, &mut rand::thread_rng())
}

/// Same as [`generate_vigenere_key`] with an injected RNG.
pub fn generate_vigenere_key_with_rng<R: Rng>(text: &str, rng: &mut R) -> String {
    text.chars()
        .map(|_| VIGENERE_ALPHABET[rng.gen_range(0..VIGENERE_ALPHABET.len())] as char)
        .collect()
}
