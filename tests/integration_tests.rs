//! Integration tests for Cloakchat
//!
//! Note: decryption with wrong (but well-sized) keys does NOT fail - it
//! returns garbled text. The only error condition is a key that is too
//! short for the ciphertext.
//!
//! Properties covered:
//! - Round trip through both the cipher pipeline and the carrier layer
//! - Length preservation and positional passthrough of non-ASCII
//! - Fresh randomness per encryption
//! - The camelCase record shape the external store expects

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use cloakchat::{
    decrypt, encrypt, encrypt_with_rng, pick_carrier, unwrap_carrier, wrap_with_carrier,
    wrap_with_carrier_rng, CarrierPackage, CipherError, IMAGE_POOL,
};

/// Test basic encrypt/decrypt roundtrip
#[test]
fn test_encrypt_decrypt_roundtrip() {
    let plaintext = "Hello from Cloakchat!";

    let result = encrypt(plaintext);
    assert_ne!(result.cipher_text, plaintext);

    let decrypted =
        decrypt(&result.cipher_text, &result.shift_keys, &result.vigenere_key).unwrap();
    assert_eq!(decrypted, plaintext);
}

/// Round trip across a range of lengths, including a 10k-character message
#[test]
fn test_roundtrip_many_lengths() {
    let base = "All work and no play makes Jack a dull boy. 0123456789 ~!@#$%^&*()_+ ";

    for len in [0usize, 1, 2, 7, 64, 255, 1024, 10_000] {
        let plaintext: String = base.chars().cycle().take(len).collect();

        let result = encrypt(&plaintext);
        assert_eq!(result.cipher_text.chars().count(), len);
        assert_eq!(result.shift_keys.len(), len);
        assert_eq!(result.vigenere_key.chars().count(), len);

        let decrypted =
            decrypt(&result.cipher_text, &result.shift_keys, &result.vigenere_key).unwrap();
        assert_eq!(decrypted, plaintext);
    }
}

/// Ciphertext stays within printable ASCII for printable input
#[test]
fn test_ciphertext_stays_printable() {
    let plaintext: String = (' '..='~').collect();
    let result = encrypt(&plaintext);

    assert!(result
        .cipher_text
        .chars()
        .all(|c| (' '..='~').contains(&c)));
}

/// Non-transformable characters are the identity at their position
#[test]
fn test_unicode_passthrough_positions() {
    let plaintext = "caf\u{e9} na\u{ef}ve \u{1f680}\r\n\u{3053}\u{3093}";

    let result = encrypt(plaintext);
    assert_eq!(result.cipher_text.chars().count(), plaintext.chars().count());

    for (p, c) in plaintext.chars().zip(result.cipher_text.chars()) {
        let code = p as u32;
        if !(32..=126).contains(&code) {
            assert_eq!(p, c, "non-transformable char must pass through in place");
        }
    }

    let decrypted =
        decrypt(&result.cipher_text, &result.shift_keys, &result.vigenere_key).unwrap();
    assert_eq!(decrypted, plaintext);
}

/// Two encryptions of the same plaintext differ in all three fields
#[test]
fn test_encryption_is_fresh_per_call() {
    let plaintext = "encrypt me twice and compare the results";

    let a = encrypt(plaintext);
    let b = encrypt(plaintext);

    assert_ne!(a.cipher_text, b.cipher_text);
    assert_ne!(a.shift_keys, b.shift_keys);
    assert_ne!(a.vigenere_key, b.vigenere_key);

    // Both still decrypt to the same plaintext.
    assert_eq!(
        decrypt(&a.cipher_text, &a.shift_keys, &a.vigenere_key).unwrap(),
        plaintext
    );
    assert_eq!(
        decrypt(&b.cipher_text, &b.shift_keys, &b.vigenere_key).unwrap(),
        plaintext
    );
}

/// A seeded RNG reproduces the exact same encryption
#[test]
fn test_seeded_encryption_reproducible() {
    let plaintext = "deterministic when the generator is";
    let seed = [42u8; 32];

    let a = encrypt_with_rng(plaintext, &mut ChaCha20Rng::from_seed(seed));
    let b = encrypt_with_rng(plaintext, &mut ChaCha20Rng::from_seed(seed));

    assert_eq!(a, b);
}

/// Short shift key raises the guard instead of indexing out of bounds
#[test]
fn test_short_shift_key_guard() {
    let result = encrypt("twelve chars");
    let truncated = &result.shift_keys[..5];

    let err = decrypt(&result.cipher_text, truncated, &result.vigenere_key);
    assert_eq!(
        err,
        Err(CipherError::InvalidKeyLength {
            expected: 12,
            actual: 5
        })
    );
}

/// Wrong-but-well-sized keys produce garbled output, never an error
#[test]
fn test_mismatched_keys_garble_silently() {
    let plaintext = "keys must match exactly";
    let a = encrypt(plaintext);
    let b = encrypt(plaintext);

    // b's keys against a's ciphertext: valid lengths, wrong values.
    let garbled = decrypt(&a.cipher_text, &b.shift_keys, &b.vigenere_key).unwrap();
    assert_eq!(garbled.chars().count(), plaintext.chars().count());
    assert_ne!(garbled, plaintext);
}

/// Carrier wrap/unwrap roundtrip, pool membership included
#[test]
fn test_carrier_roundtrip() {
    let plaintext = "hidden behind a landscape photo";

    let package = wrap_with_carrier(plaintext);
    assert!(IMAGE_POOL.contains(&package.image_url.as_str()));
    assert_eq!(unwrap_carrier(&package).unwrap(), plaintext);
}

/// 1000 carrier picks stay in the pool and hit every entry
#[test]
fn test_carrier_pool_coverage() {
    let mut seen = HashSet::new();

    for _ in 0..1000 {
        let url = pick_carrier();
        assert!(IMAGE_POOL.contains(&url));
        seen.insert(url);
    }

    assert_eq!(seen.len(), IMAGE_POOL.len());
}

/// The transport record serializes with the field names the store expects
#[test]
fn test_package_transport_field_names() {
    let package = wrap_with_carrier_rng("record shape", &mut ChaCha20Rng::from_seed([1u8; 32]));

    let json = serde_json::to_value(&package).unwrap();
    assert!(json.get("imageUrl").is_some());

    let data = json.get("data").unwrap();
    assert!(data.get("encryptedMessage").is_some());
    assert!(data.get("shiftKeys").is_some());
    assert!(data.get("vigenereKey").is_some());

    // And it deserializes back to the identical package.
    let restored: CarrierPackage = serde_json::from_value(json).unwrap();
    assert_eq!(restored, package);
    assert_eq!(unwrap_carrier(&restored).unwrap(), "record shape");
}

/// A record persisted as JSON round-trips through the store and decrypts
#[test]
fn test_persisted_record_roundtrip() {
    let plaintext = "store me, fetch me, read me";
    let package = wrap_with_carrier(plaintext);

    let stored = serde_json::to_string(&package).unwrap();
    let fetched: CarrierPackage = serde_json::from_str(&stored).unwrap();

    assert_eq!(unwrap_carrier(&fetched).unwrap(), plaintext);
}
