//! Decoy carrier dispatch for outgoing messages.
//!
//! A carrier is a decoy image URL attached to a ciphertext so the message
//! renders as a picture post. Nothing is embedded in the image bytes; the
//! URL is drawn from a small fixed pool and is purely presentational. The
//! caller decides which messages get a carrier at all (the chat client
//! attaches one to roughly 30% of sends); this module only does the
//! selection and packaging.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cipher::{self, CipherError, EncryptionResult};

/// The fixed pool of decoy image references.
///
/// Process-wide constant configuration: the pool is never generated or
/// mutated, and [`pick_carrier`] never validates that an entry is reachable.
pub const IMAGE_POOL: [&str; 5] = [
    "https://images.unsplash.com/photo-1470071459604-3b5ec3a7fe05",
    "https://images.unsplash.com/photo-1447752875215-b2761acb3c5d",
    "https://images.unsplash.com/photo-1441974231531-c6227db76b6e",
    "https://images.unsplash.com/photo-1518173946687-a4c8892bbd9f",
    "https://images.unsplash.com/photo-1475924156734-496f6cac6ec1",
];

/// The encrypted triple in the shape the external store persists it.
///
/// Same data as [`EncryptionResult`], renamed for transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierData {
    /// Final ciphertext (the `cipher_text` of an [`EncryptionResult`]).
    pub encrypted_message: String,
    /// Per-character shift key, positionally aligned with the plaintext.
    pub shift_keys: Vec<u8>,
    /// Cycled Vigenère letter key.
    pub vigenere_key: String,
}

/// A ciphertext paired with its decoy image reference, ready for transport.
///
/// Created fresh per send and never mutated or reused; the caller hands it
/// to the external store immediately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierPackage {
    /// Decoy image URL from [`IMAGE_POOL`]. Informational only; plays no
    /// role in recovery.
    pub image_url: String,
    /// The encrypted triple.
    pub data: CarrierData,
}

/// Uniformly selects one decoy URL from the fixed pool.
pub fn pick_carrier() -> &'static str {
    pick_carrier_with_rng(&mut rand::thread_rng())
}

/// Same as [`pick_carrier`] with an injected RNG.
pub fn pick_carrier_with_rng<R: Rng>(rng: &mut R) -> &'static str {
    IMAGE_POOL[rng.gen_range(0..IMAGE_POOL.len())]
}

/// Encrypts a plaintext and pairs it with a decoy carrier.
///
/// Pure computation apart from the key/carrier randomness; no suspension
/// points and no I/O, so it is safe to call from any number of send
/// pipelines concurrently.
pub fn wrap_with_carrier(plaintext: &str) -> CarrierPackage {
    wrap_with_carrier_rng(plaintext, &mut rand::thread_rng())
}

/// Same as [`wrap_with_carrier`] with an injected RNG.
pub fn wrap_with_carrier_rng<R: Rng>(plaintext: &str, rng: &mut R) -> CarrierPackage {
    let encrypted = cipher::encrypt_with_rng(plaintext, rng);
    let image_url = pick_carrier_with_rng(rng);

    CarrierPackage {
        image_url: image_url.to_string(),
        data: CarrierData {
            encrypted_message: encrypted.cipher_text,
            shift_keys: encrypted.shift_keys,
            vigenere_key: encrypted.vigenere_key,
        },
    }
}

/// Recovers the plaintext from a carrier package.
///
/// The `image_url` is ignored; only the triple matters.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKeyLength`] under the same conditions as
/// [`cipher::decrypt`].
pub fn unwrap_carrier(package: &CarrierPackage) -> Result<String, CipherError> {
    cipher::decrypt(
        &package.data.encrypted_message,
        &package.data.shift_keys,
        &package.data.vigenere_key,
    )
}

impl From<EncryptionResult> for CarrierData {
    fn from(result: EncryptionResult) -> Self {
        CarrierData {
            encrypted_message: result.cipher_text,
            shift_keys: result.shift_keys,
            vigenere_key: result.vigenere_key,
        }
    }
}
