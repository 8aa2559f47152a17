//! # Cloakchat - message obfuscation core
//!
//! Cloakchat is the obfuscation subsystem of a chat client. It turns a
//! plaintext message into an opaque triple (ciphertext plus two single-use
//! keys) and optionally pairs it with a decoy image reference so the message
//! looks like an innocuous picture post.
//!
//! ## Overview
//!
//! Every outgoing message goes through a two-stage substitution pipeline:
//! - A **shift cipher** adds an independent random offset to each character
//!   (one key value per character, never reused).
//! - A **Vigenère-style cipher** then shifts the intermediate ciphertext with
//!   a freshly generated letter key, cycled positionally.
//!
//! Both stages operate over the 95-symbol printable ASCII alphabet (space
//! through `~`). Characters outside that range pass through untouched, so
//! accents, emoji and control characters survive a round trip unchanged.
//!
//! The caller persists the resulting triple as-is; plaintext is never stored.
//! Losing any one of the three values makes the message permanently
//! unrecoverable - keys are random per message and derived from nothing.
//!
//! ## Security Model
//!
//! This is **not** a cryptographically secure scheme. There is no
//! authentication, no integrity check, and the key space does not resist
//! cryptanalysis. The point is presentational obfuscation: ciphertext records
//! in the external store are unreadable at a glance, and the decoy image
//! makes an encrypted message look like a photo share. The carrier never
//! embeds anything in pixels; it is a URL drawn from a fixed pool.
//!
//! ## Example Usage
//!
//! ```rust
//! use cloakchat::{decrypt, encrypt, unwrap_carrier, wrap_with_carrier};
//!
//! // Plain encryption: caller persists all three fields.
//! let result = encrypt("meet at noon");
//! let plain = decrypt(&result.cipher_text, &result.shift_keys, &result.vigenere_key).unwrap();
//! assert_eq!(plain, "meet at noon");
//!
//! // With a decoy carrier attached.
//! let package = wrap_with_carrier("meet at noon");
//! assert!(!package.image_url.is_empty());
//! assert_eq!(unwrap_carrier(&package).unwrap(), "meet at noon");
//! ```
//!
//! ## Modules
//!
//! - [`cipher`]: the two-stage cipher pipeline, key generation, inverses
//! - [`carrier`]: decoy image selection and transport packaging

pub mod carrier;
pub mod cipher;

// Re-export commonly used types at the crate root
pub use carrier::{
    pick_carrier, pick_carrier_with_rng, unwrap_carrier, wrap_with_carrier,
    wrap_with_carrier_rng, CarrierData, CarrierPackage, IMAGE_POOL,
};
pub use cipher::{decrypt, encrypt, encrypt_with_rng, CipherError, EncryptionResult};
