//! veil-envelope: password-based envelope encryption for Veil protected pages
//!
//! Encrypt pipeline: plaintext → PBKDF2-HMAC-SHA256 (fresh 16-byte salt) →
//! AES-256-GCM seal (fresh 24-byte nonce) → `{ ciphertext, nonce, salt }` →
//! JSON with base64 fields.
//!
//! Decrypt pipeline: parse JSON → re-derive the key from the stored salt →
//! verify the tag and open. Any tag mismatch (wrong password, corrupted or
//! truncated ciphertext, modified nonce) fails with a single undifferentiated
//! [`EnvelopeError::AuthenticationFailed`]; structural parse failures are the
//! separate [`EnvelopeError::MalformedEnvelope`] so callers can tell corrupted
//! input apart from a password problem.
//!
//! Every operation is a pure function of its inputs plus entropy drawn from an
//! injected [`CryptoProvider`]; there are no key caches, nonce counters, or
//! other hidden shared state, so operations are safe to run fully in parallel.

pub mod cipher;
pub mod crypt;
pub mod envelope;
pub mod kdf;
pub mod provider;

mod error;
pub use error::{EnvelopeError, EnvelopeResult};

pub use cipher::{open, seal};
pub use crypt::{EnvelopeCrypto, Plaintext};
pub use envelope::Envelope;
pub use kdf::{derive_key, DerivedKey, KdfParams};
pub use provider::{CryptoProvider, OsProvider};

/// Size of a derived AES-256 key in bytes.
pub const KEY_SIZE: usize = 32;

/// Size of the KDF salt in bytes.
pub const SALT_SIZE: usize = 16;

/// Size of the stored envelope nonce in bytes.
///
/// Only the leading [`IV_SIZE`] bytes feed the cipher; the full field is
/// bound as associated data so every stored bit is tamper-evident.
pub const NONCE_SIZE: usize = 24;

/// Size of the AES-GCM initialization vector consumed from the nonce.
pub const IV_SIZE: usize = 12;

/// Size of the GCM authentication tag appended to the ciphertext.
pub const TAG_SIZE: usize = 16;

/// Published PBKDF2-HMAC-SHA256 iteration count.
///
/// The envelope format carries no KDF parameter block, so encrypting and
/// decrypting sides must share this value.
pub const PBKDF2_ITERATIONS: u32 = 100_000;
