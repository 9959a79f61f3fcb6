//! AES-256-GCM seal/open for envelope payloads
//!
//! Sealed layout: `[N bytes: ciphertext][16 bytes: GCM tag]`. The 24-byte
//! envelope nonce is carried separately: its leading 12 bytes are the GCM IV
//! and the full field is bound as AAD, so a flip of any stored nonce bit,
//! leading or trailing, fails authentication along with the tag.

use aes_gcm::{
    aead::{Aead, KeyInit, Payload},
    Aes256Gcm, Nonce,
};

use crate::error::{EnvelopeError, EnvelopeResult};
use crate::kdf::DerivedKey;
use crate::provider::CryptoProvider;
use crate::{IV_SIZE, NONCE_SIZE};

/// Seal `plaintext` under `key`, generating a fresh 24-byte nonce from
/// `provider` when none is supplied.
///
/// Pure given its inputs: the same plaintext, key, and nonce always produce
/// the same ciphertext and tag. Randomness enters only through nonce and salt
/// generation upstream, never inside the cipher step.
pub fn seal(
    plaintext: &[u8],
    key: &DerivedKey,
    nonce: Option<[u8; NONCE_SIZE]>,
    provider: &dyn CryptoProvider,
) -> EnvelopeResult<(Vec<u8>, [u8; NONCE_SIZE])> {
    let nonce_bytes = match nonce {
        Some(nonce) => nonce,
        None => {
            let mut fresh = [0u8; NONCE_SIZE];
            provider.fill_bytes(&mut fresh)?;
            fresh
        }
    };

    let cipher = Aes256Gcm::new(key.as_bytes().into());
    let iv = Nonce::from_slice(&nonce_bytes[..IV_SIZE]);

    let ciphertext = cipher
        .encrypt(
            iv,
            Payload {
                msg: plaintext,
                aad: &nonce_bytes[..],
            },
        )
        .map_err(|_| {
            EnvelopeError::CryptoUnavailable("AES-256-GCM rejected the seal input".to_string())
        })?;

    Ok((ciphertext, nonce_bytes))
}

/// Open `ciphertext` under `key` and `nonce`, verifying the tag.
///
/// Fails with [`EnvelopeError::AuthenticationFailed`] on any mismatch: wrong
/// key (wrong password), corrupted or truncated ciphertext, or a modified
/// nonce. No partial plaintext is ever returned.
pub fn open(
    ciphertext: &[u8],
    key: &DerivedKey,
    nonce: &[u8; NONCE_SIZE],
) -> EnvelopeResult<Vec<u8>> {
    let cipher = Aes256Gcm::new(key.as_bytes().into());
    let iv = Nonce::from_slice(&nonce[..IV_SIZE]);

    cipher
        .decrypt(
            iv,
            Payload {
                msg: ciphertext,
                aad: &nonce[..],
            },
        )
        .map_err(|_| EnvelopeError::AuthenticationFailed)
}
