//! Key derivation: PBKDF2-HMAC-SHA256 password → envelope key

use pbkdf2::pbkdf2_hmac;
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use zeroize::Zeroize;

use crate::error::EnvelopeResult;
use crate::provider::CryptoProvider;
use crate::{KEY_SIZE, PBKDF2_ITERATIONS, SALT_SIZE};

/// A 256-bit envelope key derived from a password.
///
/// Ephemeral: held only for the duration of one seal or open, never persisted
/// or serialized. Zeroized on drop to prevent secrets lingering in memory.
#[derive(Clone)]
pub struct DerivedKey {
    bytes: [u8; KEY_SIZE],
}

impl DerivedKey {
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// PBKDF2 parameters.
///
/// The iteration count is a format constant: the envelope stores no KDF
/// parameter block, so both sides of an encrypt/decrypt pair must agree on
/// it. The default is the published [`PBKDF2_ITERATIONS`]; lower values are
/// for tests only.
#[derive(Debug, Clone)]
pub struct KdfParams {
    pub iterations: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: PBKDF2_ITERATIONS,
        }
    }
}

/// Derive a 256-bit key from a password, generating a fresh 16-byte salt from
/// `provider` when none is supplied.
///
/// Same password + same salt deterministically reproduces the same key; the
/// salt travels in the envelope so decryption can re-derive it. The password
/// is used verbatim, with no normalization of case or whitespace.
pub fn derive_key(
    password: &SecretString,
    salt: Option<&[u8; SALT_SIZE]>,
    params: &KdfParams,
    provider: &dyn CryptoProvider,
) -> EnvelopeResult<(DerivedKey, [u8; SALT_SIZE])> {
    let salt = match salt {
        Some(salt) => *salt,
        None => {
            let mut fresh = [0u8; SALT_SIZE];
            provider.fill_bytes(&mut fresh)?;
            fresh
        }
    };

    let mut key = [0u8; KEY_SIZE];
    pbkdf2_hmac::<Sha256>(
        password.expose_secret().as_bytes(),
        &salt,
        params.iterations,
        &mut key,
    );

    Ok((DerivedKey::from_bytes(key), salt))
}
