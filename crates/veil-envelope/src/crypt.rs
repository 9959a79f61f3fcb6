//! Top-level orchestration: password in, envelope out, and back again

use std::sync::Arc;

use secrecy::SecretString;
use tracing::debug;

use crate::cipher;
use crate::envelope::Envelope;
use crate::error::EnvelopeResult;
use crate::kdf::{self, KdfParams};
use crate::provider::{CryptoProvider, OsProvider};

/// Plaintext input to [`EnvelopeCrypto::encrypt`].
///
/// Text converts to its UTF-8 bytes once, here at the boundary, instead of
/// ad hoc branching inside the pipeline.
#[derive(Debug, Clone, Copy)]
pub enum Plaintext<'a> {
    Bytes(&'a [u8]),
    Text(&'a str),
}

impl Plaintext<'_> {
    fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Bytes(bytes) => bytes,
            Self::Text(text) => text.as_bytes(),
        }
    }
}

impl<'a> From<&'a [u8]> for Plaintext<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Plaintext<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Plaintext<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for Plaintext<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

/// The envelope crypto core: KDF, cipher, and codec behind two operations.
///
/// Owns the injected [`CryptoProvider`] capability and the KDF parameters.
/// Methods take `&self` and share no mutable state, so one instance may
/// drive any number of parallel operations. The PBKDF2 step is CPU-bound;
/// callers batch-encrypting many payloads should spread calls over worker
/// threads.
#[derive(Clone)]
pub struct EnvelopeCrypto {
    provider: Arc<dyn CryptoProvider>,
    params: KdfParams,
}

impl EnvelopeCrypto {
    /// Construct with the OS randomness source, probing it once.
    ///
    /// Fails with [`crate::EnvelopeError::CryptoUnavailable`] when the
    /// runtime has no secure entropy source.
    pub fn new() -> EnvelopeResult<Self> {
        Ok(Self::with_provider(Arc::new(OsProvider::probe()?)))
    }

    /// Construct with a caller-supplied provider and default KDF parameters.
    pub fn with_provider(provider: Arc<dyn CryptoProvider>) -> Self {
        Self::with_params(provider, KdfParams::default())
    }

    /// Construct with a caller-supplied provider and KDF parameters.
    pub fn with_params(provider: Arc<dyn CryptoProvider>, params: KdfParams) -> Self {
        Self { provider, params }
    }

    /// Encrypt a payload under `password`, producing a fresh envelope.
    ///
    /// Draws a fresh salt and a fresh nonce every call: two encryptions of
    /// identical input never produce identical envelopes.
    pub fn encrypt<'a>(
        &self,
        plaintext: impl Into<Plaintext<'a>>,
        password: &SecretString,
    ) -> EnvelopeResult<Envelope> {
        let plaintext = plaintext.into();
        let bytes = plaintext.as_bytes();

        let (key, salt) = kdf::derive_key(password, None, &self.params, self.provider.as_ref())?;
        let (ciphertext, nonce) = cipher::seal(bytes, &key, None, self.provider.as_ref())?;

        debug!(
            plaintext_len = bytes.len(),
            ciphertext_len = ciphertext.len(),
            "sealed envelope"
        );

        Ok(Envelope {
            ciphertext,
            nonce,
            salt,
        })
    }

    /// Decrypt an envelope with `password`, returning the original bytes.
    ///
    /// Re-derives the key from the stored salt, then verifies and opens.
    /// Wrong password and corrupted data both surface as
    /// [`crate::EnvelopeError::AuthenticationFailed`], deliberately
    /// indistinguishable. No retry: the same inputs cannot succeed twice.
    pub fn decrypt(&self, envelope: &Envelope, password: &SecretString) -> EnvelopeResult<Vec<u8>> {
        let (key, _) = kdf::derive_key(
            password,
            Some(&envelope.salt),
            &self.params,
            self.provider.as_ref(),
        )?;
        let plaintext = cipher::open(&envelope.ciphertext, &key, &envelope.nonce)?;

        debug!(
            ciphertext_len = envelope.ciphertext.len(),
            plaintext_len = plaintext.len(),
            "opened envelope"
        );

        Ok(plaintext)
    }

    /// Encrypt straight to the JSON transport form.
    pub fn encrypt_to_text<'a>(
        &self,
        plaintext: impl Into<Plaintext<'a>>,
        password: &SecretString,
    ) -> EnvelopeResult<String> {
        self.encrypt(plaintext, password)?.to_json()
    }

    /// Parse the JSON transport form and decrypt it.
    pub fn decrypt_from_text(&self, text: &str, password: &SecretString) -> EnvelopeResult<Vec<u8>> {
        let envelope = Envelope::from_json(text)?;
        self.decrypt(&envelope, password)
    }
}
