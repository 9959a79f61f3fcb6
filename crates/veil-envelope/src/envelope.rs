//! Envelope type and its JSON transport codec
//!
//! Wire shape (UTF-8 text, each field independently base64-encoded):
//!
//! ```text
//! { "ciphertext": "<base64>", "nonce": "<base64>", "salt": "<base64>" }
//! ```
//!
//! Parsing checks structure only: JSON syntax, field presence, base64
//! validity, and decoded lengths. Ciphertext authenticity is deferred to the
//! cipher at decrypt time; the two failure stages stay distinct.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{EnvelopeError, EnvelopeResult};
use crate::{NONCE_SIZE, SALT_SIZE};

/// One encrypted unit: ciphertext with its tag, the nonce, and the KDF salt.
///
/// The three fields are created atomically by one encrypt call and travel
/// together; splitting them breaks decryptability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Ciphertext with the 16-byte authentication tag appended.
    pub ciphertext: Vec<u8>,
    /// Full stored nonce; round-trips preserve all 24 bytes bit-for-bit.
    pub nonce: [u8; NONCE_SIZE],
    /// KDF salt; random per encryption, not secret.
    pub salt: [u8; SALT_SIZE],
}

#[derive(Serialize, Deserialize)]
struct WireEnvelope {
    ciphertext: String,
    nonce: String,
    salt: String,
}

impl Envelope {
    /// Serialize to the JSON transport form.
    pub fn to_json(&self) -> EnvelopeResult<String> {
        let wire = WireEnvelope {
            ciphertext: STANDARD.encode(&self.ciphertext),
            nonce: STANDARD.encode(self.nonce),
            salt: STANDARD.encode(self.salt),
        };
        serde_json::to_string(&wire)
            .map_err(|e| EnvelopeError::MalformedEnvelope(format!("envelope encoding: {e}")))
    }

    /// Parse the JSON transport form back into an envelope.
    ///
    /// Fails with [`EnvelopeError::MalformedEnvelope`] on invalid JSON, a
    /// missing or null field, invalid base64, or a salt/nonce of the wrong
    /// decoded length.
    pub fn from_json(text: &str) -> EnvelopeResult<Self> {
        let wire: WireEnvelope = serde_json::from_str(text)
            .map_err(|e| EnvelopeError::MalformedEnvelope(format!("invalid envelope JSON: {e}")))?;

        let ciphertext = decode_field("ciphertext", &wire.ciphertext)?;
        let nonce = decode_fixed::<NONCE_SIZE>("nonce", &wire.nonce)?;
        let salt = decode_fixed::<SALT_SIZE>("salt", &wire.salt)?;

        Ok(Self {
            ciphertext,
            nonce,
            salt,
        })
    }
}

fn decode_field(name: &str, value: &str) -> EnvelopeResult<Vec<u8>> {
    STANDARD.decode(value).map_err(|e| {
        EnvelopeError::MalformedEnvelope(format!("field `{name}` is not valid base64: {e}"))
    })
}

fn decode_fixed<const N: usize>(name: &str, value: &str) -> EnvelopeResult<[u8; N]> {
    let bytes = decode_field(name, value)?;
    let len = bytes.len();
    bytes.try_into().map_err(|_| {
        EnvelopeError::MalformedEnvelope(format!(
            "field `{name}` must decode to {N} bytes, got {len}"
        ))
    })
}
