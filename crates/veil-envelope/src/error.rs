use thiserror::Error;

pub type EnvelopeResult<T> = Result<T, EnvelopeError>;

/// The complete error surface of the envelope core.
///
/// Wrong password and corrupted data are deliberately indistinguishable:
/// `AuthenticationFailed` carries no detail, so no error-message oracle
/// exists for an attacker probing passwords.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The runtime is missing a secure randomness source or cryptographic
    /// primitive. Fatal to the calling operation; not retryable in-process.
    #[error("cryptographic provider unavailable: {0}")]
    CryptoUnavailable(String),

    /// A serialized envelope failed structural validation: invalid JSON,
    /// missing or null field, invalid base64, or a wrong decoded length.
    /// Indicates corrupted or untrusted input, not a password problem.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// AEAD tag verification failed: wrong password, corrupted or truncated
    /// ciphertext, or a modified nonce. One message for every cause.
    #[error("authentication failed: wrong password or corrupted data")]
    AuthenticationFailed,
}
