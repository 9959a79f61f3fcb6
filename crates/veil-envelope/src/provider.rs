//! Secure-random capability, injected into the core rather than reached for
//! as ambient global state.
//!
//! [`OsProvider::probe`] checks the OS randomness source once at construction;
//! downstream operations trust the probed provider and surface any later
//! failure as [`EnvelopeError::CryptoUnavailable`]. Tests substitute their own
//! [`CryptoProvider`] to make salt and nonce generation deterministic.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{EnvelopeError, EnvelopeResult};

/// Source of cryptographically secure random bytes.
///
/// Nonces and salts come exclusively from this capability. A non-CSPRNG
/// implementation is a correctness defect, not a style choice.
pub trait CryptoProvider: Send + Sync {
    /// Fill `buf` entirely with secure random bytes.
    fn fill_bytes(&self, buf: &mut [u8]) -> EnvelopeResult<()>;
}

/// Provider backed by the operating system CSPRNG.
pub struct OsProvider {
    _probed: (),
}

impl OsProvider {
    /// Probe the OS randomness source once.
    ///
    /// Fails with [`EnvelopeError::CryptoUnavailable`] if the runtime has no
    /// usable entropy source; there is no silent fallback to a weaker one.
    pub fn probe() -> EnvelopeResult<Self> {
        let mut sample = [0u8; 16];
        OsRng
            .try_fill_bytes(&mut sample)
            .map_err(|e| EnvelopeError::CryptoUnavailable(format!("OS randomness source: {e}")))?;
        Ok(Self { _probed: () })
    }
}

impl CryptoProvider for OsProvider {
    fn fill_bytes(&self, buf: &mut [u8]) -> EnvelopeResult<()> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| EnvelopeError::CryptoUnavailable(format!("OS randomness source: {e}")))
    }
}
