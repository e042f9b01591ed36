//! Per-invocation secret key for the commitment scheme.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a secret in bytes.
pub const SECRET_LEN: usize = 32;

/// HMAC key for the commitment scheme.
///
/// Generated fresh for every protocol invocation and revealed to the
/// counterparty afterwards so the commitment can be re-verified.
#[derive(Clone, Serialize, Deserialize)]
pub struct Secret([u8; SECRET_LEN]);

impl Secret {
    /// Create a new random secret from the operating system's CSPRNG.
    pub fn random() -> Self {
        Self::random_with(&mut OsRng)
    }

    /// Create a new random secret from the given CSPRNG.
    pub fn random_with<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; SECRET_LEN];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; SECRET_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; SECRET_LEN] {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
