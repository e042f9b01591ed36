//! Keyed commitment digest for the commit-reveal scheme.

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha3::Sha3_256;
use std::fmt;

use super::Secret;

type HmacSha3 = Hmac<Sha3_256>;

/// Commitment = HMAC-SHA3-256(key = secret, message = decimal value)
///
/// Published before the counterparty's choice is solicited; binds the
/// committed value so any post-hoc change fails re-verification.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commitment([u8; 32]);

impl Commitment {
    /// Commit to a value under the given secret.
    pub fn new(value: u32, secret: &Secret) -> Self {
        let mut mac = HmacSha3::new_from_slice(secret.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(value.to_string().as_bytes());
        let digest: [u8; 32] = mac.finalize().into_bytes().into();
        Self(digest)
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify that the given value and secret produce this commitment
    pub fn verify(&self, value: u32, secret: &Secret) -> bool {
        *self == Self::new(value, secret)
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
