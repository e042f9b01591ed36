//! Cryptographic primitives for the fairness protocol.
//!
//! This module provides:
//! - Secret: the per-invocation HMAC key
//! - Commitment: the keyed digest binding a value before disclosure

mod commitment;
mod secret;

pub use commitment::Commitment;
pub use secret::{Secret, SECRET_LEN};
