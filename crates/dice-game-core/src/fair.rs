//! The fair number protocol ("mutual coin flip").
//!
//! Two untrusting parties jointly produce a uniform integer in
//! `[0, range)`:
//!
//! 1. The system draws `random_value` uniformly and publishes
//!    `HMAC-SHA3-256(secret, random_value)` before asking for anything.
//! 2. The counterparty picks `selected` in the same range.
//! 3. `result = (selected + random_value) mod range`.
//! 4. `secret` and `random_value` are revealed so the counterparty can
//!    recompute the digest and confirm nothing changed after step 1.
//!
//! Adding a uniform independent value modulo the range yields a uniform
//! result whatever distribution `selected` has, and the published
//! digest binds `random_value` before `selected` is known.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::crypto::{Commitment, Secret};
use crate::error::GameError;

/// Everything disclosed after an exchange, enough to re-verify the
/// published commitment independently.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Reveal {
    pub range: u32,
    pub secret: Secret,
    pub random_value: u32,
    pub selected: u32,
    pub result: u32,
}

impl Reveal {
    /// Recompute the commitment from the revealed secret and value.
    pub fn commitment(&self) -> Commitment {
        Commitment::new(self.random_value, &self.secret)
    }

    /// Check the revealed values against the commitment published
    /// before the counterparty chose.
    pub fn verify(&self, published: &Commitment) -> bool {
        self.commitment() == *published
    }
}

/// Result of one protocol invocation.
#[derive(Clone, Debug)]
pub struct FairOutcome {
    pub result: u32,
    pub reveal: Reveal,
}

/// Randomness facade for a game: the commit-reveal exchange for
/// adversarial decisions and a plain uniform draw for unilateral ones.
///
/// Generic over the RNG so tests can inject a seeded [`rand::rngs::StdRng`];
/// the `CryptoRng` bound keeps non-cryptographic generators out.
pub struct FairRandom<R: RngCore + CryptoRng> {
    rng: R,
}

impl FairRandom<OsRng> {
    /// Use the operating system's CSPRNG. Entropy failure aborts; there
    /// is deliberately no weaker fallback.
    pub fn system() -> Self {
        Self { rng: OsRng }
    }
}

impl<R: RngCore + CryptoRng> FairRandom<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Plain unbiased draw in `[0, range)` for unilateral internal
    /// choices (e.g. the computer picking its own die). No commitment:
    /// there is no counterparty input to protect against.
    pub fn uniform(&mut self, range: u32) -> u32 {
        debug_assert!(range >= 1);
        self.rng.gen_range(0..range)
    }

    /// Run one commit-reveal exchange.
    ///
    /// `choose` receives the published commitment and must solicit the
    /// counterparty's number in `[0, range)`; enforcing that range is
    /// the solicitor's job. A fresh secret is drawn per invocation and
    /// never reused.
    pub fn generate<F>(&mut self, range: u32, choose: F) -> Result<FairOutcome, GameError>
    where
        F: FnOnce(&Commitment) -> Result<u32, GameError>,
    {
        if range == 0 {
            return Err(GameError::EmptyRange);
        }

        let secret = Secret::random_with(&mut self.rng);
        let random_value = self.rng.gen_range(0..range);
        let commitment = Commitment::new(random_value, &secret);
        tracing::debug!(range, %commitment, "commitment published");

        let selected = choose(&commitment)?;
        debug_assert!(selected < range, "solicitor must enforce the range");

        let result = ((u64::from(selected) + u64::from(random_value)) % u64::from(range)) as u32;
        tracing::debug!(selected, random_value, result, "exchange complete");

        Ok(FairOutcome {
            result,
            reveal: Reveal {
                range,
                secret,
                random_value,
                selected,
                result,
            },
        })
    }
}
