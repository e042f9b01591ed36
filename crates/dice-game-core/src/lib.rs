//! Dice Game Core Library
//!
//! This crate provides the dice model, the pairwise win-probability
//! engine, the commit-reveal fairness protocol, and the game
//! orchestration for a provably-fair non-transitive dice game.
//!
//! All user interaction goes through the [`game::Prompt`] and
//! [`game::View`] capability traits; the library performs no terminal
//! I/O of its own.

pub mod crypto;
pub mod dice;
pub mod error;
pub mod fair;
pub mod game;
pub mod probability;
pub mod validate;

pub use crypto::{Commitment, Secret};
pub use dice::{Die, DicePool};
pub use error::GameError;
pub use fair::{FairOutcome, FairRandom, Reveal};
pub use game::{DiceGame, GameEvent, GameOutcome, Player, Prompt, View};
pub use probability::{probability_matrix, win_probability};
pub use validate::{parse_dice, ValidationError};
