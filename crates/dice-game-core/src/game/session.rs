//! The game turn state machine.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::cmp::Ordering;
use tracing::debug;

use crate::dice::{Die, DicePool};
use crate::error::GameError;
use crate::fair::{FairOutcome, FairRandom};
use crate::game::{GameEvent, GameOutcome, Player, Prompt, View};

/// One game: probability table, first-move exchange, dice selection,
/// two rolls, verdict.
///
/// Strictly sequential; the only branch is who picks a die first, which
/// reorders the two selection sub-steps. Every random decision (move
/// order and both rolls) goes through the fair number protocol, each
/// invocation with fresh entropy. Quit unwinds the whole sequence as
/// [`GameError::Cancelled`].
pub struct DiceGame<R: RngCore + CryptoRng> {
    pool: DicePool,
    fair: FairRandom<R>,
}

impl DiceGame<OsRng> {
    /// Start a game over the validated dice with the system CSPRNG.
    pub fn new(dice: Vec<Die>) -> Self {
        Self::with_rng(dice, OsRng)
    }
}

impl<R: RngCore + CryptoRng> DiceGame<R> {
    /// Start a game with an injected RNG (deterministic in tests).
    pub fn with_rng(dice: Vec<Die>, rng: R) -> Self {
        Self {
            pool: DicePool::new(dice),
            fair: FairRandom::with_rng(rng),
        }
    }

    /// Drive the game to its verdict.
    pub fn play(
        &mut self,
        prompt: &mut dyn Prompt,
        view: &mut dyn View,
    ) -> Result<GameOutcome, GameError> {
        view.show_probability_table(self.pool.remaining());

        // Fair result 1 means the human picks a die first.
        view.on_event(&GameEvent::DecidingFirstMove);
        let exchange = self.exchange(2, "Select 0 or 1:", prompt, view)?;
        let first = if exchange.result == 1 {
            Player::Human
        } else {
            Player::Computer
        };
        debug!(%first, "first move decided");
        view.on_event(&GameEvent::FirstMove { first });

        let (human_die, computer_die) = match first {
            Player::Human => {
                let human = self.human_pick(prompt, view)?;
                view.on_event(&GameEvent::DieChosen {
                    by: Player::Human,
                    die: human.clone(),
                });
                let computer = self.computer_pick();
                view.on_event(&GameEvent::DieChosen {
                    by: Player::Computer,
                    die: computer.clone(),
                });
                (human, computer)
            }
            Player::Computer => {
                let computer = self.computer_pick();
                view.on_event(&GameEvent::DieChosen {
                    by: Player::Computer,
                    die: computer.clone(),
                });
                let human = self.human_pick(prompt, view)?;
                view.on_event(&GameEvent::DieChosen {
                    by: Player::Human,
                    die: human.clone(),
                });
                (human, computer)
            }
        };
        debug!(%human_die, %computer_die, "dice assigned");

        // Roll order is fixed: the computer rolls first regardless of
        // who picked first.
        let computer_face = self.roll(Player::Computer, &computer_die, prompt, view)?;
        let human_face = self.roll(Player::Human, &human_die, prompt, view)?;

        let outcome = match human_face.cmp(&computer_face) {
            Ordering::Greater => GameOutcome::HumanWins,
            Ordering::Less => GameOutcome::ComputerWins,
            Ordering::Equal => GameOutcome::Tie,
        };
        debug!(%outcome, human_face, computer_face, "game over");
        view.on_event(&GameEvent::Finished {
            outcome,
            human_face,
            computer_face,
        });
        Ok(outcome)
    }

    /// One commit-reveal exchange, with the commitment and the reveal
    /// rendered around the user's pick.
    fn exchange(
        &mut self,
        range: u32,
        message: &str,
        prompt: &mut dyn Prompt,
        view: &mut dyn View,
    ) -> Result<FairOutcome, GameError> {
        let outcome = self.fair.generate(range, |commitment| {
            view.show_commitment(range, commitment);
            prompt.prompt_number(message, range)
        })?;
        view.show_reveal(&outcome.reveal);
        Ok(outcome)
    }

    fn human_pick(
        &mut self,
        prompt: &mut dyn Prompt,
        view: &mut dyn View,
    ) -> Result<Die, GameError> {
        view.show_dice_menu(self.pool.remaining());
        let count = self.pool.len() as u32;
        let message = format!("Select a die in range [0, {}]:", count - 1);
        let index = prompt.prompt_number(&message, count)?;
        Ok(self.pool.take(index as usize))
    }

    /// Unilateral uniform draw over the whole remaining pool.
    fn computer_pick(&mut self) -> Die {
        let index = self.fair.uniform(self.pool.len() as u32);
        self.pool.take(index as usize)
    }

    fn roll(
        &mut self,
        roller: Player,
        die: &Die,
        prompt: &mut dyn Prompt,
        view: &mut dyn View,
    ) -> Result<i64, GameError> {
        view.on_event(&GameEvent::RollBegins { roller });
        view.show_roll_menu(die);
        let range = die.len() as u32;
        let message = format!("Select a value in range [0, {}]:", range - 1);
        let exchange = self.exchange(range, &message, prompt, view)?;
        let face = die.face(exchange.result as usize);
        view.on_event(&GameEvent::Rolled { roller, face });
        Ok(face)
    }
}
