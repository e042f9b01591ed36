//! Capability traits the orchestrator depends on.
//!
//! Terminal I/O lives behind these seams so the game can run against a
//! scripted prompt and a recording view in tests.

use crate::crypto::Commitment;
use crate::dice::Die;
use crate::error::GameError;
use crate::fair::Reveal;
use crate::game::GameEvent;

/// Interactive number solicitation.
///
/// Implementations block until a valid number in `[0, range)` arrives,
/// re-prompting on invalid input. Recognized command tokens (quit,
/// redisplay the table) are handled inside the loop; quit surfaces as
/// [`GameError::Cancelled`].
pub trait Prompt {
    fn prompt_number(&mut self, message: &str, range: u32) -> Result<u32, GameError>;
}

/// Rendering surface for everything the game wants shown.
pub trait View {
    /// Full pairwise win-probability table over the given dice.
    fn show_probability_table(&mut self, dice: &[Die]);

    /// Numbered menu of the dice still available for selection.
    fn show_dice_menu(&mut self, pool: &[Die]);

    /// Numbered menu of a die's faces ahead of a roll.
    fn show_roll_menu(&mut self, die: &Die);

    /// Commitment digest published before the user's pick is solicited.
    fn show_commitment(&mut self, range: u32, commitment: &Commitment);

    /// Post-exchange disclosure: secret, random value, and arithmetic.
    fn show_reveal(&mut self, reveal: &Reveal);

    /// Turn-sequence announcement.
    fn on_event(&mut self, event: &GameEvent);
}
