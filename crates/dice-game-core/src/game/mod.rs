//! Game orchestration: parties, events, capability traits, and the
//! turn state machine.

mod session;
mod traits;
mod types;

pub use session::DiceGame;
pub use traits::{Prompt, View};
pub use types::{GameEvent, GameOutcome, Player};
