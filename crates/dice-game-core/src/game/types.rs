//! Game value types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dice::Die;

/// A party in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// Get the other party
    pub fn opponent(&self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "you"),
            Player::Computer => write!(f, "computer"),
        }
    }
}

/// Final verdict of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    HumanWins,
    ComputerWins,
    Tie,
}

impl GameOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameOutcome::HumanWins => "you win",
            GameOutcome::ComputerWins => "computer wins",
            GameOutcome::Tie => "tie",
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Announcements the orchestrator emits as the turn sequence advances.
/// The view renders them; tests record them.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    /// The first-move exchange is about to run. The view should
    /// disclose the mapping: result 1 means the human picks first.
    DecidingFirstMove,
    FirstMove { first: Player },
    DieChosen { by: Player, die: Die },
    RollBegins { roller: Player },
    Rolled { roller: Player, face: i64 },
    Finished {
        outcome: GameOutcome,
        human_face: i64,
        computer_face: i64,
    },
}
