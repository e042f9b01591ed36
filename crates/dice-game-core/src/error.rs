//! In-game error taxonomy.

use thiserror::Error;

/// Errors that can end a running game.
///
/// [`GameError::Cancelled`] is the graceful path: the user asked to
/// quit, and the whole game unwinds through it. Startup validation has
/// its own taxonomy in [`crate::validate::ValidationError`].
#[derive(Debug, Error)]
pub enum GameError {
    /// The user issued the quit command (or closed the input stream).
    #[error("cancelled by the user")]
    Cancelled,

    /// The fairness protocol was invoked with an empty range.
    #[error("range must be at least 1")]
    EmptyRange,

    /// The prompt collaborator failed to read or write the terminal.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Whether this error is a graceful user-initiated exit.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, GameError::Cancelled)
    }
}
