//! Error types for session actions.

use thiserror::Error;

/// Errors returned by guarded session actions.
///
/// Guards run before any mutation, so a failed action leaves the session
/// unchanged. Callers that only ever present valid actions may discard the
/// error and observe a plain no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Action invoked in a status that does not permit it.
    #[error("invalid game status for this action")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet (or the additional double-down stake) exceeds the balance.
    #[error("insufficient balance")]
    InsufficientFunds,
    /// Double down is not available on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// A deferred auto-stand is pending; the round must settle first.
    #[error("auto-stand is pending")]
    AutoStandPending,
}
