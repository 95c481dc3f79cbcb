//! Read model exposed to the presentation layer.

use crate::game::{GameStatus, RoundOutcome};
use crate::hand::HandView;

/// Snapshot of everything the table renderer needs.
///
/// Produced by [`crate::Game::view`]; holds no live references into the
/// session, so the shell may keep it across frames.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameView {
    /// The player's evaluated hand.
    pub player: HandView,
    /// The dealer's evaluated hand; the hole card stays masked until revealed.
    pub dealer: HandView,
    /// Chips available to bet.
    pub balance: u32,
    /// Stake escrowed for the current round. Retains its last value through a
    /// reset, for display, until the next deal overwrites it.
    pub bet: u32,
    /// Current status of the state machine.
    pub status: GameStatus,
    /// Outcome of the last settled round, if any.
    pub outcome: Option<RoundOutcome>,
    /// Whether double down is currently offered.
    pub can_double: bool,
    /// Whether the opening pair shares a rank. Advertised only; splitting is
    /// not implemented.
    pub can_split: bool,
}
