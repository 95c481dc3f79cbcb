//! Session status and outcome types.

/// Session status.
///
/// Transitions run `Betting → Playing → DealerTurn → RoundOver`, with
/// [`crate::Game::reset`] returning to `Betting`. A round that settles at the
/// deal (a natural) or on a player bust skips `DealerTurn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// Accepting a bet for the next round.
    Betting,
    /// Waiting for player actions.
    Playing,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has settled.
    RoundOver,
}

/// Outcome of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundOutcome {
    /// Player was dealt a natural; pays 3:2.
    PlayerBlackjack,
    /// Dealer was dealt a natural; the stake is forfeited.
    DealerBlackjack,
    /// Player outscored the dealer or the dealer busted; pays even money.
    PlayerWin,
    /// Dealer outscored the player; the stake is forfeited.
    DealerWin,
    /// Tie; the stake is returned.
    Push,
    /// Player busted; the stake is forfeited.
    PlayerBust,
}
