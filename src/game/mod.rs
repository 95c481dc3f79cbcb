//! Game session and state machine.

use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::HandView;
use crate::view::GameView;

mod actions;
mod dealer;
pub mod state;

pub use state::{GameStatus, RoundOutcome};

/// Starting balance for a fresh session.
pub const DEFAULT_BALANCE: u32 = 1000;

/// A single-player blackjack session.
///
/// Owns the deck, both hands, and the bankroll, and drives the round state
/// machine. The caller must serialize actions; the engine has no internal
/// parallelism, only the one deferred continuation armed by a double down
/// (see [`Game::resolve_auto_stand`]).
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards remaining in the current round's shoe.
    deck: Deck,
    /// The player's cards, in deal order.
    player_cards: Vec<Card>,
    /// The dealer's cards, in deal order. The second card is the hole card.
    dealer_cards: Vec<Card>,
    /// Chips available to bet.
    balance: u32,
    /// Stake escrowed for the current round.
    bet: u32,
    /// Current status of the state machine.
    status: GameStatus,
    /// Outcome of the last settled round.
    outcome: Option<RoundOutcome>,
    /// Whether double down is offered (first decision point only).
    can_double: bool,
    /// Whether the opening pair shares a rank. Never wired to an action.
    can_split: bool,
    /// Whether a post-double auto-stand is waiting to be resolved.
    auto_stand_pending: bool,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Cosmetic delay the presentation layer should wait after a successful
    /// double down before calling [`Game::resolve_auto_stand`], so the drawn
    /// card can animate. Carries no game-logic meaning and is not observable
    /// in the settled state.
    pub const AUTO_STAND_DELAY: Duration = Duration::from_millis(500);

    /// Creates a session with the given seed and the default starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{DEFAULT_BALANCE, Game};
    ///
    /// let game = Game::new(42);
    /// assert_eq!(game.balance(), DEFAULT_BALANCE);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_balance(seed, DEFAULT_BALANCE)
    }

    /// Creates a session with an explicit starting balance.
    #[must_use]
    pub fn with_balance(seed: u64, balance: u32) -> Self {
        Self {
            deck: Deck::standard(),
            player_cards: Vec::new(),
            dealer_cards: Vec::new(),
            balance,
            bet: 0,
            status: GameStatus::Betting,
            outcome: None,
            can_double: false,
            can_split: false,
            auto_stand_pending: false,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the player's evaluated hand.
    #[must_use]
    pub fn player_hand(&self) -> HandView {
        HandView::of(&self.player_cards)
    }

    /// Returns the dealer's evaluated hand.
    ///
    /// While the hole card is face down it is excluded from the value, so the
    /// view shows only what the player is entitled to see.
    #[must_use]
    pub fn dealer_hand(&self) -> HandView {
        HandView::of(&self.dealer_cards)
    }

    /// Returns the chips available to bet.
    #[must_use]
    pub const fn balance(&self) -> u32 {
        self.balance
    }

    /// Returns the stake escrowed for the current round.
    ///
    /// The field keeps its last value through a [`Game::reset`] until the
    /// next deal overwrites it.
    #[must_use]
    pub const fn bet(&self) -> u32 {
        self.bet
    }

    /// Returns the current status of the state machine.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the outcome of the last settled round, if any.
    #[must_use]
    pub const fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    /// Returns whether double down is currently offered.
    #[must_use]
    pub const fn can_double(&self) -> bool {
        self.can_double
    }

    /// Returns whether the opening pair shares a rank.
    ///
    /// Advertised for display only; the engine has no split action.
    #[must_use]
    pub const fn can_split(&self) -> bool {
        self.can_split
    }

    /// Returns whether a post-double auto-stand is waiting to be resolved.
    #[must_use]
    pub const fn auto_stand_pending(&self) -> bool {
        self.auto_stand_pending
    }

    /// Returns the number of cards remaining in the round's deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns a snapshot of the read model for the presentation layer.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView {
            player: self.player_hand(),
            dealer: self.dealer_hand(),
            balance: self.balance,
            bet: self.bet,
            status: self.status,
            outcome: self.outcome,
            can_double: self.can_double,
            can_split: self.can_split,
        }
    }

    /// Clears the table for the next bet.
    ///
    /// Both hands, the outcome, the eligibility flags, and any pending
    /// auto-stand are discarded. Balance and the last bet are left untouched;
    /// reset never refunds.
    pub fn reset(&mut self) {
        self.player_cards.clear();
        self.dealer_cards.clear();
        self.status = GameStatus::Betting;
        self.outcome = None;
        self.can_double = false;
        self.can_split = false;
        self.auto_stand_pending = false;
    }

    /// Turns the dealer's hole card face up.
    pub(crate) fn reveal_hole(&mut self) {
        for card in &mut self.dealer_cards {
            card.reveal();
        }
    }

    /// Evaluates the dealer's hand as if the hole card were face up.
    ///
    /// The masked evaluator can never flag a dealer natural (one visible card
    /// is not two), so the deal-time blackjack check peeks at the hole card.
    pub(crate) fn dealer_hand_peeked(&self) -> HandView {
        let mut cards = self.dealer_cards.clone();
        for card in &mut cards {
            card.reveal();
        }
        HandView::of(&cards)
    }
}
