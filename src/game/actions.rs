use crate::card::Card;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::HandView;

use super::dealer::blackjack_payout;
use super::{Game, GameStatus, RoundOutcome};

impl Game {
    fn ensure_playing(&self) -> Result<(), ActionError> {
        if self.status != GameStatus::Playing {
            return Err(ActionError::InvalidState);
        }
        if self.auto_stand_pending {
            return Err(ActionError::AutoStandPending);
        }
        Ok(())
    }

    fn ensure_can_bet(&self, bet: u32) -> Result<(), ActionError> {
        if self.status != GameStatus::Betting {
            return Err(ActionError::InvalidState);
        }
        if bet == 0 {
            return Err(ActionError::ZeroBet);
        }
        if bet > self.balance {
            return Err(ActionError::InsufficientFunds);
        }
        Ok(())
    }

    /// Starts a round with a fresh shuffled deck.
    ///
    /// Escrows the bet (`balance -= bet`), deals player up, dealer up,
    /// player up, dealer hole, and resolves naturals immediately: both
    /// blackjack pushes the stake back, a player natural pays 3:2, a dealer
    /// natural keeps the stake. Otherwise the round stays in
    /// [`GameStatus::Playing`] with double (and the display-only split flag)
    /// offered when the balance still covers a second stake.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is not in [`GameStatus::Betting`],
    /// the bet is zero, or the bet exceeds the balance. The session is
    /// unchanged on error.
    pub fn start_round(&mut self, bet: u32) -> Result<(), ActionError> {
        // Guards run before the shuffle; a rejected bet must not advance the rng.
        self.ensure_can_bet(bet)?;

        let deck = Deck::standard().shuffled(&mut self.rng);
        self.start_round_with_deck(bet, deck)
    }

    /// Starts a round playing the supplied deck instead of shuffling one.
    ///
    /// Cards are dealt from the end of the deck. Intended for deterministic
    /// replays and tests; [`Game::start_round`] is this with a freshly
    /// shuffled standard deck.
    ///
    /// # Errors
    ///
    /// Same guards as [`Game::start_round`].
    pub fn start_round_with_deck(&mut self, bet: u32, deck: Deck) -> Result<(), ActionError> {
        self.ensure_can_bet(bet)?;

        self.deck = deck;
        self.player_cards.clear();
        self.dealer_cards.clear();

        // Fixed deal order: player, dealer up, player, dealer hole.
        let card = self.deck.deal(false);
        self.player_cards.push(card);
        let card = self.deck.deal(false);
        self.dealer_cards.push(card);
        let card = self.deck.deal(false);
        self.player_cards.push(card);
        let card = self.deck.deal(true);
        self.dealer_cards.push(card);

        self.balance -= bet;
        self.bet = bet;
        self.status = GameStatus::Playing;
        self.outcome = None;
        self.can_double = false;
        self.can_split = false;

        let player = self.player_hand();
        let dealer = self.dealer_hand_peeked();

        if player.is_blackjack && dealer.is_blackjack {
            self.reveal_hole();
            self.status = GameStatus::RoundOver;
            self.outcome = Some(RoundOutcome::Push);
            self.balance += bet;
        } else if player.is_blackjack {
            self.reveal_hole();
            self.status = GameStatus::RoundOver;
            self.outcome = Some(RoundOutcome::PlayerBlackjack);
            self.balance = self.balance.saturating_add(blackjack_payout(bet));
        } else if dealer.is_blackjack {
            self.reveal_hole();
            self.status = GameStatus::RoundOver;
            self.outcome = Some(RoundOutcome::DealerBlackjack);
        } else {
            // Both flags require covering a second stake from the post-debit
            // balance.
            self.can_double = bet <= self.balance;
            self.can_split =
                self.player_cards[0].rank == self.player_cards[1].rank && bet <= self.balance;
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Doubling and splitting are no longer offered after a hit. Busting
    /// settles the round immediately with the stake forfeited.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is not in [`GameStatus::Playing`] or
    /// an auto-stand is pending. The session is unchanged on error.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_playing()?;

        let card = self.deck.deal(false);
        self.player_cards.push(card);
        self.can_double = false;
        self.can_split = false;

        if HandView::of(&self.player_cards).is_bust {
            self.status = GameStatus::RoundOver;
            self.outcome = Some(RoundOutcome::PlayerBust);
        }

        Ok(card)
    }

    /// Player action: Stand (end the player's turn).
    ///
    /// Reveals the hole card, lets the dealer draw to 17, and settles the
    /// round.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is not in [`GameStatus::Playing`] or
    /// an auto-stand is pending. The session is unchanged on error.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_playing()?;

        self.can_double = false;
        self.can_split = false;
        self.play_dealer_and_settle();

        Ok(())
    }

    /// Player action: Double down (double the stake, draw one card, stand).
    ///
    /// Debits a second stake and doubles the recorded bet. A bust settles
    /// immediately; otherwise the stand is deferred so the shell can animate
    /// the drawn card for [`Game::AUTO_STAND_DELAY`] before calling
    /// [`Game::resolve_auto_stand`]. While the continuation is pending every
    /// other action is refused; it cannot be cancelled short of a full
    /// [`Game::reset`].
    ///
    /// # Errors
    ///
    /// Returns an error if the session is not in [`GameStatus::Playing`], an
    /// auto-stand is pending, double is not offered (not the first decision
    /// point), or the balance no longer covers the stake. The session is
    /// unchanged on error.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        self.ensure_playing()?;

        if !self.can_double {
            return Err(ActionError::CannotDouble);
        }
        if self.bet > self.balance {
            return Err(ActionError::InsufficientFunds);
        }

        self.balance -= self.bet;
        self.bet = self.bet.saturating_mul(2);

        let card = self.deck.deal(false);
        self.player_cards.push(card);
        self.can_double = false;
        self.can_split = false;

        if HandView::of(&self.player_cards).is_bust {
            self.status = GameStatus::RoundOver;
            self.outcome = Some(RoundOutcome::PlayerBust);
        } else {
            self.auto_stand_pending = true;
        }

        Ok(card)
    }

    /// Runs the deferred stand armed by a successful double down.
    ///
    /// Shares the dealer routine with [`Game::stand`]; the delay before this
    /// call is purely cosmetic and leaves no trace in the settled state.
    ///
    /// # Errors
    ///
    /// Returns an error if no auto-stand is pending.
    pub fn resolve_auto_stand(&mut self) -> Result<(), ActionError> {
        if self.status != GameStatus::Playing || !self.auto_stand_pending {
            return Err(ActionError::InvalidState);
        }

        self.auto_stand_pending = false;
        self.play_dealer_and_settle();

        Ok(())
    }
}
