use crate::hand::HandView;

use super::{Game, GameStatus, RoundOutcome};

/// The dealer draws until reaching this total, soft or hard.
const DEALER_STAND_TOTAL: u8 = 17;

/// Stake plus 3:2 winnings, floored on odd stakes. Saturates at extreme
/// stakes rather than wrapping.
pub(super) const fn blackjack_payout(bet: u32) -> u32 {
    bet.saturating_mul(2).saturating_add(bet / 2)
}

impl Game {
    /// Plays out the dealer's hand and settles the round.
    ///
    /// Shared by `stand` and the post-double auto-stand so the settlement
    /// ladder exists exactly once. The dealer reveals the hole card and draws
    /// while under 17, stopping at the first total of 17 or more regardless
    /// of softness.
    pub(super) fn play_dealer_and_settle(&mut self) {
        self.status = GameStatus::DealerTurn;
        self.reveal_hole();

        while HandView::of(&self.dealer_cards).value < DEALER_STAND_TOTAL {
            let card = self.deck.deal(false);
            self.dealer_cards.push(card);
        }

        let dealer = HandView::of(&self.dealer_cards);
        let player = HandView::of(&self.player_cards);

        let (outcome, payout) = if dealer.is_bust {
            (RoundOutcome::PlayerWin, self.bet.saturating_mul(2))
        } else if player.value > dealer.value {
            (RoundOutcome::PlayerWin, self.bet.saturating_mul(2))
        } else if player.value < dealer.value {
            (RoundOutcome::DealerWin, 0)
        } else {
            (RoundOutcome::Push, self.bet)
        };

        self.balance = self.balance.saturating_add(payout);
        self.status = GameStatus::RoundOver;
        self.outcome = Some(outcome);
    }
}
