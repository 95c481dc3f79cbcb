//! Pure hand evaluation.

use crate::card::Card;

pub(crate) const fn card_value(rank: u8) -> u8 {
    match rank {
        1 => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

/// A derived view of a hand.
///
/// Never stored by the engine; recomputed from the authoritative card list
/// after every mutation. Hidden cards are carried in `cards` for display but
/// excluded from `value` and from the two-card blackjack check.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandView {
    /// Cards in the hand, hidden ones included.
    pub cards: Vec<Card>,
    /// Best total of the visible cards, with aces softened as needed.
    pub value: u8,
    /// Whether the total still exceeds 21 after every ace reduction.
    pub is_bust: bool,
    /// Whether an ace is still counted as 11.
    pub is_soft: bool,
    /// Whether exactly two visible cards total 21.
    pub is_blackjack: bool,
}

impl HandView {
    /// Evaluates a card list.
    ///
    /// Aces are counted as 11 where possible without busting, otherwise as 1;
    /// each ace softens at most once.
    #[must_use]
    pub fn of(cards: &[Card]) -> Self {
        let mut value: u8 = 0;
        let mut aces: u8 = 0;
        let mut visible: usize = 0;

        for card in cards {
            if card.hidden {
                continue;
            }
            visible += 1;
            if card.rank == 1 {
                aces += 1;
            }
            value = value.saturating_add(card_value(card.rank));
        }

        while value > 21 && aces > 0 {
            value -= 10;
            aces -= 1;
        }

        Self {
            cards: cards.to_vec(),
            value,
            is_bust: value > 21,
            is_soft: aces > 0 && value <= 21,
            is_blackjack: visible == 2 && value == 21,
        }
    }

    /// Returns the number of cards in the hand, hidden ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
