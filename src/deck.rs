//! Deck construction, shuffling, and dealing.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};

/// An ordered single-shoe deck, consumed from the tail.
///
/// A fresh deck is built and shuffled at the start of every round and never
/// replenished mid-round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards remaining, in order. The tail is the top of the deck.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the 52-card deck in canonical order (suit-major, rank-minor),
    /// all cards face up.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck from an explicit card sequence.
    ///
    /// Cards are dealt from the end of the sequence, so the last card listed
    /// is the first one dealt. Intended for deterministic replays and tests.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns a uniformly shuffled copy of this deck (Fisher–Yates).
    ///
    /// The input deck is left untouched.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Removes and returns the top card (the tail of the sequence),
    /// optionally dealing it face down.
    ///
    /// # Panics
    ///
    /// Panics if the deck is empty. A fresh 52-card deck is created every
    /// round and at most around 21 cards can leave it before a terminal
    /// state, so an empty draw is a logic bug in round length, never a
    /// recoverable condition.
    pub fn deal(&mut self, hidden: bool) -> Card {
        let Some(mut card) = self.cards.pop() else {
            panic!("dealt from an empty deck; a round cannot outdraw a single shoe");
        };
        if hidden {
            card.conceal();
        }
        card
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards in order (the tail is dealt first).
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
