//! A single-player blackjack game engine.
//!
//! The crate provides a [`Game`] session that manages the full round flow:
//! betting, the initial deal, player actions, the dealer's draw-to-17 turn,
//! and payout settlement. Rendering, animation timing, and scheduling of the
//! post-double auto-stand belong to the embedding shell; the engine itself is
//! a synchronous state machine.
//!
//! # Example
//!
//! ```
//! use twentyone::{Game, GameStatus};
//!
//! let mut game = Game::new(42);
//! game.start_round(50).expect("a fresh session accepts a bet");
//! if game.status() == GameStatus::Playing {
//!     game.stand().expect("standing is always legal while playing");
//! }
//! assert_eq!(game.status(), GameStatus::RoundOver);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::ActionError;
pub use game::{DEFAULT_BALANCE, Game, GameStatus, RoundOutcome};
pub use hand::HandView;
pub use view::GameView;
