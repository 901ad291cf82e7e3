//! A thirty-one (knock 31) card game engine.
//!
//! The crate provides a [`Game`] type that owns one round of two-player
//! thirty-one (the deck, the discard pile, both hands, and the phase-gated
//! action API) and a [`Bot`] that plays a seat with deterministic heuristics
//! through that same API.
//!
//! # Example
//!
//! ```
//! use knock31::{Bot, Game};
//!
//! let game = Game::new(42);
//! game.deal().unwrap();
//!
//! let bot = Bot::new(0);
//! let outcome = bot.take_turn(&game).unwrap();
//! let _ = outcome;
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod bot;
pub mod card;
pub mod deck;
pub mod error;
pub mod events;
pub mod game;
pub mod hand;
pub mod result;
mod sync;

// Re-export main types
pub use bot::{Bot, DrawSource, TurnOutcome};
pub use card::{Card, DECK_SIZE, HAND_SIZE, MAX_SCORE, PLAYER_COUNT, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, DeckError, ShowdownError, TurnError};
pub use events::{GameEvent, GameObserver};
pub use game::{Game, GameState};
pub use hand::Hand;
pub use result::{PlayerScore, RoundSummary};
pub use sync::TurnToken;
