//! The non-human player.
//!
//! The bot reads snapshots of the round through the engine's accessor
//! queries and feeds its choices back through the same actions a human
//! caller issues; it never mutates engine state directly. Every choice a
//! turn needs comes from a pure function in [`heuristics`], from the opening
//! knock check down to the discard pick. Pacing between decision points is a
//! presentation concern and lives outside this module.

mod heuristics;

pub use heuristics::{prefer_discard, select_discard, should_knock};

use crate::card::Card;
use crate::error::{ActionError, TurnError};
use crate::game::Game;

/// Where a turn's draw comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawSource {
    /// The top of the deck.
    Deck,
    /// The top of the discard pile.
    Discard,
}

/// What the bot did with its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The bot knocked, ending the round.
    Knocked,
    /// The bot drew, discarded, and passed the turn.
    Played {
        /// Where the draw came from.
        source: DrawSource,
        /// The card drawn.
        drawn: Card,
        /// The card discarded.
        discarded: Card,
    },
}

/// Drives one player's turns with the built-in heuristics.
#[derive(Debug, Clone, Copy)]
pub struct Bot {
    player: usize,
}

impl Bot {
    /// Creates a bot for the given seat.
    #[must_use]
    pub const fn new(player: usize) -> Self {
        Self { player }
    }

    /// The seat this bot plays.
    #[must_use]
    pub const fn player(&self) -> usize {
        self.player
    }

    /// Plays one full turn: knock if the hand warrants it, otherwise draw,
    /// discard, and pass the turn.
    ///
    /// The whole sequence runs under the engine's turn-in-flight guard; a
    /// second invocation while one is running is rejected rather than
    /// interleaved. Once begun, the sequence runs to completion before
    /// control returns.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::InProgress`] when a turn sequence is already
    /// running, or the underlying [`ActionError`] when the engine rejects an
    /// action (wrong turn, wrong phase, exhausted deck).
    pub fn take_turn(&self, game: &Game) -> Result<TurnOutcome, TurnError> {
        let _token = game.begin_turn_sequence().ok_or(TurnError::InProgress)?;

        let hand = game.hand(self.player).ok_or(ActionError::NotYourTurn)?;
        let pile_depth = game.discard_len();
        let visible = game.opponent_visible_cards(self.player);

        if heuristics::should_knock(&hand, &visible, pile_depth) {
            game.knock(self.player)?;
            log::debug!(
                "bot {} knocked at {} points",
                self.player,
                hand.best_score()
            );
            return Ok(TurnOutcome::Knocked);
        }

        let source = heuristics::prefer_discard(&hand, game.discard_top());
        let drawn = match source {
            DrawSource::Deck => game.draw_from_deck(self.player)?,
            DrawSource::Discard => game.draw_from_discard(self.player)?,
        };
        log::debug!("bot {} drew {drawn:?} from {source:?}", self.player);

        let hand = game.hand(self.player).ok_or(ActionError::NotYourTurn)?;
        let index = heuristics::select_discard(&hand);
        let discarded = game.discard(self.player, index)?;
        game.end_turn(self.player)?;
        log::debug!("bot {} discarded {discarded:?}", self.player);

        Ok(TurnOutcome::Played {
            source,
            drawn,
            discarded,
        })
    }
}
