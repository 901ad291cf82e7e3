//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing directly from a [`Deck`](crate::Deck).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur during the opening deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck to complete the deal.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during turn actions.
///
/// Every rejected action leaves the round state exactly as it was before the
/// call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not legal in the current phase.
    #[error("action is not legal in the current phase")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The turn is missing its draw or its discard.
    #[error("turn requires exactly one draw and one discard before ending")]
    TurnIncomplete,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
    /// The discard pile has no card to take.
    #[error("the discard pile is empty")]
    EmptyPile,
    /// The discard index does not reference a card in the hand.
    #[error("no card at that index")]
    InvalidCard,
}

/// Errors that can occur during showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// The round has not ended yet.
    #[error("invalid game state for showdown")]
    InvalidState,
}

/// Errors that can occur while the bot plays a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// A bot turn sequence is already running.
    #[error("a bot turn is already in progress")]
    InProgress,
    /// An action issued by the bot was rejected.
    #[error(transparent)]
    Action(#[from] ActionError),
}
