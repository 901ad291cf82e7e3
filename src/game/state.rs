//! Game state types.

/// Round phase.
///
/// The phase gates which actions are legal; the active player index lives
/// beside it on the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the opening deal.
    AwaitingDeal,
    /// The active player holds three cards and has not drawn this segment.
    TurnStart,
    /// The active player holds four cards and must discard.
    AwaitingDiscard,
    /// A knock ended the round; only showdown remains.
    RoundOver,
}
