use crate::card::{Card, HAND_SIZE};
use crate::error::ActionError;
use crate::events::GameEvent;

use super::{Game, GameState};

impl Game {
    fn ensure_active(&self, player: usize, phase: GameState) -> Result<(), ActionError> {
        if *self.state.lock() != phase {
            return Err(ActionError::InvalidState);
        }
        if *self.active_player.lock() != player {
            return Err(ActionError::NotYourTurn);
        }
        Ok(())
    }

    /// Draws the top card of the deck into the active player's hand.
    ///
    /// Legal once per turn, at the start of the active player's turn segment.
    /// Transitions the phase to [`GameState::AwaitingDiscard`].
    ///
    /// # Errors
    ///
    /// Returns an error if the phase is wrong, the caller is not the active
    /// player, the turn's draw was already taken, or the deck is empty. A
    /// rejected draw leaves the round unchanged.
    pub fn draw_from_deck(&self, player: usize) -> Result<Card, ActionError> {
        self.ensure_active(player, GameState::TurnStart)?;
        if *self.has_drawn.lock() {
            return Err(ActionError::InvalidState);
        }

        let card = self
            .deck
            .lock()
            .draw()
            .map_err(|_| ActionError::EmptyDeck)?;
        self.hands.lock()[player].push(card);
        *self.has_drawn.lock() = true;
        *self.state.lock() = GameState::AwaitingDiscard;

        log::trace!("player {player} drew from the deck");
        self.emit(&GameEvent::StateChanged {
            state: GameState::AwaitingDiscard,
            active_player: player,
        });

        Ok(card)
    }

    /// Draws the top card of the discard pile into the active player's hand.
    ///
    /// Same gating as [`Game::draw_from_deck`], with the pile top as the
    /// source; only the top card is ever exposed for drawing back.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase is wrong, the caller is not the active
    /// player, the turn's draw was already taken, or the pile is empty.
    pub fn draw_from_discard(&self, player: usize) -> Result<Card, ActionError> {
        self.ensure_active(player, GameState::TurnStart)?;
        if *self.has_drawn.lock() {
            return Err(ActionError::InvalidState);
        }

        let card = self.discard.lock().pop().ok_or(ActionError::EmptyPile)?;
        self.hands.lock()[player].push(card);
        *self.has_drawn.lock() = true;
        *self.state.lock() = GameState::AwaitingDiscard;

        log::trace!("player {player} drew from the discard pile");
        self.emit(&GameEvent::StateChanged {
            state: GameState::AwaitingDiscard,
            active_player: player,
        });

        Ok(card)
    }

    /// Discards the card at `index` from the active player's hand onto the
    /// pile, where it becomes the new top.
    ///
    /// Transitions the phase back to [`GameState::TurnStart`] without
    /// switching the active player.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase is wrong, the caller is not the active
    /// player, or `index` does not reference a card in the hand.
    pub fn discard(&self, player: usize, index: usize) -> Result<Card, ActionError> {
        self.ensure_active(player, GameState::AwaitingDiscard)?;

        let mut hands = self.hands.lock();
        let card = hands[player].remove(index).ok_or(ActionError::InvalidCard)?;
        drop(hands);

        self.discard.lock().push(card);
        *self.has_discarded.lock() = true;
        *self.state.lock() = GameState::TurnStart;

        log::trace!("player {player} discarded {card:?}");
        self.emit(&GameEvent::StateChanged {
            state: GameState::TurnStart,
            active_player: player,
        });

        Ok(card)
    }

    /// Ends the active player's turn and hands the turn to the other player.
    ///
    /// A turn consists of exactly one draw and one discard; both must have
    /// happened. The per-turn flags reset for the incoming player.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase is wrong, the caller is not the active
    /// player, or the draw/discard pair is incomplete.
    pub fn end_turn(&self, player: usize) -> Result<(), ActionError> {
        self.ensure_active(player, GameState::TurnStart)?;
        if !(*self.has_drawn.lock() && *self.has_discarded.lock()) {
            return Err(ActionError::TurnIncomplete);
        }

        let next = 1 - player;
        *self.active_player.lock() = next;
        *self.has_drawn.lock() = false;
        *self.has_discarded.lock() = false;

        log::trace!("turn passed to player {next}");
        self.emit(&GameEvent::StateChanged {
            state: GameState::TurnStart,
            active_player: next,
        });
        self.emit(&GameEvent::TurnChanged {
            active_player: next,
        });

        Ok(())
    }

    /// Knocks, ending the round immediately.
    ///
    /// Legal only while the active player holds three cards: before the
    /// turn's draw, or after its draw and discard, never in between. No
    /// action is legal afterwards; scoring happens through
    /// [`Game::showdown`].
    ///
    /// # Errors
    ///
    /// Returns an error if the phase is wrong, the caller is not the active
    /// player, or the hand is not at three cards.
    pub fn knock(&self, player: usize) -> Result<(), ActionError> {
        self.ensure_active(player, GameState::TurnStart)?;
        if self.hands.lock()[player].len() != HAND_SIZE {
            return Err(ActionError::InvalidState);
        }

        *self.knocked_player.lock() = Some(player);
        *self.state.lock() = GameState::RoundOver;

        log::debug!("player {player} knocked");
        self.emit(&GameEvent::StateChanged {
            state: GameState::RoundOver,
            active_player: player,
        });
        self.emit(&GameEvent::Knocked { player });

        Ok(())
    }
}
