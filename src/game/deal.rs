use crate::card::{HAND_SIZE, PLAYER_COUNT};
use crate::error::DealError;
use crate::events::GameEvent;
use crate::hand::Hand;

use super::{Game, GameState};

impl Game {
    /// Deals the opening hands and flips the first discard.
    ///
    /// Three cards go to each player, one at a time alternating starting with
    /// player 0, then one card starts the discard pile. Player 0's dealt
    /// cards are recorded as the face-up set for the opponent estimate.
    /// Player 0 starts the first turn.
    ///
    /// # Errors
    ///
    /// Returns an error if a deal already happened this round or the deck
    /// holds fewer cards than the deal needs.
    pub fn deal(&self) -> Result<(), DealError> {
        let mut state = self.state.lock();
        if *state != GameState::AwaitingDeal {
            return Err(DealError::InvalidState);
        }

        let cards_needed = HAND_SIZE * PLAYER_COUNT + 1;
        if self.cards_remaining() < cards_needed {
            return Err(DealError::NotEnoughCards);
        }

        let mut hands = self.hands.lock();
        *hands = [Hand::new(), Hand::new()];

        let mut deck = self.deck.lock();
        for _ in 0..HAND_SIZE {
            for hand in hands.iter_mut() {
                if let Ok(card) = deck.draw() {
                    hand.push(card);
                }
            }
        }

        // Flip the first discard.
        let mut discard = self.discard.lock();
        discard.clear();
        if let Ok(card) = deck.draw() {
            discard.push(card);
        }
        drop(discard);
        drop(deck);

        // One-shot visibility: only the dealt human hand, never updated.
        *self.face_up_deal.lock() = hands[0].cards().to_vec();
        drop(hands);

        *self.active_player.lock() = 0;
        *self.knocked_player.lock() = None;
        *self.has_drawn.lock() = false;
        *self.has_discarded.lock() = false;
        *state = GameState::TurnStart;
        drop(state);

        log::debug!("dealt {HAND_SIZE} cards to each player");
        self.emit(&GameEvent::Dealt);
        self.emit(&GameEvent::StateChanged {
            state: GameState::TurnStart,
            active_player: 0,
        });

        Ok(())
    }
}
