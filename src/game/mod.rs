//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, PLAYER_COUNT};
use crate::deck::Deck;
use crate::error::ShowdownError;
use crate::events::{GameEvent, GameObserver};
use crate::hand::Hand;
use crate::result::{PlayerScore, RoundSummary};
use crate::sync::{Mutex, TurnFlag, TurnToken};

mod actions;
mod deal;
pub mod state;

pub use state::GameState;

/// A thirty-one round engine for two players.
///
/// The engine owns the deck, the discard pile, both hands and the turn
/// bookkeeping, and is the sole mutator of that state: every change goes
/// through a validated action which either applies fully or leaves the round
/// untouched. Player 0 is the human seat by convention; its opening deal is
/// the one-shot visible set used by the bot's opponent estimate.
pub struct Game {
    /// Cards not yet dealt or drawn. Exposed for stacked decks in tests.
    pub deck: Mutex<Deck>,
    /// Discard pile; the last element is the top.
    discard: Mutex<Vec<Card>>,
    /// Both players' hands, indexed by player.
    hands: Mutex<[Hand; PLAYER_COUNT]>,
    /// Current round phase.
    state: Mutex<GameState>,
    /// Index of the player whose turn it is.
    active_player: Mutex<usize>,
    /// Set when a knock ends the round.
    knocked_player: Mutex<Option<usize>>,
    /// Whether the active player has drawn this turn.
    has_drawn: Mutex<bool>,
    /// Whether the active player has discarded this turn.
    has_discarded: Mutex<bool>,
    /// Player 0's dealt cards, recorded once at the deal.
    face_up_deal: Mutex<Vec<Card>>,
    /// Subscribed event observers.
    observers: Mutex<Vec<Box<dyn GameObserver>>>,
    /// Re-entry guard for scripted turn sequences.
    turn_flag: TurnFlag,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new round engine with a freshly shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use knock31::Game;
    ///
    /// let game = Game::new(42);
    /// game.deal().unwrap();
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new(&mut rng);

        Self {
            deck: Mutex::new(deck),
            discard: Mutex::new(Vec::new()),
            hands: Mutex::new([Hand::new(), Hand::new()]),
            state: Mutex::new(GameState::AwaitingDeal),
            active_player: Mutex::new(0),
            knocked_player: Mutex::new(None),
            has_drawn: Mutex::new(false),
            has_discarded: Mutex::new(false),
            face_up_deal: Mutex::new(Vec::new()),
            observers: Mutex::new(Vec::new()),
            turn_flag: TurnFlag::new(),
            rng: Mutex::new(rng),
        }
    }

    /// Subscribes an observer to all future events.
    pub fn subscribe(&self, observer: Box<dyn GameObserver>) {
        self.observers.lock().push(observer);
    }

    /// Notifies every observer. Called after the transition is complete and
    /// all state locks are released.
    fn emit(&self, event: &GameEvent) {
        for observer in self.observers.lock().iter() {
            observer.on_event(event);
        }
    }

    /// Returns the current round phase.
    #[must_use]
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the index of the player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> usize {
        *self.active_player.lock()
    }

    /// Returns the player who knocked, once the round is over.
    #[must_use]
    pub fn knocked_player(&self) -> Option<usize> {
        *self.knocked_player.lock()
    }

    /// Returns a snapshot of the player's hand.
    ///
    /// Returns `None` for a player index outside the table.
    #[must_use]
    pub fn hand(&self, player: usize) -> Option<Hand> {
        self.hands.lock().get(player).cloned()
    }

    /// Returns the top card of the discard pile without removing it.
    #[must_use]
    pub fn discard_top(&self) -> Option<Card> {
        self.discard.lock().last().copied()
    }

    /// Returns the number of cards in the discard pile.
    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.lock().len()
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns the opponent's cards that `viewer` has seen.
    ///
    /// Visibility is recorded once at the deal, for player 0's hand only, and
    /// never updated afterwards: the result is the intersection of the
    /// opponent's current hand with that dealt set.
    #[must_use]
    pub fn opponent_visible_cards(&self, viewer: usize) -> Vec<Card> {
        if viewer >= PLAYER_COUNT {
            return Vec::new();
        }
        let opponent = 1 - viewer;
        let face_up = self.face_up_deal.lock();
        self.hands.lock()[opponent]
            .cards()
            .iter()
            .filter(|card| face_up.contains(card))
            .copied()
            .collect()
    }

    /// Marks a scripted turn sequence as in flight.
    ///
    /// The bot driver holds the returned [`TurnToken`] for its whole turn;
    /// dropping it releases the guard. Returns `None` while a sequence is
    /// already running, so a re-entrant invocation is rejected rather than
    /// run concurrently.
    #[must_use]
    pub fn begin_turn_sequence(&self) -> Option<TurnToken<'_>> {
        self.turn_flag.acquire()
    }

    /// Clears all round state and rebuilds a fresh shuffled deck.
    ///
    /// Nothing carries over between rounds except the engine's RNG stream.
    pub fn reset_round(&self) {
        let mut rng = self.rng.lock();
        *self.deck.lock() = Deck::new(&mut rng);
        drop(rng);

        *self.discard.lock() = Vec::new();
        *self.hands.lock() = [Hand::new(), Hand::new()];
        *self.active_player.lock() = 0;
        *self.knocked_player.lock() = None;
        *self.has_drawn.lock() = false;
        *self.has_discarded.lock() = false;
        *self.face_up_deal.lock() = Vec::new();
        *self.state.lock() = GameState::AwaitingDeal;
    }

    /// Reveals both hands and compares best scores.
    ///
    /// Read-only: calling it repeatedly returns the same summary.
    ///
    /// # Errors
    ///
    /// Returns an error unless a knock has ended the round.
    pub fn showdown(&self) -> Result<RoundSummary, ShowdownError> {
        if *self.state.lock() != GameState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }
        let knocker = (*self.knocked_player.lock()).ok_or(ShowdownError::InvalidState)?;

        let hands = self.hands.lock();
        let players = [0usize, 1].map(|player| PlayerScore {
            player,
            best_score: hands[player].best_score(),
            suit_totals: hands[player].suit_totals(),
        });
        drop(hands);

        let winner = match players[0].best_score.cmp(&players[1].best_score) {
            core::cmp::Ordering::Greater => Some(0),
            core::cmp::Ordering::Less => Some(1),
            core::cmp::Ordering::Equal => None,
        };

        Ok(RoundSummary {
            players,
            knocker,
            winner,
        })
    }
}
