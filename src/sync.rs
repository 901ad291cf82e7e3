use std::sync::atomic::{AtomicBool, Ordering};

/// Mutex that recovers the inner value from a poisoned lock.
///
/// A panic while holding a guard cannot leave the engine unusable; the next
/// lock simply observes whatever state the panicking path left behind.
pub struct Mutex<T>(std::sync::Mutex<T>);

impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    pub fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

/// One-bit re-entry guard for the bot's turn sequence.
///
/// `acquire` succeeds at most once until the returned token is dropped; a
/// second caller is rejected instead of silently running concurrently.
pub struct TurnFlag(AtomicBool);

impl TurnFlag {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Attempts to mark a turn as in flight. Returns `None` if one already is.
    pub fn acquire(&self) -> Option<TurnToken<'_>> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
            .then_some(TurnToken(self))
    }
}

/// Token marking a turn sequence as in flight.
///
/// Returned by [`Game::begin_turn_sequence`](crate::Game::begin_turn_sequence).
/// Dropping it releases the guard on every exit path, including early error
/// returns.
pub struct TurnToken<'a>(&'a TurnFlag);

impl Drop for TurnToken<'_> {
    fn drop(&mut self) {
        self.0.0.store(false, Ordering::Release);
    }
}
