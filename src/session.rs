//! Frame driver
//!
//! Owns the game state and the score-store port. The host calls
//! [`Session::frame`] once per display refresh with the collected input and
//! the current wall clock; the persisted high score is read once at
//! construction and written back only when a tick reports a new one.

use crate::highscore::{ScoreStore, load_high_score, save_high_score};
use crate::sim::{GameEvent, GameState, Snapshot, TickInput, tick};

pub struct Session<S: ScoreStore> {
    pub state: GameState,
    store: S,
}

impl<S: ScoreStore> Session<S> {
    /// Read the persisted high score and set up a fresh session in the menu.
    pub fn new(seed: u64, store: S) -> Self {
        let high_score = load_high_score(&store);
        Self {
            state: GameState::new(seed, high_score),
            store,
        }
    }

    /// Run one tick, persisting the high score if this tick set a new one.
    pub fn frame(&mut self, input: &TickInput, now_ms: f64) -> Vec<GameEvent> {
        let events = tick(&mut self.state, input, now_ms);
        for event in &events {
            if let GameEvent::NewHighScore(score) = event {
                save_high_score(&mut self.store, *score);
            }
        }
        events
    }

    /// Read-only view for the rendering collaborator.
    pub fn snapshot(&self, now_ms: f64) -> Snapshot {
        self.state.snapshot(now_ms)
    }

    /// Tear down the session, handing the store back to the host.
    pub fn into_store(self) -> S {
        self.store
    }
}
