//! Thread-safe handle for hosts that serve concurrent requests
//!
//! The affordability check and the ledger update of a drop happen under one
//! lock, so two bets can never both pass against funds that cover only one.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::engine::{DropResponse, DropResult, GameEngine};
use crate::error::DropError;
use crate::sim::{BitSource, EntropyBits};
use crate::stats::SessionStats;

pub struct SharedEngine<B: BitSource = EntropyBits> {
    inner: Arc<Mutex<GameEngine<B>>>,
}

impl<B: BitSource> Clone for SharedEngine<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B: BitSource> SharedEngine<B> {
    pub fn new(engine: GameEngine<B>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    // Ledger mutation happens only after every check passes, so a poisoned
    // lock still guards a consistent engine.
    fn lock(&self) -> MutexGuard<'_, GameEngine<B>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn drop_ball(&self, bet: u64) -> Result<DropResult, DropError> {
        self.lock().drop_ball(bet)
    }

    pub fn all_in(&self) -> Result<DropResult, DropError> {
        self.lock().all_in()
    }

    pub fn respond(&self, raw_bet: i64) -> DropResponse {
        self.lock().respond(raw_bet)
    }

    pub fn balance(&self) -> u64 {
        self.lock().balance()
    }

    /// Snapshot of the session counters
    pub fn stats(&self) -> SessionStats {
        self.lock().stats().clone()
    }
}
