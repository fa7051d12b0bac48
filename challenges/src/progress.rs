//! Player progress store
//!
//! The terminal core never touches the player's save state directly. It
//! talks to a [`ProgressStore`] handed in at session construction, so the
//! game shell decides where score and completion actually live.

use std::sync::{Arc, Mutex};

use crate::catalog::ChallengeId;

/// Seam to the player's persistent progress.
///
/// `persist` is best-effort: implementations are expected to absorb and
/// log storage failures rather than surface them into the session.
pub trait ProgressStore {
    /// Adds points to the player's score.
    fn add_score(&mut self, points: u32);

    /// Records a challenge as completed. Recording the same id twice
    /// must leave a single membership.
    fn mark_completed(&mut self, id: &ChallengeId);

    /// Whether a challenge is already in the completed set.
    fn is_completed(&self, id: &ChallengeId) -> bool;

    /// Flushes progress to wherever it lives.
    fn persist(&mut self);
}

/// Progress kept in memory, for tests and the demo host.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProgress {
    score: u32,
    completed: Vec<ChallengeId>,
    persist_calls: u32,
}

impl InMemoryProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn completed(&self) -> &[ChallengeId] {
        &self.completed
    }

    /// How many times `persist` has been asked for.
    pub fn persist_calls(&self) -> u32 {
        self.persist_calls
    }
}

impl ProgressStore for InMemoryProgress {
    fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    fn mark_completed(&mut self, id: &ChallengeId) {
        if !self.completed.contains(id) {
            self.completed.push(id.clone());
        }
    }

    fn is_completed(&self, id: &ChallengeId) -> bool {
        self.completed.contains(id)
    }

    fn persist(&mut self) {
        self.persist_calls += 1;
    }
}

/// Cloneable handle over an [`InMemoryProgress`].
///
/// A session takes its store boxed and by value, which would otherwise
/// leave the caller with no way to read the score afterwards. Cloning a
/// `SharedProgress` before handing one copy in keeps a window onto the
/// same state.
#[derive(Debug, Clone, Default)]
pub struct SharedProgress {
    inner: Arc<Mutex<InMemoryProgress>>,
}

impl SharedProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.inner.lock().expect("lock progress").score()
    }

    pub fn completed(&self) -> Vec<ChallengeId> {
        self.inner.lock().expect("lock progress").completed().to_vec()
    }

    pub fn persist_calls(&self) -> u32 {
        self.inner.lock().expect("lock progress").persist_calls()
    }
}

impl ProgressStore for SharedProgress {
    fn add_score(&mut self, points: u32) {
        self.inner.lock().expect("lock progress").add_score(points);
    }

    fn mark_completed(&mut self, id: &ChallengeId) {
        self.inner.lock().expect("lock progress").mark_completed(id);
    }

    fn is_completed(&self, id: &ChallengeId) -> bool {
        self.inner.lock().expect("lock progress").is_completed(id)
    }

    fn persist(&mut self) {
        self.inner.lock().expect("lock progress").persist();
    }
}
