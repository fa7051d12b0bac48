//! Session completion state machine
//!
//! One tracker per terminal session. The state advances one way only:
//! Inactive to Active at bootstrap, Active to Completed when the
//! verification hook fires. Awards route through the progress store at
//! the moment of the transition, never again afterwards.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::catalog::{Challenge, ChallengeCatalog, ChallengeId};
use crate::progress::ProgressStore;

/// Where the session stands with its challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallengeStatus {
    /// No challenge was activated for this session.
    Inactive,
    /// A challenge is underway.
    Active,
    /// The challenge was completed earlier in this session.
    Completed,
}

/// What a completion paid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Award {
    pub challenge_id: ChallengeId,
    pub reward: u32,
}

/// Per-session challenge state.
pub struct ChallengeTracker {
    catalog: ChallengeCatalog,
    active: Option<Challenge>,
    completed_this_session: bool,
}

impl ChallengeTracker {
    pub fn new(catalog: ChallengeCatalog) -> Self {
        Self {
            catalog,
            active: None,
            completed_this_session: false,
        }
    }

    pub fn catalog(&self) -> &ChallengeCatalog {
        &self.catalog
    }

    /// Activates a challenge for this session.
    ///
    /// An id missing from the catalog is an operator mistake, not a player
    /// error: it is logged and the session carries on with no active
    /// challenge.
    pub fn activate(&mut self, id: &str) -> bool {
        match self.catalog.find(id) {
            Some(challenge) => {
                self.active = Some(challenge.clone());
                true
            }
            None => {
                warn!("unknown challenge id {:?}, session continues without one", id);
                false
            }
        }
    }

    pub fn status(&self) -> ChallengeStatus {
        if self.completed_this_session {
            ChallengeStatus::Completed
        } else if self.active.is_some() {
            ChallengeStatus::Active
        } else {
            ChallengeStatus::Inactive
        }
    }

    /// The challenge being played, if any. Stays available after
    /// completion so instructions can be re-read.
    pub fn active_challenge(&self) -> Option<&Challenge> {
        self.active.as_ref()
    }

    /// Id of the active challenge, if any.
    pub fn active_id(&self) -> Option<&ChallengeId> {
        self.active.as_ref().map(|c| &c.id)
    }

    /// Whether this session already completed its challenge.
    pub fn is_completed(&self) -> bool {
        self.completed_this_session
    }

    /// Fires the Active to Completed transition.
    ///
    /// On the first qualifying call the reward is scored, the id recorded
    /// (the store keeps membership unique) and a persist requested; the
    /// award is returned so the caller can announce it. Later calls, or
    /// calls with no active challenge, return `None` and touch nothing.
    pub fn complete(&mut self, store: &mut dyn ProgressStore) -> Option<Award> {
        let challenge = self.active.as_ref()?;
        if self.completed_this_session {
            return None;
        }

        self.completed_this_session = true;
        store.add_score(challenge.reward);
        store.mark_completed(&challenge.id);
        store.persist();

        Some(Award {
            challenge_id: challenge.id.clone(),
            reward: challenge.reward,
        })
    }
}
