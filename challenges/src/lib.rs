//! # Challenge System
//!
//! The PixxelOps challenge catalog, the player's progress store, and the
//! per-session completion state machine.
//!
//! ## Philosophy
//!
//! - **The catalog is data**: challenges are declared, not coded; only
//!   their verification hooks live elsewhere
//! - **Progress is external**: score and completed-challenge membership
//!   belong to an injected store, never to ambient globals
//! - **Completion is one-way**: Inactive, Active, Completed, in that
//!   order, at most one transition each per session
//! - **Completion pays once**: re-running the winning command must not
//!   award again
//!
//! ## Design
//!
//! - [`ChallengeCatalog`] holds the static challenge descriptors;
//!   [`default_catalog`] builds the shipped set
//! - [`ProgressStore`] is the seam to the player's save state, with
//!   [`InMemoryProgress`] backing tests and [`SharedProgress`] giving
//!   callers a window onto a store they have already handed in
//! - [`ChallengeTracker`] drives the session state machine and routes the
//!   award through the store exactly once

pub mod catalog;
pub mod progress;
pub mod tracker;

pub use catalog::{default_catalog, ids, Challenge, ChallengeCatalog, ChallengeId};
pub use progress::{InMemoryProgress, ProgressStore, SharedProgress};
pub use tracker::{Award, ChallengeStatus, ChallengeTracker};
