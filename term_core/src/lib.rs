//! # Terminal Core
//!
//! The PixxelOps in-game terminal: interpreter, built-in commands, the
//! container-runtime simulator and the session state machine that ties
//! them to the line editor and the output log.
//!
//! ## Philosophy
//!
//! - **Deterministic**: Same key trace => same session state
//! - **Synchronous**: Every key resolves in the turn it arrives;
//!   deferred work travels as explicit notices the host delivers back
//! - **Mechanism over policy**: The session produces ordered styled
//!   lines and outcomes, hosts decide rendering and timers
//! - **No ambient authority**: Progress writes go through the injected
//!   store, never through globals
//!
//! ## Design
//!
//! The crate provides:
//! - TerminalSession: Key events in, outcomes and log lines out
//! - CommandInterpreter: Tokenizes lines and dispatches to handlers
//! - CommandHandler registry: Built-ins plus the docker simulator
//! - SessionSnapshot: Deterministic state for parity testing

pub mod commands;
pub mod docker;
pub mod interpreter;
pub mod key;
pub mod output;
pub mod session;
pub mod snapshot;
pub mod style;

pub use commands::default_registry;
pub use interpreter::{
    CommandEffect, CommandHandler, CommandInterpreter, CommandOutput, CommandRegistry,
    SessionState,
};
pub use key::Key;
pub use output::{OutputLog, MAX_LOG_ENTRIES};
pub use session::{DeferredNotice, SessionId, SessionOutcome, TerminalSession};
pub use snapshot::SessionSnapshot;
