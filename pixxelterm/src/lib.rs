//! # PixxelOps Terminal Host
//!
//! Console host for the PixxelOps in-game terminal.
//!
//! ## Philosophy
//!
//! - **Host owns I/O**: The session never prints
//! - **Output is log rendering**: The host drains the session's output
//!   log, it never scrapes terminal state
//! - **Input is explicit events**: Lines become key events, never raw
//!   stdin streams handed to the core
//! - **Deterministic mode is first-class**: Scripted runs replay the
//!   same session every time
//!
//! ## Responsibilities
//!
//! The host:
//! - Boots a session, with or without an active challenge
//! - Feeds it key events from stdin or a script
//! - Renders new log entries and the instructions view
//! - Prints the progress summary when the session ends

pub mod runtime;
pub mod script;

pub use runtime::{strip_markup, HostConfig, HostError, TerminalHost};
pub use script::{CommandScript, ScriptError};
