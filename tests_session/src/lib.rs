//! Session Test Utilities
//!
//! Shared helpers for terminal session integration tests.
//!
//! ## Test Philosophy
//!
//! - **Drive through keys**: Tests type the way a player would, one key
//!   event at a time
//! - **Assert on the log**: The output log is the rendered surface; exact
//!   lines matter
//! - **Watch the store**: Progress effects are observed through a shared
//!   handle onto the injected store

use challenges::SharedProgress;
use term_core::{Key, SessionOutcome, TerminalSession};

/// Boots a started session with no active challenge.
///
/// Returns the session plus a handle onto its progress store.
pub fn boot_session() -> (TerminalSession, SharedProgress) {
    let progress = SharedProgress::new();
    let mut session = TerminalSession::new(Box::new(progress.clone()));
    session.start();
    (session, progress)
}

/// Boots a started session with the given challenge activated.
pub fn boot_challenge_session(challenge_id: &str) -> (TerminalSession, SharedProgress) {
    let progress = SharedProgress::new();
    let mut session = TerminalSession::with_challenge(Box::new(progress.clone()), challenge_id);
    session.start();
    (session, progress)
}

/// Types a line into the session and presses Enter.
pub fn type_line(session: &mut TerminalSession, line: &str) -> SessionOutcome {
    for ch in line.chars() {
        session.apply_key(Key::Char(ch));
    }
    session.apply_key(Key::Enter)
}

/// Log entries a single command produced, echo line included.
pub fn run_and_capture(session: &mut TerminalSession, line: &str) -> Vec<String> {
    let before = session.output().pushed();
    type_line(session, line);
    let after = session.output().pushed();

    let lines = session.output().to_vec();
    let produced = (after - before) as usize;
    lines[lines.len().saturating_sub(produced.min(lines.len()))..].to_vec()
}
