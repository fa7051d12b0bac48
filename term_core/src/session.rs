//! Terminal session orchestration
//!
//! One [`TerminalSession`] per visit to the in-game terminal. It owns the
//! line editor, the output log and the interpreter, and turns host key
//! events into [`SessionOutcome`]s the host can render from. Deferred
//! work (the instructions view shown shortly after boot) travels as a
//! [`DeferredNotice`] so the host owns the timer and the session stays
//! synchronous.

use std::fmt;

use log::info;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use challenges::{default_catalog, Challenge, ChallengeStatus, ChallengeTracker, ProgressStore};
use line_edit::LineEditor;
use vfs::{pixxelops_disk, HOME_DIR};

use crate::interpreter::{CommandEffect, CommandInterpreter, SessionState};
use crate::key::Key;
use crate::output::OutputLog;
use crate::snapshot::SessionSnapshot;
use crate::style;

/// Unique identifier for a terminal session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random session ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a session ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// Outcome from applying a key or a notice to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Nothing changed
    Idle,
    /// The input line or cursor changed
    Edited,
    /// A command line was executed and the log grew
    Executed,
    /// The host should open the instructions view
    InstructionsRequested,
    /// The player asked to leave the terminal
    ExitRequested { challenge_completed: bool },
}

/// Work the session asks the host to deliver back after a delay.
///
/// The session never sleeps; the host runs the timer and re-enters
/// through [`TerminalSession::deliver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredNotice {
    /// Open the instructions view for the active challenge
    ShowInstructions,
}

/// A live terminal session.
pub struct TerminalSession {
    id: SessionId,
    editor: LineEditor,
    log: OutputLog,
    interpreter: CommandInterpreter,
    ended: bool,
}

impl TerminalSession {
    /// Creates a session with no active challenge.
    pub fn new(store: Box<dyn ProgressStore>) -> Self {
        Self::bootstrap(store, None)
    }

    /// Creates a session and activates a challenge for it.
    ///
    /// An unknown id leaves the session without a challenge, same as
    /// [`TerminalSession::new`].
    pub fn with_challenge(store: Box<dyn ProgressStore>, challenge_id: &str) -> Self {
        Self::bootstrap(store, Some(challenge_id))
    }

    fn bootstrap(store: Box<dyn ProgressStore>, challenge_id: Option<&str>) -> Self {
        let mut tracker = ChallengeTracker::new(default_catalog());
        if let Some(id) = challenge_id {
            tracker.activate(id);
        }

        let state = SessionState {
            fs: pixxelops_disk(),
            cwd: HOME_DIR.to_string(),
            tracker,
            store,
        };

        Self {
            id: SessionId::new(),
            editor: LineEditor::new(),
            log: OutputLog::new(),
            interpreter: CommandInterpreter::new(state),
            ended: false,
        }
    }

    /// Pushes the welcome banner and reports whether the host should
    /// schedule the instructions view.
    pub fn start(&mut self) -> Option<DeferredNotice> {
        info!("terminal session {} started", self.id);

        self.log.push(style::title("Terminal de PixxelOps v1.0.0"));
        self.log.push("==================================");
        self.log.push(format!(
            "Escribe {} para ver los comandos disponibles",
            style::accent("help")
        ));
        self.log.push(format!(
            "Escribe {} para ver las instrucciones del desafío actual",
            style::accent("challenge")
        ));
        self.log.push(style::note(
            "NOTA: Asegúrate de tener Docker instalado para completar los desafíos",
        ));
        self.log.push("");

        if self.interpreter.state().tracker.active_challenge().is_some() {
            Some(DeferredNotice::ShowInstructions)
        } else {
            None
        }
    }

    /// Apply a key event and return the outcome
    pub fn apply_key(&mut self, key: Key) -> SessionOutcome {
        if self.ended {
            return SessionOutcome::Idle;
        }

        match key {
            Key::Char(ch) => {
                self.editor.insert(ch);
                SessionOutcome::Edited
            }
            Key::Backspace => self.edited_if(|editor| editor.backspace()),
            Key::Left => self.edited_if(|editor| editor.move_left()),
            Key::Right => self.edited_if(|editor| editor.move_right()),
            Key::Up => self.edited_if(|editor| editor.navigate_history(-1)),
            Key::Down => self.edited_if(|editor| editor.navigate_history(1)),
            Key::Enter => self.execute_line(),
        }
    }

    fn edited_if(&mut self, apply: impl FnOnce(&mut LineEditor) -> bool) -> SessionOutcome {
        if apply(&mut self.editor) {
            SessionOutcome::Edited
        } else {
            SessionOutcome::Idle
        }
    }

    fn execute_line(&mut self) -> SessionOutcome {
        let line = self.editor.submit();
        self.log.push(format!("{} {}", style::accent("$"), line));

        let output = self.interpreter.execute(&line);
        if output.effect == CommandEffect::ClearLog {
            self.log.clear();
        }
        for line in output.lines {
            self.log.push(line);
        }

        match output.effect {
            CommandEffect::ShowInstructions => SessionOutcome::InstructionsRequested,
            CommandEffect::EndSession => {
                self.ended = true;
                let completed = self.interpreter.state().tracker.is_completed();
                info!("terminal session {} ended", self.id);
                SessionOutcome::ExitRequested {
                    challenge_completed: completed,
                }
            }
            CommandEffect::None | CommandEffect::ClearLog => SessionOutcome::Executed,
        }
    }

    /// Host timer re-entry. Stale notices (session ended, or no challenge
    /// to show) are dropped.
    pub fn deliver(&mut self, notice: DeferredNotice) -> SessionOutcome {
        if self.ended {
            return SessionOutcome::Idle;
        }
        match notice {
            DeferredNotice::ShowInstructions => {
                if self.interpreter.state().tracker.active_challenge().is_some() {
                    SessionOutcome::InstructionsRequested
                } else {
                    SessionOutcome::Idle
                }
            }
        }
    }

    /// Host signal that the player closed the instructions view.
    pub fn acknowledge_instructions(&mut self) {
        if self.ended {
            return;
        }
        self.log.push(style::accent(
            "Puedes ver las instrucciones en cualquier momento escribiendo \"challenge\"",
        ));
        self.log.push("");
    }

    /// Get a complete snapshot of session state (for parity testing)
    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.interpreter.state();
        SessionSnapshot {
            cwd: state.cwd.clone(),
            buffer: self.editor.line(),
            cursor: self.editor.cursor(),
            history: self.editor.history().entries().to_vec(),
            history_index: self.editor.history().index(),
            output: self.log.to_vec(),
            challenge_status: state.tracker.status(),
            ended: self.ended,
        }
    }

    // Public accessors for rendering/testing
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The input line as typed so far.
    pub fn line(&self) -> String {
        self.editor.line()
    }

    /// Cursor position within the input line.
    pub fn cursor(&self) -> usize {
        self.editor.cursor()
    }

    pub fn output(&self) -> &OutputLog {
        &self.log
    }

    pub fn cwd(&self) -> &str {
        &self.interpreter.state().cwd
    }

    pub fn challenge_status(&self) -> ChallengeStatus {
        self.interpreter.state().tracker.status()
    }

    /// The active challenge, for the host's instructions view.
    pub fn active_challenge(&self) -> Option<&Challenge> {
        self.interpreter.state().tracker.active_challenge()
    }

    pub fn ended(&self) -> bool {
        self.ended
    }
}
