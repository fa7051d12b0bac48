//! # Terminal Host
//!
//! Feeds key events into a terminal session and renders whatever the
//! session logs. There is no timer here: the deferred instructions
//! notice is delivered as soon as the banner is on screen.

use std::io::{self, BufRead, Write};

use challenges::SharedProgress;
use log::debug;
use term_core::{Key, SessionOutcome, TerminalSession};
use thiserror::Error;

use crate::script::{CommandScript, ScriptError};

/// Host error types
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Host configuration
#[derive(Debug, Clone, Default)]
pub struct HostConfig {
    /// Challenge to activate for the session
    pub challenge: Option<String>,
    /// Script text to replay instead of reading stdin
    pub script: Option<String>,
}

/// Drops the `<span ...>` / `</span>` markers the session styles lines
/// with; a console host renders plain text.
pub fn strip_markup(line: &str) -> String {
    let mut plain = String::with_capacity(line.len());
    let mut in_tag = false;

    for ch in line.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => plain.push(ch),
            _ => {}
        }
    }

    plain
}

/// Terminal host
pub struct TerminalHost {
    session: TerminalSession,
    progress: SharedProgress,
    script: Option<CommandScript>,
    seen: u64,
}

impl TerminalHost {
    /// Creates a host and its session from the configuration.
    pub fn new(config: HostConfig) -> Result<Self, HostError> {
        let progress = SharedProgress::new();
        let store = Box::new(progress.clone());

        let session = match config.challenge.as_deref() {
            Some(id) => TerminalSession::with_challenge(store, id),
            None => TerminalSession::new(store),
        };

        let script = match config.script.as_deref() {
            Some(text) => Some(CommandScript::from_text(text)?),
            None => None,
        };

        Ok(Self {
            session,
            progress,
            script,
            seen: 0,
        })
    }

    /// Runs the session against stdout, reading stdin unless a script
    /// was configured.
    pub fn run(&mut self) -> Result<(), HostError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Runs the session against an arbitrary sink.
    pub fn run_to(&mut self, out: &mut impl Write) -> Result<(), HostError> {
        let notice = self.session.start();
        self.print_new_lines(out)?;

        if let Some(notice) = notice {
            if self.session.deliver(notice) == SessionOutcome::InstructionsRequested {
                self.show_instructions(out)?;
            }
        }

        match self.script.take() {
            Some(script) => self.run_script(script, out)?,
            None => self.run_interactive(out)?,
        }

        self.print_summary(out)
    }

    fn run_script(
        &mut self,
        mut script: CommandScript,
        out: &mut impl Write,
    ) -> Result<(), HostError> {
        while let Some(line) = script.next_line() {
            debug!("script line {:?}", line);
            if self.feed_line(&line, out)? {
                break;
            }
        }
        Ok(())
    }

    fn run_interactive(&mut self, out: &mut impl Write) -> Result<(), HostError> {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            if self.feed_line(&line?, out)? {
                break;
            }
        }
        Ok(())
    }

    /// Types a line into the session. Returns true once the session has
    /// ended.
    fn feed_line(&mut self, line: &str, out: &mut impl Write) -> Result<bool, HostError> {
        for ch in line.chars() {
            self.session.apply_key(Key::Char(ch));
        }
        let outcome = self.session.apply_key(Key::Enter);
        self.print_new_lines(out)?;

        match outcome {
            SessionOutcome::InstructionsRequested => {
                self.show_instructions(out)?;
                Ok(false)
            }
            SessionOutcome::ExitRequested { .. } => Ok(true),
            _ => Ok(false),
        }
    }

    /// Renders the instructions view and tells the session it was
    /// closed.
    fn show_instructions(&mut self, out: &mut impl Write) -> Result<(), HostError> {
        if let Some(challenge) = self.session.active_challenge() {
            writeln!(out, "=== {} ===", challenge.title)?;
            if let Some(instructions) = &challenge.instructions {
                writeln!(out, "{}", instructions)?;
            }
            writeln!(out)?;
        }

        self.session.acknowledge_instructions();
        self.print_new_lines(out)
    }

    /// Prints log entries pushed since the last call, markup stripped.
    fn print_new_lines(&mut self, out: &mut impl Write) -> Result<(), HostError> {
        let log = self.session.output();
        let delta = (log.pushed() - self.seen) as usize;
        self.seen = log.pushed();

        let lines = log.to_vec();
        let start = lines.len().saturating_sub(delta);
        for line in &lines[start..] {
            writeln!(out, "{}", strip_markup(line))?;
        }
        Ok(())
    }

    fn print_summary(&mut self, out: &mut impl Write) -> Result<(), HostError> {
        let completed = self.progress.completed();

        writeln!(out)?;
        writeln!(out, "--- Progreso ---")?;
        writeln!(out, "Puntuación: {} puntos", self.progress.score())?;
        if completed.is_empty() {
            writeln!(out, "Desafíos completados: ninguno")?;
        } else {
            let names: Vec<&str> = completed.iter().map(|id| id.as_str()).collect();
            writeln!(out, "Desafíos completados: {}", names.join(", "))?;
        }
        Ok(())
    }
}
