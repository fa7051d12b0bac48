//! Command interpreter
//!
//! Tokenizes a submitted line and dispatches it through an open registry
//! of named handlers. Adding a command means registering a handler, not
//! growing a match arm.

use log::debug;

use challenges::{ChallengeTracker, ProgressStore};
use vfs::VirtualFs;

use crate::commands::default_registry;

/// Mutable state a command may consult or change.
pub struct SessionState {
    pub fs: VirtualFs,
    pub cwd: String,
    pub tracker: ChallengeTracker,
    pub store: Box<dyn ProgressStore>,
}

/// Side effect a command asks the session to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandEffect {
    /// Nothing beyond the printed lines.
    None,
    /// Wipe the output log before printing.
    ClearLog,
    /// Ask the host to open the challenge instructions view.
    ShowInstructions,
    /// Tear the session down.
    EndSession,
}

/// What a command produced: zero or more output lines plus an optional
/// effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub lines: Vec<String>,
    pub effect: CommandEffect,
}

impl CommandOutput {
    /// Output with no lines and no effect.
    pub fn silent() -> Self {
        Self {
            lines: Vec::new(),
            effect: CommandEffect::None,
        }
    }

    /// A single output line.
    pub fn line(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            effect: CommandEffect::None,
        }
    }

    /// Several output lines.
    pub fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            effect: CommandEffect::None,
        }
    }

    /// Attaches an effect.
    pub fn with_effect(mut self, effect: CommandEffect) -> Self {
        self.effect = effect;
        self
    }
}

/// A named command implementation.
///
/// Handlers receive the argument tokens (the command name itself already
/// stripped) and the session state. Failures are not errors: a handler
/// reports problems as Spanish diagnostic lines, exactly as a shell
/// would print them.
pub trait CommandHandler {
    fn execute(&self, args: &[&str], state: &mut SessionState) -> CommandOutput;
}

struct RegisteredCommand {
    name: String,
    handler: Box<dyn CommandHandler + Send + Sync>,
}

/// Dispatch table mapping command names to handlers.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<RegisteredCommand>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler under a (lowercase) name.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: Box<dyn CommandHandler + Send + Sync>,
    ) {
        self.commands.push(RegisteredCommand {
            name: name.into(),
            handler,
        });
    }

    /// Looks a handler up by name.
    pub fn get(&self, name: &str) -> Option<&(dyn CommandHandler + Send + Sync)> {
        self.commands
            .iter()
            .find(|cmd| cmd.name == name)
            .map(|cmd| cmd.handler.as_ref())
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(|cmd| cmd.name.as_str()).collect()
    }
}

/// Executes submitted lines against the registry and the session state.
pub struct CommandInterpreter {
    registry: CommandRegistry,
    state: SessionState,
}

impl CommandInterpreter {
    /// Interpreter with the built-in command set.
    pub fn new(state: SessionState) -> Self {
        Self {
            registry: default_registry(),
            state,
        }
    }

    /// Interpreter over a custom registry.
    pub fn with_registry(state: SessionState, registry: CommandRegistry) -> Self {
        Self { registry, state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    /// Runs one submitted line.
    ///
    /// Empty (after trimming) input yields a single blank line and no
    /// dispatch. Otherwise the first whitespace token, lowercased, picks
    /// the handler; unknown names report `comando no encontrado`. Every
    /// dispatched submission gains a trailing blank line.
    pub fn execute(&mut self, raw: &str) -> CommandOutput {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CommandOutput::line("");
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        let name = tokens[0].to_lowercase();
        let args = &tokens[1..];
        debug!("dispatching {:?} ({} args)", name, args.len());

        let mut output = match self.registry.get(&name) {
            Some(handler) => handler.execute(args, &mut self.state),
            None => CommandOutput::line(format!("{}: comando no encontrado", name)),
        };

        output.lines.push(String::new());
        output
    }
}
