//! Built-in commands
//!
//! The shell-like side of the terminal: filesystem navigation, help,
//! screen clearing and the challenge/exit verbs. Diagnostics echo the
//! argument exactly as the player typed it, not the resolved path.

use vfs::{path, VfsError, HOME_DIR};

use crate::docker::DockerCommand;
use crate::interpreter::{
    CommandEffect, CommandHandler, CommandOutput, CommandRegistry, SessionState,
};
use crate::style;

/// Registry with the full built-in command set.
pub fn default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register("help", Box::new(HelpCommand));
    registry.register("ls", Box::new(LsCommand));
    registry.register("cd", Box::new(CdCommand));
    registry.register("pwd", Box::new(PwdCommand));
    registry.register("cat", Box::new(CatCommand));
    registry.register("clear", Box::new(ClearCommand));
    registry.register("docker", Box::new(DockerCommand));
    registry.register("challenge", Box::new(ChallengeCommand));
    registry.register("exit", Box::new(ExitCommand));
    registry
}

/// `help`: static summary of the command set.
pub struct HelpCommand;

impl CommandHandler for HelpCommand {
    fn execute(&self, _args: &[&str], _state: &mut SessionState) -> CommandOutput {
        CommandOutput::lines(vec![
            "Comandos disponibles:".to_string(),
            format!("- {}: Muestra esta ayuda", style::accent("help")),
            format!(
                "- {}: Lista archivos en el directorio actual o especificado",
                style::accent("ls [directorio]")
            ),
            format!("- {}: Cambia el directorio actual", style::accent("cd [directorio]")),
            format!(
                "- {}: Muestra la ruta del directorio actual",
                style::accent("pwd")
            ),
            format!(
                "- {}: Muestra el contenido de un archivo",
                style::accent("cat [archivo]")
            ),
            format!("- {}: Limpia la terminal", style::accent("clear")),
            format!(
                "- {}: Gestiona contenedores Docker",
                style::accent("docker [comandos]")
            ),
            format!(
                "- {}: Muestra las instrucciones del desafío actual",
                style::accent("challenge")
            ),
            format!("- {}: Volver a la oficina", style::accent("exit")),
        ])
    }
}

/// `ls [path]`: lists a directory, subdirectories first.
pub struct LsCommand;

impl CommandHandler for LsCommand {
    fn execute(&self, args: &[&str], state: &mut SessionState) -> CommandOutput {
        let target = match args.first() {
            Some(arg) => path::resolve(&state.cwd, arg),
            None => state.cwd.clone(),
        };

        let entries = match state.fs.list_directory(&target) {
            Ok(entries) => entries,
            Err(_) => {
                let shown = args.first().copied().unwrap_or(&state.cwd);
                return CommandOutput::line(format!(
                    "ls: no se puede acceder a '{}': No existe el fichero o el directorio",
                    shown
                ));
            }
        };

        if entries.is_empty() {
            return CommandOutput::line("No hay archivos en este directorio");
        }

        let mut line = String::new();
        for entry in &entries {
            let rendered = match entry.kind {
                vfs::NodeKind::Directory => style::primary(&format!("{}/", entry.name)),
                vfs::NodeKind::File => style::light(&entry.name),
            };
            line.push_str(&rendered);
            line.push_str("  ");
        }
        CommandOutput::line(line)
    }
}

/// `cd [path]`: changes the working directory; no argument returns home.
pub struct CdCommand;

impl CommandHandler for CdCommand {
    fn execute(&self, args: &[&str], state: &mut SessionState) -> CommandOutput {
        let arg = match args.first() {
            Some(arg) => *arg,
            None => {
                state.cwd = HOME_DIR.to_string();
                return CommandOutput::silent();
            }
        };

        let target = path::resolve(&state.cwd, arg);
        match state.fs.lookup(&target) {
            Err(_) => CommandOutput::line(format!(
                "cd: {}: No existe el fichero o el directorio",
                arg
            )),
            Ok(node) if !node.is_directory() => {
                CommandOutput::line(format!("cd: {}: No es un directorio", arg))
            }
            Ok(_) => {
                state.cwd = target;
                CommandOutput::silent()
            }
        }
    }
}

/// `pwd`: prints the working directory.
pub struct PwdCommand;

impl CommandHandler for PwdCommand {
    fn execute(&self, _args: &[&str], state: &mut SessionState) -> CommandOutput {
        CommandOutput::line(state.cwd.clone())
    }
}

/// `cat [path]`: prints a file's contents.
pub struct CatCommand;

impl CommandHandler for CatCommand {
    fn execute(&self, args: &[&str], state: &mut SessionState) -> CommandOutput {
        let arg = match args.first() {
            Some(arg) => *arg,
            None => return CommandOutput::line("cat: falta el nombre del archivo"),
        };

        let target = path::resolve(&state.cwd, arg);
        match state.fs.read_file(&target) {
            Ok(contents) => {
                CommandOutput::lines(contents.lines().map(String::from).collect())
            }
            Err(VfsError::IsADirectory(_)) => {
                CommandOutput::line(format!("cat: {}: Es un directorio", arg))
            }
            Err(_) => CommandOutput::line(format!(
                "cat: {}: No existe el fichero o el directorio",
                arg
            )),
        }
    }
}

/// `clear`: wipes the output log.
pub struct ClearCommand;

impl CommandHandler for ClearCommand {
    fn execute(&self, _args: &[&str], _state: &mut SessionState) -> CommandOutput {
        CommandOutput::silent().with_effect(CommandEffect::ClearLog)
    }
}

/// `challenge`: re-opens the active challenge's instructions.
pub struct ChallengeCommand;

impl CommandHandler for ChallengeCommand {
    fn execute(&self, _args: &[&str], state: &mut SessionState) -> CommandOutput {
        match state.tracker.active_challenge() {
            Some(_) => CommandOutput::line("Mostrando instrucciones del desafío...")
                .with_effect(CommandEffect::ShowInstructions),
            None => CommandOutput::line("No hay ningún desafío activo actualmente."),
        }
    }
}

/// `exit`: leaves the terminal.
pub struct ExitCommand;

impl CommandHandler for ExitCommand {
    fn execute(&self, _args: &[&str], _state: &mut SessionState) -> CommandOutput {
        CommandOutput::silent().with_effect(CommandEffect::EndSession)
    }
}
