//! # Command Script Parser
//!
//! A line-based input format for deterministic demo runs.
//!
//! ## Format
//!
//! Each line is typed into the session and submitted with Enter:
//! - Comments: `# comentario`
//! - Blank lines are skipped
//!
//! ## Example
//!
//! ```text
//! # Ganar el desafío de Docker
//! docker pull nginx
//! docker run -p 80:80 nginx
//! exit
//! ```

use std::collections::VecDeque;
use thiserror::Error;

/// Command script error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Empty script")]
    EmptyScript,
}

/// Command script
///
/// Parses and replays command lines for deterministic demo runs.
#[derive(Debug, Clone)]
pub struct CommandScript {
    lines: VecDeque<String>,
}

impl CommandScript {
    /// Parses a script from text
    pub fn from_text(text: &str) -> Result<Self, ScriptError> {
        let mut lines = VecDeque::new();

        for raw in text.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            lines.push_back(line.to_string());
        }

        if lines.is_empty() {
            return Err(ScriptError::EmptyScript);
        }

        Ok(Self { lines })
    }

    /// Returns the next command line, if any
    pub fn next_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }

    /// Returns true if the script has more lines
    pub fn has_more(&self) -> bool {
        !self.lines.is_empty()
    }

    /// Returns the number of remaining lines
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}
