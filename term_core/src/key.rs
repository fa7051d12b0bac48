//! Platform-independent key representation

use serde::{Deserialize, Serialize};

/// A key event the terminal understands. Anything the host cannot map
/// onto one of these is dropped before it reaches the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Printable character, including space and accented letters
    Char(char),

    // Editing
    Backspace,
    Enter,

    // Navigation
    Left,
    Right,
    Up,
    Down,
}

impl Key {
    /// Converts an ASCII byte to a key (for raw byte input streams).
    ///
    /// Arrow keys have no single-byte form and never come out of this.
    pub fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            0x08 | 0x7F => Some(Key::Backspace),
            b'\r' | b'\n' => Some(Key::Enter),
            ch if (0x20..0x7F).contains(&ch) => Some(Key::Char(ch as char)),
            _ => None,
        }
    }
}
