//! # Line Editor
//!
//! Single-line input editing for the PixxelOps terminal: the character
//! buffer under the prompt, its cursor, and the submitted-command history.
//!
//! ## Philosophy
//!
//! - **One line at a time**: the terminal edits exactly one command line;
//!   submission hands the line off and resets the buffer
//! - **The cursor never escapes**: every mutation keeps the cursor inside
//!   `[0, len]`
//! - **History is append-only**: browsing never rewrites what was typed
//!   before
//! - **No hidden limits**: neither line length nor history depth is capped
//!
//! ## Design
//!
//! - [`LineBuffer`] stores characters (not bytes), so cursor arithmetic is
//!   safe for accented input
//! - [`History`] keeps a browse index in `[0, len]`, where `len` means the
//!   live line being typed
//! - [`LineEditor`] combines the two: history navigation replaces the
//!   buffer wholesale, submission trims before recording

pub mod buffer;
pub mod history;

pub use buffer::LineBuffer;
pub use history::History;

/// The editing surface of a terminal session.
#[derive(Debug, Clone, Default)]
pub struct LineEditor {
    buffer: LineBuffer,
    history: History,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// The current line as typed.
    pub fn line(&self) -> String {
        self.buffer.as_string()
    }

    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    /// Inserts a printable character at the cursor.
    pub fn insert(&mut self, ch: char) {
        self.buffer.insert(ch);
    }

    /// Deletes the character before the cursor. No-op at the start of the
    /// line.
    pub fn backspace(&mut self) -> bool {
        self.buffer.backspace()
    }

    pub fn move_left(&mut self) -> bool {
        self.buffer.move_left()
    }

    pub fn move_right(&mut self) -> bool {
        self.buffer.move_right()
    }

    /// Moves the history index by `delta` (negative is older) and replaces
    /// the buffer with the entry now under the index, or with an empty
    /// line when the index reaches the live position.
    ///
    /// Out-of-range steps change nothing, leaving the buffer as typed.
    pub fn navigate_history(&mut self, delta: isize) -> bool {
        if !self.history.seek(delta) {
            return false;
        }
        match self.history.current() {
            Some(entry) => {
                let entry = entry.to_string();
                self.buffer.set_text(&entry);
            }
            None => self.buffer.clear(),
        }
        true
    }

    /// Hands off the current line.
    ///
    /// The raw line is returned as typed. If it is non-empty after
    /// trimming it is appended to the history. The buffer and cursor
    /// always reset, and the browse index always parks back at the live
    /// position, recorded or not.
    pub fn submit(&mut self) -> String {
        let line = self.buffer.as_string();
        if !line.trim().is_empty() {
            self.history.push(line.clone());
        }
        self.history.reset_index();
        self.buffer.clear();
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_line(editor: &mut LineEditor, text: &str) {
        for ch in text.chars() {
            editor.insert(ch);
        }
    }

    #[test]
    fn test_submit_returns_raw_line_and_resets() {
        let mut editor = LineEditor::new();
        type_line(&mut editor, "  ls  ");
        assert_eq!(editor.submit(), "  ls  ");
        assert_eq!(editor.line(), "");
        assert_eq!(editor.cursor(), 0);
        assert_eq!(editor.history().len(), 1);
    }

    #[test]
    fn test_submit_blank_line_not_recorded() {
        let mut editor = LineEditor::new();
        type_line(&mut editor, "   ");
        assert_eq!(editor.submit(), "   ");
        assert!(editor.history().is_empty());
    }

    #[test]
    fn test_blank_submit_still_parks_index() {
        let mut editor = LineEditor::new();
        type_line(&mut editor, "pwd");
        editor.submit();

        editor.navigate_history(-1);
        editor.backspace();
        editor.backspace();
        editor.backspace();
        editor.submit();
        assert_eq!(editor.history().len(), 1);
        assert_eq!(editor.history().index(), 1);
    }

    #[test]
    fn test_history_navigation_replaces_buffer() {
        let mut editor = LineEditor::new();
        type_line(&mut editor, "pwd");
        editor.submit();
        type_line(&mut editor, "ls");
        editor.submit();

        assert!(editor.navigate_history(-1));
        assert_eq!(editor.line(), "ls");
        assert_eq!(editor.cursor(), 2);

        assert!(editor.navigate_history(-1));
        assert_eq!(editor.line(), "pwd");

        assert!(editor.navigate_history(1));
        assert_eq!(editor.line(), "ls");

        // Forward past the newest entry lands on the live (empty) line.
        assert!(editor.navigate_history(1));
        assert_eq!(editor.line(), "");
    }

    #[test]
    fn test_navigation_keeps_live_line_at_bounds() {
        let mut editor = LineEditor::new();
        type_line(&mut editor, "pwd");
        editor.submit();

        type_line(&mut editor, "draft");
        assert!(!editor.navigate_history(1));
        assert_eq!(editor.line(), "draft");
    }

    #[test]
    fn test_navigation_noop_with_empty_history() {
        let mut editor = LineEditor::new();
        type_line(&mut editor, "draft");
        assert!(!editor.navigate_history(-1));
        assert_eq!(editor.line(), "draft");
    }

    #[test]
    fn test_submit_after_browsing_records_browsed_entry() {
        let mut editor = LineEditor::new();
        type_line(&mut editor, "pwd");
        editor.submit();

        editor.navigate_history(-1);
        assert_eq!(editor.submit(), "pwd");
        assert_eq!(editor.history().len(), 2);
        assert_eq!(editor.history().index(), 2);
    }

    #[test]
    fn test_editing_keys_route_to_buffer() {
        let mut editor = LineEditor::new();
        type_line(&mut editor, "cd");
        assert!(editor.move_left());
        editor.insert('x');
        assert_eq!(editor.line(), "cxd");
        assert!(editor.backspace());
        assert_eq!(editor.line(), "cd");
        assert!(editor.move_right());
        assert!(!editor.move_right());
    }
}
