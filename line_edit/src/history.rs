//! Submitted-command history
//!
//! Append-only list of earlier lines plus a browse index. The index
//! ranges over `[0, len]`; position `len` stands for the live line that
//! has not been submitted yet.

/// Command history with a browse cursor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct History {
    entries: Vec<String>,
    index: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a submitted line and parks the index back at the live
    /// position.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.index = self.entries.len();
    }

    /// Parks the index at the live position without recording anything.
    /// Every submission does this, recorded or not.
    pub fn reset_index(&mut self) {
        self.index = self.entries.len();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current browse index, always within `[0, len]`.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Moves the browse index by `delta` (negative is older). A step that
    /// would leave `[0, len]` changes nothing and reports false.
    pub fn seek(&mut self, delta: isize) -> bool {
        let target = self.index as isize + delta;
        if target < 0 || target > self.entries.len() as isize {
            return false;
        }
        self.index = target as usize;
        true
    }

    /// The entry under the browse index, or `None` at the live position.
    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.index).map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_resets_index_to_live() {
        let mut history = History::new();
        history.push("ls");
        assert_eq!(history.index(), 1);
        history.seek(-1);
        history.push("pwd");
        assert_eq!(history.index(), 2);
        assert_eq!(history.current(), None);
    }

    #[test]
    fn test_seek_back_and_forward() {
        let mut history = History::new();
        history.push("ls");
        history.push("pwd");

        assert!(history.seek(-1));
        assert_eq!(history.current(), Some("pwd"));
        assert!(history.seek(-1));
        assert_eq!(history.current(), Some("ls"));
        assert!(history.seek(1));
        assert_eq!(history.current(), Some("pwd"));
        assert!(history.seek(1));
        assert_eq!(history.current(), None);
    }

    #[test]
    fn test_seek_out_of_range_is_noop() {
        let mut history = History::new();
        history.push("ls");

        assert!(history.seek(-1));
        assert!(!history.seek(-1));
        assert_eq!(history.index(), 0);

        assert!(history.seek(1));
        assert!(!history.seek(1));
        assert_eq!(history.index(), 1);
    }

    #[test]
    fn test_reset_index_parks_at_live() {
        let mut history = History::new();
        history.push("ls");
        history.push("pwd");
        history.seek(-2);
        assert_eq!(history.index(), 0);

        history.reset_index();
        assert_eq!(history.index(), 2);
        assert_eq!(history.current(), None);
    }

    #[test]
    fn test_empty_history_never_moves() {
        let mut history = History::new();
        assert!(!history.seek(-1));
        assert!(!history.seek(1));
        assert_eq!(history.index(), 0);
        assert_eq!(history.current(), None);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut history = History::new();
        history.push("ls");
        history.push("ls");
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries(), &["ls".to_string(), "ls".to_string()]);
    }
}
