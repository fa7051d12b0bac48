//! Bounded output log
//!
//! The scrollback the game renders. Old entries fall off the front once
//! the cap is reached; `clear` wipes it wholesale.

use std::collections::VecDeque;

/// Maximum number of entries kept in the log
pub const MAX_LOG_ENTRIES: usize = 20;

/// FIFO log of rendered output lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputLog {
    entries: VecDeque<String>,
    pushed: u64,
}

impl OutputLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line, evicting the oldest entries past the cap.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push_back(line.into());
        self.pushed += 1;

        while self.entries.len() > MAX_LOG_ENTRIES {
            self.entries.pop_front();
        }
    }

    /// Empties the log.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries oldest first.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.as_str())
    }

    /// Copies the entries out, oldest first.
    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    /// The newest entry, if any.
    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(|s| s.as_str())
    }

    /// Total lines ever pushed. Survives eviction and `clear`, so hosts
    /// can tell how much output a step produced.
    pub fn pushed(&self) -> u64 {
        self.pushed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order() {
        let mut log = OutputLog::new();
        log.push("uno");
        log.push("dos");
        let lines: Vec<&str> = log.lines().collect();
        assert_eq!(lines, vec!["uno", "dos"]);
        assert_eq!(log.last(), Some("dos"));
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut log = OutputLog::new();
        for i in 0..25 {
            log.push(format!("línea {}", i));
        }
        assert_eq!(log.len(), MAX_LOG_ENTRIES);
        let lines: Vec<String> = log.to_vec();
        assert_eq!(lines[0], "línea 5");
        assert_eq!(lines[19], "línea 24");
    }

    #[test]
    fn test_exactly_at_cap_keeps_all() {
        let mut log = OutputLog::new();
        for i in 0..MAX_LOG_ENTRIES {
            log.push(format!("{}", i));
        }
        assert_eq!(log.len(), MAX_LOG_ENTRIES);
        assert_eq!(log.to_vec()[0], "0");
    }

    #[test]
    fn test_clear() {
        let mut log = OutputLog::new();
        log.push("algo");
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.last(), None);
    }

    #[test]
    fn test_pushed_counts_through_eviction_and_clear() {
        let mut log = OutputLog::new();
        for i in 0..25 {
            log.push(format!("{}", i));
        }
        assert_eq!(log.pushed(), 25);

        log.clear();
        log.push("después");
        assert_eq!(log.pushed(), 26);
        assert_eq!(log.len(), 1);
    }
}
