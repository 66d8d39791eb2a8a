//! Bounded battle log

use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;

/// Entries kept when no capacity is configured
pub const DEFAULT_LOG_CAPACITY: usize = 5;

/// An entry in the battle log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub round: u32,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// FIFO of the most recent battle events; oldest entries drop off the front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl Default for BattleLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }
}

impl BattleLog {
    /// Capacity is raised to at least one entry
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, round: u32, message: impl Into<String>) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            round,
            message: message.into(),
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Messages oldest first
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.message.as_str()).collect()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_drops_oldest() {
        let mut log = BattleLog::default();
        for i in 1..=6 {
            log.push(i, format!("event {}", i));
        }
        assert_eq!(log.len(), 5);
        assert_eq!(
            log.messages(),
            vec!["event 2", "event 3", "event 4", "event 5", "event 6"]
        );
        assert_eq!(log.last().map(|e| e.round), Some(6));
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut log = BattleLog::with_capacity(0);
        log.push(1, "first");
        log.push(1, "second");
        assert_eq!(log.capacity(), 1);
        assert_eq!(log.messages(), vec!["second"]);
    }

    #[test]
    fn test_entry_displays_message() {
        let mut log = BattleLog::default();
        log.push(3, "Whiskerwall attacks.");
        assert_eq!(log.iter().next().map(|e| e.to_string()), Some("Whiskerwall attacks.".into()));
    }
}
