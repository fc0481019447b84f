//! Session history of risk scores
//!
//! A bounded, append-only log of `(timestamp, score)` pairs owned by the
//! caller for the lifetime of one session. After every append the log is
//! truncated to the most recent [`HISTORY_CAPACITY`] entries, evicting in
//! insertion order regardless of timestamp values.
//!
//! Concurrent sessions must each own their own `SessionHistory`.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use tracing::trace;

use crate::config::defaults::HISTORY_CAPACITY;
use crate::types::HistoryEntry;

/// Per-session score log, capped at 20 entries.
#[derive(Debug, Clone)]
pub struct SessionHistory {
    entries: VecDeque<HistoryEntry>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Append a score stamped with the current time.
    pub fn record(&mut self, score: f64) {
        self.record_at(Utc::now(), score);
    }

    /// Append a score with an explicit timestamp.
    pub fn record_at(&mut self, timestamp: DateTime<Utc>, score: f64) {
        self.entries.push_back(HistoryEntry { timestamp, score });

        // Evict oldest if over limit
        while self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        trace!(len = self.entries.len(), score, "History entry recorded");
    }

    /// Oldest-first snapshot for reporting.
    pub fn read(&self) -> Vec<HistoryEntry> {
        self.entries.iter().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn starts_empty() {
        let history = SessionHistory::new();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }

    #[test]
    fn keeps_last_twenty_oldest_first() {
        let mut history = SessionHistory::new();
        for i in 0..25 {
            history.record(f64::from(i));
        }
        let scores: Vec<f64> = history.read().iter().map(|e| e.score).collect();
        let expected: Vec<f64> = (5..25).map(f64::from).collect();
        assert_eq!(scores, expected);
    }

    #[test]
    fn eviction_follows_insertion_not_timestamp() {
        let base = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let mut history = SessionHistory::new();
        // First entry carries the newest timestamp; it is still evicted first.
        history.record_at(base + Duration::days(365), 99.0);
        for i in 0..20 {
            history.record_at(base + Duration::minutes(i64::from(i)), f64::from(i));
        }
        assert_eq!(history.len(), 20);
        assert!(history.iter().all(|e| e.score != 99.0));
        assert_eq!(history.latest().map(|e| e.score), Some(19.0));
    }
}
