//! Bounded calculation history
//!
//! Entries are kept most-recent-first. Once the ledger is full, recording a
//! new entry evicts the oldest one. Entries are never edited or removed
//! individually.

use crate::time::{SystemTimeProvider, TimeProvider};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Maximum number of retained history entries
pub const HISTORY_CAPACITY: usize = 50;

/// A completed calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Unique within the process
    pub id: String,
    /// Human-readable expression, e.g. `5 + 3 =` or `sqrt(9)`
    pub expression: String,
    pub result: String,
    /// Milliseconds since Unix epoch
    pub timestamp: i64,
}

/// Append-only, capacity-bounded history log
#[derive(Debug)]
pub struct HistoryLedger<T: TimeProvider = SystemTimeProvider> {
    entries: Vec<HistoryEntry>,
    capacity: usize,
    clock: T,
}

impl HistoryLedger {
    /// Ledger with the default capacity, stamped by the system clock
    pub fn new() -> Self {
        Self::with_clock(SystemTimeProvider)
    }
}

impl Default for HistoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TimeProvider> HistoryLedger<T> {
    pub fn with_clock(clock: T) -> Self {
        Self::with_capacity(HISTORY_CAPACITY, clock)
    }

    /// Create a ledger holding at most `capacity` entries (minimum 1)
    pub fn with_capacity(capacity: usize, clock: T) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity + 1),
            capacity,
            clock,
        }
    }

    /// Record a completed calculation and return the new entry
    pub fn record(
        &mut self,
        expression: impl Into<String>,
        result: impl Into<String>,
    ) -> &HistoryEntry {
        let entry = HistoryEntry {
            id: Uuid::new_v4().to_string(),
            expression: expression.into(),
            result: result.into(),
            timestamp: self.clock.now_millis(),
        };

        debug!(
            id = %entry.id,
            expression = %entry.expression,
            result = %entry.result,
            "history record"
        );

        self.entries.insert(0, entry);
        if self.entries.len() > self.capacity {
            let evicted = self.entries.len() - self.capacity;
            self.entries.truncate(self.capacity);
            debug!(evicted, capacity = self.capacity, "history full, evicted oldest");
        }

        &self.entries[0]
    }

    /// All entries, most recent first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
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

impl<'a, T: TimeProvider> IntoIterator for &'a HistoryLedger<T> {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedTimeProvider;
    use std::collections::HashSet;

    #[test]
    fn test_record_prepends() {
        let mut ledger = HistoryLedger::with_clock(FixedTimeProvider::new(1_000));
        ledger.record("1 + 1 =", "2");
        ledger.record("2 + 2 =", "4");

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.entries()[0].expression, "2 + 2 =");
        assert_eq!(ledger.entries()[1].expression, "1 + 1 =");
        assert_eq!(ledger.latest().map(|e| e.result.as_str()), Some("4"));
    }

    #[test]
    fn test_timestamp_from_clock() {
        let mut ledger = HistoryLedger::with_clock(FixedTimeProvider::new(1_700_000_000_000));
        let entry = ledger.record("sqrt(9)", "3");
        assert_eq!(entry.timestamp, 1_700_000_000_000);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut ledger = HistoryLedger::with_capacity(3, FixedTimeProvider::new(0));
        for i in 0..5 {
            ledger.record(format!("{} + 0 =", i), i.to_string());
        }

        let results: Vec<&str> = ledger.iter().map(|e| e.result.as_str()).collect();
        assert_eq!(results, vec!["4", "3", "2"]);
    }

    #[test]
    fn test_zero_capacity_keeps_latest() {
        let mut ledger = HistoryLedger::with_capacity(0, FixedTimeProvider::new(0));
        ledger.record("a", "1");
        ledger.record("b", "2");
        assert_eq!(ledger.capacity(), 1);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.entries()[0].expression, "b");
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ledger = HistoryLedger::with_clock(FixedTimeProvider::new(0));
        for _ in 0..HISTORY_CAPACITY {
            ledger.record("1 + 1 =", "2");
        }
        let ids: HashSet<&str> = ledger.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), HISTORY_CAPACITY);
    }

    #[test]
    fn test_entry_json_shape() {
        let entry = HistoryEntry {
            id: "abc".to_string(),
            expression: "5 + 3 =".to_string(),
            result: "8".to_string(),
            timestamp: 42,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["expression"], "5 + 3 =");
        assert_eq!(json["timestamp"], 42);
    }
}
