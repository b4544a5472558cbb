//! # Usage Tracking
//!
//! Remembers which entries were already handed out this session, plus the
//! one entry that may still be taken back with an undo.
//!
//! Entries are tracked by their folded key (see [`fold`]), so `"Apple"` and
//! `"apple"` count as the same word for "already used" purposes. The undo
//! slot keeps the raw text, because removal from the word list is exact.
//!
//! Undo is a single slot, not a history: a new match overwrites it and a
//! failed find clears it.

use std::collections::HashSet;

/// Case-folds text for comparison. Both matching and used-set membership go
/// through this.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

#[derive(Debug, Default)]
pub struct UsageTracker {
    used: HashSet<String>,
    last_match: Option<String>,
}

impl UsageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `entry` as handed out and make it the undo candidate.
    pub fn mark_used(&mut self, entry: &str) {
        self.used.insert(fold(entry));
        self.last_match = Some(entry.to_string());
    }

    pub fn clear_last_match(&mut self) {
        self.last_match = None;
    }

    /// The entry a pending undo would remove, if any.
    pub fn undo_eligible(&self) -> Option<&str> {
        self.last_match.as_deref()
    }

    /// Evict `entry` from the used set and close the undo slot.
    pub fn consume_undo(&mut self, entry: &str) {
        self.used.remove(&fold(entry));
        self.last_match = None;
    }

    pub fn is_used(&self, entry: &str) -> bool {
        self.used.contains(&fold(entry))
    }

    pub fn used_count(&self) -> usize {
        self.used.len()
    }
}
