//! # Matcher
//!
//! Picks the best unused entry for a pattern. Pure query, no side effects.
//!
//! An entry qualifies when its folded text contains the folded pattern and
//! it has not been handed out yet. Among qualifying entries the longest one
//! (by character count) wins; on a tie the one earliest in the list wins.

use crate::core::usage::{UsageTracker, fold};

/// Returns the longest unused entry containing `pattern`, if any.
pub fn find<'a>(entries: &'a [String], pattern: &str, usage: &UsageTracker) -> Option<&'a str> {
    let needle = fold(pattern);
    let mut best: Option<(&'a str, usize)> = None;

    for entry in entries {
        if !fold(entry).contains(&needle) || usage.is_used(entry) {
            continue;
        }
        let len = entry.chars().count();
        // Strictly greater keeps the earliest entry on ties
        if best.is_none_or(|(_, best_len)| len > best_len) {
            best = Some((entry.as_str(), len));
        }
    }

    best.map(|(entry, _)| entry)
}
