//! # Session Controller
//!
//! Owns all per-session state and runs the two user actions:
//! "find" and "undo remove" (the "not registered as word" button).
//!
//! ```text
//!              on_find ok
//!   Idle ─────────────────────▶ LastFindSucceeded
//!    ▲  ╲                            │      ▲
//!    │   ╲ on_find fails             │      │ on_find ok
//!    │    ▼                          │      │
//!    │   LastFindFailed ◀────────────┘──────┘
//!    │                     on_find fails
//!    └──────── on_undo ok (from any state with a pending match)
//! ```
//!
//! Neither action raises: every call returns an [`Outcome`] carrying a
//! display message. Removal is written to disk right away; if that write
//! fails the in-memory removal stands and the outcome carries a warning.

use std::fmt;

use log::{debug, info, warn};

use crate::core::matcher;
use crate::core::usage::UsageTracker;
use crate::core::word_store::{StoreError, WordStore};
use crate::notify::{NotificationSink, NotifyKind};

pub const MIN_PATTERN_LEN: usize = 2;
pub const MAX_PATTERN_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    LastFindSucceeded,
    LastFindFailed,
}

/// Recoverable failures of a user action.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionError {
    /// Pattern was not 2–4 alphabetic characters.
    InvalidPattern(String),
    /// No unused entry contains the pattern.
    NoMatch(String),
    /// Undo requested with nothing pending.
    NoUndoAvailable,
    /// The removal happened in memory but the file could not be written.
    PersistenceFailure(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidPattern(_) => write!(f, "Enter 2–4 letters only."),
            SessionError::NoMatch(_) => write!(f, "No new match found."),
            SessionError::NoUndoAvailable => write!(f, "No entry to remove."),
            SessionError::PersistenceFailure(msg) => write!(f, "Failed to save entries: {msg}"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Result of a user action, ready for display.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Found(String),
    Removed {
        entry: String,
        /// Set when the removal could not be persisted.
        warning: Option<SessionError>,
    },
    Failed(SessionError),
}

impl Outcome {
    /// Text the presentation layer shows in its result area.
    pub fn message(&self) -> String {
        match self {
            Outcome::Found(entry) => entry.clone(),
            Outcome::Removed { warning: None, .. } => "Entry removed.".to_string(),
            Outcome::Removed {
                warning: Some(w), ..
            } => format!("Entry removed. {w}"),
            Outcome::Failed(e) => e.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Failed(_))
    }
}

pub struct SessionController {
    store: WordStore,
    usage: UsageTracker,
    state: SessionState,
    sink: Box<dyn NotificationSink>,
}

impl SessionController {
    /// Start a session over a loaded store.
    ///
    /// An empty store is fatal: there is nothing to search.
    pub fn new(store: WordStore, sink: Box<dyn NotificationSink>) -> Result<Self, StoreError> {
        if store.is_empty() {
            warn!("Word list {} has no usable entries", store.path().display());
            sink.notify(NotifyKind::Error, "Word list has no usable entries.");
            return Err(StoreError::Empty(store.path().to_path_buf()));
        }

        sink.notify(
            NotifyKind::Success,
            &format!("Loaded {} entries from file.", store.len()),
        );
        info!(
            "Session started: {} entries, notifications via {}",
            store.len(),
            sink.name()
        );

        Ok(Self {
            store,
            usage: UsageTracker::new(),
            state: SessionState::Idle,
            sink,
        })
    }

    /// Look up the longest unused entry containing `pattern`.
    pub fn on_find(&mut self, pattern: &str) -> Outcome {
        let pattern = pattern.trim();

        if !is_valid_pattern(pattern) {
            debug!("Rejected pattern {:?}", pattern);
            self.state = SessionState::LastFindFailed;
            self.sink.notify(
                NotifyKind::Error,
                "Invalid input: pattern must be 2-4 letters.",
            );
            return Outcome::Failed(SessionError::InvalidPattern(pattern.to_string()));
        }

        match matcher::find(self.store.entries(), pattern, &self.usage).map(str::to_string) {
            Some(entry) => {
                info!("Pattern {:?} matched {:?}", pattern, entry);
                self.usage.mark_used(&entry);
                self.state = SessionState::LastFindSucceeded;
                self.sink
                    .notify(NotifyKind::Success, &format!("Found entry: {entry}"));
                Outcome::Found(entry)
            }
            None => {
                info!("Pattern {:?} matched nothing new", pattern);
                self.usage.clear_last_match();
                self.state = SessionState::LastFindFailed;
                self.sink.notify(
                    NotifyKind::Error,
                    &format!("No match found for pattern: {pattern}"),
                );
                Outcome::Failed(SessionError::NoMatch(pattern.to_string()))
            }
        }
    }

    /// Delete the last matched entry from the list and its file.
    pub fn on_undo(&mut self) -> Outcome {
        let Some(entry) = self
            .usage
            .undo_eligible()
            .filter(|e| self.store.contains(e))
            .map(str::to_string)
        else {
            debug!("Undo requested with nothing pending");
            self.sink
                .notify(NotifyKind::Error, "No entry to remove on undo.");
            return Outcome::Failed(SessionError::NoUndoAvailable);
        };

        self.store.remove(&entry);
        let warning = match self.store.save() {
            Ok(()) => {
                self.sink.notify(
                    NotifyKind::Success,
                    &format!("Saved {} entries to file.", self.store.len()),
                );
                None
            }
            Err(e) => {
                warn!("Failed to persist removal of {:?}: {}", entry, e);
                self.sink.notify(NotifyKind::Error, "Failed to save entries.");
                Some(SessionError::PersistenceFailure(e.to_string()))
            }
        };

        self.usage.consume_undo(&entry);
        self.state = SessionState::Idle;
        info!("Removed {:?} from word list", entry);
        self.sink
            .notify(NotifyKind::Success, &format!("Removed entry: {entry}"));

        Outcome::Removed { entry, warning }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn undo_eligible(&self) -> Option<&str> {
        self.usage.undo_eligible()
    }

    pub fn store(&self) -> &WordStore {
        &self.store
    }

    pub fn used_count(&self) -> usize {
        self.usage.used_count()
    }

    /// Entries not yet handed out this session.
    pub fn remaining(&self) -> usize {
        self.store
            .entries()
            .iter()
            .filter(|e| !self.usage.is_used(e))
            .count()
    }
}

/// 2–4 characters, all alphabetic.
pub fn is_valid_pattern(pattern: &str) -> bool {
    let len = pattern.chars().count();
    (MIN_PATTERN_LEN..=MAX_PATTERN_LEN).contains(&len) && pattern.chars().all(char::is_alphabetic)
}
