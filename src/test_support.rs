//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use crate::notify::{NotificationSink, NotifyKind, format_event};

/// A sink that keeps every event as `[KIND] message` for assertions.
#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }
}

impl NotificationSink for RecordingSink {
    fn name(&self) -> &str {
        "recording"
    }

    fn notify(&self, kind: NotifyKind, message: &str) {
        if let Ok(mut events) = self.events.lock() {
            events.push(format_event(kind, message));
        }
    }
}

/// Writes `contents` to `words.txt` in a fresh temp dir.
/// Keep the returned `TempDir` alive for as long as the file is needed.
pub fn write_word_list(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.txt");
    fs::write(&path, contents).unwrap();
    (dir, path)
}
