//! # Word Store
//!
//! Owns the ordered word list and its backing file.
//!
//! The file format is plain text, one entry per line. On load, every line is
//! trimmed and blank lines are dropped. On save, each entry is written back
//! followed by a newline, in current list order.
//!
//! Writes use atomic rename (write a sibling `.tmp`, then `rename()`), so a
//! crash mid-save leaves the previous file intact.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

#[derive(Debug)]
pub enum StoreError {
    /// The word list path does not exist.
    NotFound(PathBuf),
    /// The file exists but holds no usable entries.
    Empty(PathBuf),
    /// Reading or writing the file failed.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            StoreError::Empty(path) => {
                write!(f, "No usable entries in {}", path.display())
            }
            StoreError::Io { path, source } => {
                write!(f, "I/O error on {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// The loaded word list plus the path it is persisted to.
#[derive(Debug, Clone)]
pub struct WordStore {
    path: PathBuf,
    entries: Vec<String>,
}

impl WordStore {
    /// Load entries from `path`.
    ///
    /// A file with no usable lines loads as an empty store; deciding whether
    /// that is fatal is up to the caller.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            return Err(StoreError::NotFound(path));
        }

        let contents = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        let entries = parse_entries(&contents);
        info!("Loaded {} entries from {}", entries.len(), path.display());

        Ok(Self { path, entries })
    }

    /// Build a store from in-memory entries without touching disk.
    pub fn from_entries(path: impl Into<PathBuf>, entries: Vec<String>) -> Self {
        Self {
            path: path.into(),
            entries,
        }
    }

    /// Overwrite the backing file with the current entries.
    pub fn save(&self) -> Result<(), StoreError> {
        let mut contents = String::with_capacity(self.entries.iter().map(|e| e.len() + 1).sum());
        for entry in &self.entries {
            contents.push_str(entry);
            contents.push('\n');
        }

        atomic_write(&self.path, &contents).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!("Saved {} entries to {}", self.entries.len(), self.path.display());
        Ok(())
    }

    /// Remove the first occurrence of `entry`. Returns false if it was absent.
    pub fn remove(&mut self, entry: &str) -> bool {
        match self.entries.iter().position(|e| e == entry) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.iter().any(|e| e == entry)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Trim every line and drop the blank ones.
fn parse_entries(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Write `contents` to a sibling temp file, then rename it over `path`.
fn atomic_write(path: &Path, contents: &str) -> io::Result<()> {
    let mut tmp_name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, contents)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    Ok(())
}
