//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::io;
use std::os::unix::fs::{PermissionsExt, symlink};
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::ListError;
use crate::tree::{ListedEntry, ListingOutput};

/// A temporary directory tree for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Create `link` pointing at `target`, which is stored verbatim.
    pub fn add_symlink(&self, target: &str, link: &str) -> PathBuf {
        let full_path = self.dir.path().join(link);
        symlink(target, &full_path).expect("Failed to create symlink");
        full_path
    }

    pub fn set_mode(&self, path: &str, mode: u32) {
        let full_path = self.dir.path().join(path);
        fs::set_permissions(&full_path, fs::Permissions::from_mode(mode))
            .expect("Failed to set permissions");
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// One call made on a [`RecordingOutput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Header(PathBuf),
    Entry(String),
    Error(String),
}

/// Collects listing events in order instead of printing them.
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub events: Vec<Event>,
    pub entries: Vec<ListedEntry>,
}

impl RecordingOutput {
    /// Entry names in emission order.
    pub fn names(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Entry(name) => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Error(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn find_entry(&self, name: &str) -> Option<&ListedEntry> {
        self.entries.iter().find(|e| e.display_name() == name)
    }
}

impl ListingOutput for RecordingOutput {
    fn header(&mut self, path: &Path) -> io::Result<()> {
        self.events.push(Event::Header(path.to_path_buf()));
        Ok(())
    }

    fn entry(&mut self, entry: &ListedEntry) -> io::Result<()> {
        self.events.push(Event::Entry(entry.display_name()));
        self.entries.push(entry.clone());
        Ok(())
    }

    fn error(&mut self, error: &ListError) -> io::Result<()> {
        self.events.push(Event::Error(error.to_string()));
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}
