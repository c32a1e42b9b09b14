//! Work queue of directories waiting to be listed
//!
//! Subdirectories found while scanning a directory are spliced in directly
//! after that directory's own slot, in discovery order. Since the directory
//! being scanned was just popped from the front, that slot is the front of
//! the remaining queue. The result is neither breadth-first nor depth-first:
//! each directory's children run as one contiguous block ahead of anything
//! that was already waiting.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// A directory awaiting traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDir {
    pub path: PathBuf,
    /// Nesting level below the starting argument; the root is 0.
    pub depth: usize,
}

impl PendingDir {
    pub fn root(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            depth: 0,
        }
    }

    /// A child of this directory, one level deeper.
    pub fn child(&self, path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            depth: self.depth + 1,
        }
    }

    pub fn is_root(&self) -> bool {
        self.depth == 0
    }
}

#[derive(Debug, Default)]
pub struct WorkQueue {
    pending: VecDeque<PendingDir>,
}

impl WorkQueue {
    pub fn new(root: PendingDir) -> Self {
        Self {
            pending: VecDeque::from([root]),
        }
    }

    pub fn pop(&mut self) -> Option<PendingDir> {
        self.pending.pop_front()
    }

    /// Insert `children` right after the directory that was just popped,
    /// keeping their relative order.
    pub fn splice_children(&mut self, children: Vec<PendingDir>) {
        for child in children.into_iter().rev() {
            self.pending.push_front(child);
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
