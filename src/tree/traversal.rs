//! DirWalker - drives the work queue over a directory tree
//!
//! The walker owns the queue, pops one directory at a time and hands it to
//! the `EntryLister`. Subdirectories the lister finds are spliced back in
//! right after the directory that produced them. Only directories returned by
//! enumeration are ever queued, so symlinks are never followed and a link
//! cycle cannot make the walk run forever.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::ListError;

use super::config::ListingConfig;
use super::entry::ListedEntry;
use super::lister::EntryLister;
use super::queue::{PendingDir, WorkQueue};

/// Callback for listing output - receives headers, entries and failures.
pub trait ListingOutput {
    /// Section header for a non-root directory.
    fn header(&mut self, path: &Path) -> io::Result<()>;

    fn entry(&mut self, entry: &ListedEntry) -> io::Result<()>;

    /// A non-fatal failure for one directory or entry.
    fn error(&mut self, error: &ListError) -> io::Result<()>;

    fn finish(&mut self) -> io::Result<()>;
}

/// Totals for one walk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TraversalStats {
    pub directories: usize,
    pub entries: usize,
    pub errors: usize,
}

pub struct DirWalker<'a> {
    config: &'a ListingConfig,
}

impl<'a> DirWalker<'a> {
    pub fn new(config: &'a ListingConfig) -> Self {
        Self { config }
    }

    /// List `root` and, when recursive, every directory below it.
    ///
    /// Only a failing output sink ends the walk early.
    pub fn walk<O: ListingOutput>(
        &self,
        root: impl Into<PathBuf>,
        output: &mut O,
    ) -> io::Result<TraversalStats> {
        let lister = EntryLister::new(self.config);
        let mut queue = WorkQueue::new(PendingDir::root(root));
        let mut stats = TraversalStats::default();

        while let Some(dir) = queue.pop() {
            tracing::debug!(depth = dir.depth, "listing {}", dir.path.display());
            if !dir.is_root() {
                output.header(&dir.path)?;
            }

            let listing = lister.list(&dir, output)?;
            stats.directories += 1;
            stats.entries += listing.entries;
            stats.errors += listing.errors;

            queue.splice_children(listing.subdirs);
        }

        output.finish()?;
        tracing::debug!(
            directories = stats.directories,
            entries = stats.entries,
            errors = stats.errors,
            "walk finished"
        );
        Ok(stats)
    }
}
