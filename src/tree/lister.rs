//! EntryLister - lists the children of one directory

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::ListError;
use crate::metadata::{EntryMeta, FileKind};

use super::config::ListingConfig;
use super::entry::{LinkInfo, ListedEntry};
use super::filter::is_dot_entry;
use super::queue::PendingDir;
use super::traversal::ListingOutput;
use super::utils::{child_path, listing_prefix};

/// What listing a single directory produced.
#[derive(Debug, Default)]
pub struct DirListing {
    /// Subdirectories to splice into the work queue, in discovery order.
    pub subdirs: Vec<PendingDir>,
    pub entries: usize,
    pub errors: usize,
}

pub struct EntryLister<'a> {
    config: &'a ListingConfig,
}

impl<'a> EntryLister<'a> {
    pub fn new(config: &'a ListingConfig) -> Self {
        Self { config }
    }

    /// Emit one line per visible child of `dir`.
    ///
    /// Failures to open the directory or stat an entry are reported through
    /// `output` and skipped. The returned error is only for a failing sink.
    pub fn list<O: ListingOutput>(
        &self,
        dir: &PendingDir,
        output: &mut O,
    ) -> io::Result<DirListing> {
        let mut listing = DirListing::default();

        let read_dir = match fs::read_dir(&dir.path) {
            Ok(r) => r,
            Err(source) => {
                listing.report(
                    output,
                    ListError::OpenDir {
                        path: dir.path.clone(),
                        source,
                    },
                )?;
                return Ok(listing);
            }
        };

        let prefix = match listing_prefix(&dir.path) {
            Ok(p) => p,
            Err(e) => {
                listing.report(output, e)?;
                return Ok(listing);
            }
        };

        // read_dir skips the self and parent entries; put them back up front
        let names = [".", ".."]
            .into_iter()
            .map(|n| Ok::<_, io::Error>(OsString::from(n)))
            .chain(read_dir.map(|e| e.map(|e| e.file_name())));

        for name in names {
            let name = match name {
                Ok(n) => n,
                Err(source) => {
                    listing.report(
                        output,
                        ListError::ReadDir {
                            path: dir.path.clone(),
                            source,
                        },
                    )?;
                    break;
                }
            };

            if !self.config.hidden.is_shown(&name) {
                continue;
            }

            let path = match child_path(&prefix, &name) {
                Ok(p) => p,
                Err(e) => {
                    listing.report(output, e)?;
                    continue;
                }
            };

            let entry = match read_entry(&path, name) {
                Ok(entry) => entry,
                Err(e) => {
                    listing.report(output, e)?;
                    continue;
                }
            };

            // Only real directories are descended into, never symlinks to them
            if self.config.recursive
                && entry.meta.kind() == FileKind::Directory
                && !is_dot_entry(&entry.name)
            {
                tracing::debug!("queued {}", path.display());
                listing.subdirs.push(dir.child(&path));
            }

            output.entry(&entry)?;
            listing.entries += 1;
        }

        Ok(listing)
    }
}

impl DirListing {
    fn report<O: ListingOutput>(&mut self, output: &mut O, error: ListError) -> io::Result<()> {
        self.errors += 1;
        output.error(&error)
    }
}

/// Fetch link-aware metadata for one child, resolving it if it is a symlink.
fn read_entry(path: &Path, name: OsString) -> Result<ListedEntry, ListError> {
    let meta = fs::symlink_metadata(path)
        .map(|m| EntryMeta::from(&m))
        .map_err(|source| ListError::Stat {
            path: path.to_path_buf(),
            source,
        })?;

    let link = (meta.kind() == FileKind::Symlink).then(|| {
        let target = fs::read_link(path).ok().map(|t| t.into_os_string());
        let target_meta = fs::metadata(path).ok().map(|m| EntryMeta::from(&m));
        if target_meta.is_none() {
            tracing::trace!("broken link {}", path.display());
        }
        LinkInfo {
            target,
            target_meta,
        }
    });

    Ok(ListedEntry { name, meta, link })
}
