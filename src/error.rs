//! Errors reported while listing directories
//!
//! None of these abort a run. Each one is written as a single line to the
//! error stream and the affected directory or entry is skipped.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListError {
    /// A queued directory could not be opened for enumeration.
    #[error("{}: {source}", path.display())]
    OpenDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Enumeration failed part-way through a directory.
    #[error("{}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Link-aware metadata for a single entry could not be fetched.
    #[error("{}: {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: too long path", path.display())]
    PathTooLong { path: PathBuf },
}
