//! Directory traversal logic
//!
//! This module walks a directory tree and feeds each listed entry to a
//! `ListingOutput`:
//!
//! - `DirWalker`: owns the work queue and visits one directory at a time
//! - `EntryLister`: enumerates, filters and stats the children of one directory

mod config;
mod entry;
mod filter;
mod lister;
mod queue;
mod traversal;
mod utils;

// Re-export public types
pub use config::{HALF_YEAR_SECS, HiddenPolicy, ListingConfig, half_year_ago};
pub use entry::{LinkInfo, ListedEntry};
pub use filter::is_dot_entry;
pub use lister::{DirListing, EntryLister};
pub use queue::{PendingDir, WorkQueue};
pub use traversal::{DirWalker, ListingOutput, TraversalStats};
pub use utils::{PATH_MAX, child_path, listing_prefix};
