//! lsq - list directory contents, optionally recursing through a splice-ordered work queue

pub mod accounts;
pub mod error;
pub mod metadata;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use accounts::{AccountNames, NumericAccounts, SystemAccounts};
pub use error::ListError;
pub use metadata::{EntryMeta, FileKind, Mode};
pub use output::LineFormatter;
pub use tree::{DirWalker, HiddenPolicy, ListingConfig, ListingOutput, TraversalStats};
