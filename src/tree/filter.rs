//! Hidden-file filtering for directory listing

use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

use super::config::HiddenPolicy;

impl HiddenPolicy {
    /// Check if a child name should be listed. Needs no metadata.
    pub fn is_shown(self, name: &OsStr) -> bool {
        match self {
            HiddenPolicy::All => true,
            HiddenPolicy::Almost => !is_dot_entry(name),
            HiddenPolicy::Default => !name.as_bytes().starts_with(b"."),
        }
    }
}

/// True for the `.` and `..` self/parent entries.
pub fn is_dot_entry(name: &OsStr) -> bool {
    matches!(name.as_bytes(), b"." | b"..")
}
