//! Path building for directory listing

use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use crate::error::ListError;

/// Longest path, in bytes, the lister will build.
pub const PATH_MAX: usize = 4096;

/// The directory path with exactly one trailing `/`, ready for child names.
///
/// Fails when the base path leaves no room for a separator and a name.
pub fn listing_prefix(base: &Path) -> Result<OsString, ListError> {
    let bytes = base.as_os_str().as_bytes();
    if bytes.len() >= PATH_MAX - 1 {
        return Err(ListError::PathTooLong {
            path: base.to_path_buf(),
        });
    }
    let mut prefix = base.as_os_str().to_os_string();
    if !bytes.ends_with(b"/") {
        prefix.push("/");
    }
    Ok(prefix)
}

/// Append a child name to a prefix from [`listing_prefix`].
pub fn child_path(prefix: &OsStr, name: &OsStr) -> Result<PathBuf, ListError> {
    let mut path = prefix.to_os_string();
    path.push(name);
    if path.len() > PATH_MAX {
        return Err(ListError::PathTooLong { path: path.into() });
    }
    Ok(PathBuf::from(path))
}
