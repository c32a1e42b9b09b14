//! Per-entry data handed from the lister to the output side

use std::ffi::OsString;

use crate::metadata::{EntryMeta, Mode};

/// Symlink details gathered while listing.
#[derive(Debug, Clone)]
pub struct LinkInfo {
    /// Link text from `readlink`, `None` if it could not be read.
    pub target: Option<OsString>,
    /// Metadata of whatever the link points at, `None` for a broken link.
    pub target_meta: Option<EntryMeta>,
}

impl LinkInfo {
    pub fn is_resolvable(&self) -> bool {
        self.target_meta.is_some()
    }
}

/// One child of a listed directory. Built, printed, then dropped.
#[derive(Debug, Clone)]
pub struct ListedEntry {
    pub name: OsString,
    /// Link-aware metadata; describes the link itself for symlinks.
    pub meta: EntryMeta,
    pub link: Option<LinkInfo>,
}

impl ListedEntry {
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().to_string()
    }

    /// False only for a symlink whose target does not resolve.
    pub fn link_ok(&self) -> bool {
        self.link.as_ref().is_none_or(LinkInfo::is_resolvable)
    }

    /// Mode used to color the `-> target` suffix.
    pub fn target_mode(&self) -> Mode {
        self.link
            .as_ref()
            .and_then(|l| l.target_meta)
            .map(|m| m.mode)
            .unwrap_or(self.meta.mode)
    }
}
