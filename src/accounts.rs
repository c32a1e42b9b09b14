//! User and group name resolution for long-format listings

use users::{Groups, Users, UsersCache};

/// Resolves numeric owner and group ids to account names.
pub trait AccountNames {
    fn user_name(&self, uid: u32) -> Option<String>;
    fn group_name(&self, gid: u32) -> Option<String>;
}

/// Looks names up in the system user and group databases.
///
/// Results are cached for the lifetime of the value, so a recursive listing
/// of a tree owned by one user hits the passwd database once.
pub struct SystemAccounts {
    cache: UsersCache,
}

impl SystemAccounts {
    pub fn new() -> Self {
        Self {
            cache: UsersCache::new(),
        }
    }
}

impl Default for SystemAccounts {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountNames for SystemAccounts {
    fn user_name(&self, uid: u32) -> Option<String> {
        self.cache
            .get_user_by_uid(uid)
            .map(|u| u.name().to_string_lossy().to_string())
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        self.cache
            .get_group_by_gid(gid)
            .map(|g| g.name().to_string_lossy().to_string())
    }
}

/// Never resolves anything; every id falls back to its number.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericAccounts;

impl AccountNames for NumericAccounts {
    fn user_name(&self, _uid: u32) -> Option<String> {
        None
    }

    fn group_name(&self, _gid: u32) -> Option<String> {
        None
    }
}
