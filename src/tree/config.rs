//! Configuration types for directory listing

use std::time::{SystemTime, UNIX_EPOCH};

/// Half a 365-day year, in seconds.
pub const HALF_YEAR_SECS: i64 = 365 * 24 * 60 * 60 / 2;

/// Which dot-prefixed names are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HiddenPolicy {
    /// Hide every name starting with `.`
    #[default]
    Default,
    /// Show dot files but not `.` and `..`
    Almost,
    /// Show everything
    All,
}

/// Resolved listing options. Built once at startup and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct ListingConfig {
    pub hidden: HiddenPolicy,
    pub color: bool,
    pub classify: bool,
    pub long_format: bool,
    pub recursive: bool,
    /// Modification times at or before this (seconds since the epoch) show a
    /// year instead of a clock time. Only set together with `long_format`.
    pub half_year_cutoff: Option<i64>,
}

impl ListingConfig {
    /// Turn on long format, taking the half-year cutoff from `now`.
    pub fn with_long_format(mut self, now: SystemTime) -> Self {
        self.long_format = true;
        self.half_year_cutoff = Some(half_year_ago(now));
        self
    }
}

/// `now` minus [`HALF_YEAR_SECS`], as seconds since the epoch.
pub fn half_year_ago(now: SystemTime) -> i64 {
    let secs = match now.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        Err(e) => -(e.duration().as_secs() as i64),
    };
    secs - HALF_YEAR_SECS
}
