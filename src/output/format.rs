//! Metadata-to-text formatting for long-format listings

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

use crate::accounts::AccountNames;
use crate::metadata::{
    Mode, S_IRGRP, S_IROTH, S_IRUSR, S_ISGID, S_ISUID, S_ISVTX, S_IWGRP, S_IWOTH, S_IWUSR,
    S_IXGRP, S_IXOTH, S_IXUSR,
};

/// Render a mode as a 10-character `ls -l` style string, e.g. `drwxr-xr-x`.
pub fn format_permissions(mode: Mode) -> String {
    let bit = |mask: u32, c: char| if mode.has(mask) { c } else { '-' };
    // Execute slot doubling as a special-bit slot: lower case when executable.
    let exec = |x: u32, special: u32, set: char, unset: char| {
        match (mode.has(special), mode.has(x)) {
            (true, true) => set,
            (true, false) => unset,
            (false, true) => 'x',
            (false, false) => '-',
        }
    };

    let mut s = String::with_capacity(10);
    s.push(mode.kind().glyph());
    s.push(bit(S_IRUSR, 'r'));
    s.push(bit(S_IWUSR, 'w'));
    s.push(exec(S_IXUSR, S_ISUID, 's', 'S'));
    s.push(bit(S_IRGRP, 'r'));
    s.push(bit(S_IWGRP, 'w'));
    s.push(exec(S_IXGRP, S_ISGID, 's', 'S'));
    s.push(bit(S_IROTH, 'r'));
    s.push(bit(S_IWOTH, 'w'));
    s.push(exec(S_IXOTH, S_ISVTX, 't', 'T'));
    s
}

/// Owner name, or the numeric uid when the lookup fails.
pub fn format_owner(uid: u32, accounts: &impl AccountNames) -> String {
    accounts.user_name(uid).unwrap_or_else(|| uid.to_string())
}

/// Group name, or the numeric gid when the lookup fails.
pub fn format_group(gid: u32, accounts: &impl AccountNames) -> String {
    accounts.group_name(gid).unwrap_or_else(|| gid.to_string())
}

/// Format a modification time in the local time zone.
///
/// Times strictly newer than `cutoff` render as `MM/DD HH:MM`, older ones as
/// `MM/DD  YYYY`.
pub fn format_timestamp(mtime: i64, cutoff: i64) -> String {
    format_timestamp_in(mtime, cutoff, &Local)
}

/// Same as [`format_timestamp`] in an explicit time zone.
pub fn format_timestamp_in<Tz>(mtime: i64, cutoff: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(utc) = DateTime::from_timestamp(mtime, 0) else {
        return format!("{:>11}", mtime);
    };
    let local = utc.with_timezone(tz);
    if mtime > cutoff {
        local.format("%m/%d %H:%M").to_string()
    } else {
        local.format("%m/%d  %Y").to_string()
    }
}

/// `major,minor` for character and block special files, each 4 wide.
pub fn format_device_numbers(rdev: u64) -> String {
    format!("{:>4},{:>4}", major(rdev), minor(rdev))
}

/// Extracts the major device number from a combined rdev value.
#[cfg(target_os = "linux")]
pub const fn major(rdev: u64) -> u32 {
    ((rdev >> 8) & 0xfff) as u32 | (((rdev >> 32) & !0xfff) as u32)
}

#[cfg(not(target_os = "linux"))]
pub const fn major(rdev: u64) -> u32 {
    ((rdev >> 24) & 0xff) as u32
}

/// Extracts the minor device number from a combined rdev value.
#[cfg(target_os = "linux")]
pub const fn minor(rdev: u64) -> u32 {
    (rdev & 0xff) as u32 | (((rdev >> 12) & !0xff) as u32)
}

#[cfg(not(target_os = "linux"))]
pub const fn minor(rdev: u64) -> u32 {
    (rdev & 0xff_ffff) as u32
}
