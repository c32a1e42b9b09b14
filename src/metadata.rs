//! Raw per-entry metadata as fetched from the filesystem
//!
//! This module turns `std::fs::Metadata` into the small set of fields the
//! listing needs: a `Mode` (file type tag plus permission and special bits),
//! link count, ownership, device numbers, size and modification time.

use std::fs;
use std::os::unix::fs::MetadataExt;

const S_IFMT: u32 = 0o170_000;
const S_IFSOCK: u32 = 0o140_000;
const S_IFLNK: u32 = 0o120_000;
const S_IFREG: u32 = 0o100_000;
const S_IFBLK: u32 = 0o060_000;
const S_IFDIR: u32 = 0o040_000;
const S_IFCHR: u32 = 0o020_000;
const S_IFIFO: u32 = 0o010_000;

pub const S_ISUID: u32 = 0o4000;
pub const S_ISGID: u32 = 0o2000;
pub const S_ISVTX: u32 = 0o1000;
pub const S_IRUSR: u32 = 0o400;
pub const S_IWUSR: u32 = 0o200;
pub const S_IXUSR: u32 = 0o100;
pub const S_IRGRP: u32 = 0o040;
pub const S_IWGRP: u32 = 0o020;
pub const S_IXGRP: u32 = 0o010;
pub const S_IROTH: u32 = 0o004;
pub const S_IWOTH: u32 = 0o002;
pub const S_IXOTH: u32 = 0o001;
/// Any execute bit.
pub const S_IXUGO: u32 = S_IXUSR | S_IXGRP | S_IXOTH;

/// File type tag decoded from the `S_IFMT` bits of a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    BlockDevice,
    CharDevice,
    Directory,
    Regular,
    Fifo,
    Symlink,
    Socket,
    Unknown,
}

impl FileKind {
    /// Decode the type bits of a raw `st_mode`.
    pub fn from_mode(mode: u32) -> Self {
        match mode & S_IFMT {
            S_IFBLK => FileKind::BlockDevice,
            S_IFCHR => FileKind::CharDevice,
            S_IFDIR => FileKind::Directory,
            S_IFREG => FileKind::Regular,
            S_IFIFO => FileKind::Fifo,
            S_IFLNK => FileKind::Symlink,
            S_IFSOCK => FileKind::Socket,
            _ => FileKind::Unknown,
        }
    }

    /// The leading character of a permission string.
    pub fn glyph(self) -> char {
        match self {
            FileKind::BlockDevice => 'b',
            FileKind::CharDevice => 'c',
            FileKind::Directory => 'd',
            FileKind::Regular => '-',
            FileKind::Fifo => 'p',
            FileKind::Symlink => 'l',
            FileKind::Socket => 's',
            FileKind::Unknown => '?',
        }
    }

    /// Character and block specials show device numbers instead of a size.
    pub fn is_device(self) -> bool {
        matches!(self, FileKind::BlockDevice | FileKind::CharDevice)
    }
}

/// A raw `st_mode` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mode(pub u32);

impl Mode {
    pub fn kind(self) -> FileKind {
        FileKind::from_mode(self.0)
    }

    /// True if every bit in `mask` is set.
    pub fn has(self, mask: u32) -> bool {
        self.0 & mask == mask
    }

    pub fn is_setuid(self) -> bool {
        self.has(S_ISUID)
    }

    pub fn is_setgid(self) -> bool {
        self.has(S_ISGID)
    }

    pub fn is_sticky(self) -> bool {
        self.has(S_ISVTX)
    }

    pub fn is_world_writable(self) -> bool {
        self.has(S_IWOTH)
    }

    /// Any of the owner, group or other execute bits.
    pub fn is_executable(self) -> bool {
        self.0 & S_IXUGO != 0
    }
}

/// The metadata fields shown for one listed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMeta {
    pub mode: Mode,
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
    pub rdev: u64,
    pub size: u64,
    /// Modification time in seconds since the Unix epoch.
    pub mtime: i64,
}

impl EntryMeta {
    pub fn kind(&self) -> FileKind {
        self.mode.kind()
    }
}

impl From<&fs::Metadata> for EntryMeta {
    fn from(meta: &fs::Metadata) -> Self {
        Self {
            mode: Mode(meta.mode()),
            nlink: meta.nlink(),
            uid: meta.uid(),
            gid: meta.gid(),
            rdev: meta.rdev(),
            size: meta.size(),
            mtime: meta.mtime(),
        }
    }
}
