//! Line-per-entry output formatter
//!
//! `LineFormatter` implements `ListingOutput` for the traversal engine. It
//! writes entries and section headers to a color-capable sink and failures to
//! a separate error stream.

use std::ffi::OsStr;
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use termcolor::WriteColor;

use crate::accounts::AccountNames;
use crate::error::ListError;
use crate::tree::{ListedEntry, ListingConfig, ListingOutput, half_year_ago};

use super::decorate::{type_indicator, write_colored_name};
use super::format::{
    format_device_numbers, format_group, format_owner, format_permissions, format_timestamp,
};

/// Prefix for every line written to the error stream.
const ERROR_PREFIX: &str = "lsq";

pub struct LineFormatter<'a, W, E, A> {
    config: &'a ListingConfig,
    accounts: A,
    out: W,
    err: E,
    /// Half-year cutoff, present only in long format.
    cutoff: Option<i64>,
}

impl<'a, W, E, A> LineFormatter<'a, W, E, A>
where
    W: WriteColor,
    E: Write,
    A: AccountNames,
{
    pub fn new(config: &'a ListingConfig, accounts: A, out: W, err: E) -> Self {
        let cutoff = config.long_format.then(|| {
            config
                .half_year_cutoff
                .unwrap_or_else(|| half_year_ago(std::time::SystemTime::now()))
        });
        Self {
            config,
            accounts,
            out,
            err,
            cutoff,
        }
    }

    /// Give back the output and error sinks.
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }

    fn write_long_prefix(&mut self, entry: &ListedEntry) -> io::Result<()> {
        let meta = &entry.meta;
        write!(self.out, "{} ", format_permissions(meta.mode))?;
        write!(self.out, "{:>3} ", meta.nlink)?;
        write!(self.out, "{:>8} ", format_owner(meta.uid, &self.accounts))?;
        write!(self.out, "{:>8} ", format_group(meta.gid, &self.accounts))?;
        if meta.kind().is_device() {
            write!(self.out, "{} ", format_device_numbers(meta.rdev))?;
        } else {
            write!(self.out, "{:>9} ", meta.size)?;
        }
        // new() always sets the cutoff in long format
        if let Some(cutoff) = self.cutoff {
            write!(self.out, "{} ", format_timestamp(meta.mtime, cutoff))?;
        }
        Ok(())
    }

    fn write_name(&mut self, name: &OsStr, entry: &ListedEntry, target: bool) -> io::Result<()> {
        if !self.config.color {
            return self.out.write_all(name.as_bytes());
        }
        let mode = if target {
            entry.target_mode()
        } else {
            entry.meta.mode
        };
        write_colored_name(&mut self.out, name, mode, entry.link_ok())
    }
}

impl<W, E, A> ListingOutput for LineFormatter<'_, W, E, A>
where
    W: WriteColor,
    E: Write,
    A: AccountNames,
{
    fn header(&mut self, path: &Path) -> io::Result<()> {
        self.out.write_all(b"\n")?;
        self.out.write_all(path.as_os_str().as_bytes())?;
        self.out.write_all(b":\n")
    }

    fn entry(&mut self, entry: &ListedEntry) -> io::Result<()> {
        if self.config.long_format {
            self.write_long_prefix(entry)?;
        }

        self.write_name(&entry.name, entry, false)?;

        if self.config.classify {
            if let Some(c) = type_indicator(entry.meta.mode) {
                write!(self.out, "{}", c)?;
            }
        }

        if self.config.long_format {
            let target = entry
                .link
                .as_ref()
                .and_then(|l| l.target.as_ref())
                .filter(|t| !t.is_empty());
            if let Some(target) = target {
                write!(self.out, " -> ")?;
                self.write_name(target, entry, true)?;
            }
        }

        writeln!(self.out)
    }

    fn error(&mut self, error: &ListError) -> io::Result<()> {
        writeln!(self.err, "{}: {}", ERROR_PREFIX, error)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}
