//! Type indicators and colors for entry names

use std::ffi::OsStr;
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::metadata::{FileKind, Mode};

/// The `-F` suffix for an entry, if its type has one.
pub fn type_indicator(mode: Mode) -> Option<char> {
    match mode.kind() {
        FileKind::Regular if mode.is_executable() => Some('*'),
        FileKind::Directory => Some('/'),
        FileKind::Symlink => Some('@'),
        FileKind::Fifo => Some('|'),
        FileKind::Socket => Some('='),
        _ => None,
    }
}

/// Pick the color for a name.
///
/// `link_ok` is false for a symlink whose target does not resolve; that wins
/// over anything the mode says. An empty `ColorSpec` means default colors, which
/// still resets the terminal before the name is written.
pub fn color_for(mode: Mode, link_ok: bool) -> ColorSpec {
    if !link_ok {
        return fg(Color::Red);
    }
    match mode.kind() {
        FileKind::Regular => {
            if mode.is_setuid() {
                fg_bg(Color::White, Color::Red)
            } else if mode.is_setgid() {
                fg_bg(Color::Black, Color::Yellow)
            } else if mode.is_executable() {
                bold(Color::Green)
            } else {
                ColorSpec::new()
            }
        }
        FileKind::Directory => match (mode.is_sticky(), mode.is_world_writable()) {
            (true, true) => fg_bg(Color::Black, Color::Green),
            (false, true) => fg_bg(Color::Blue, Color::Green),
            (true, false) => fg_bg(Color::White, Color::Blue),
            (false, false) => bold(Color::Blue),
        },
        FileKind::Symlink => bold(Color::Cyan),
        FileKind::Fifo => fg(Color::Yellow),
        FileKind::Socket => bold(Color::Magenta),
        FileKind::BlockDevice | FileKind::CharDevice => bold(Color::Yellow),
        FileKind::Unknown => ColorSpec::new(),
    }
}

/// Write `name` wrapped in its color and an unconditional reset.
pub fn write_colored_name<W: WriteColor>(
    out: &mut W,
    name: &OsStr,
    mode: Mode,
    link_ok: bool,
) -> io::Result<()> {
    out.set_color(&color_for(mode, link_ok))?;
    out.write_all(name.as_bytes())?;
    out.reset()
}

fn fg(color: Color) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color));
    spec
}

fn bold(color: Color) -> ColorSpec {
    let mut spec = fg(color);
    spec.set_bold(true);
    spec
}

fn fg_bg(fore: Color, back: Color) -> ColorSpec {
    let mut spec = fg(fore);
    spec.set_bg(Some(back));
    spec
}
