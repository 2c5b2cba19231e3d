//! Classify glyphs (`-F`)

use crate::listing::{FileKind, Mode};

/// The glyph appended after a name, if its type has one.
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
