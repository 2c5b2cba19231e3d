//! `drwxr-xr-x` style permission strings

use crate::listing::{FileKind, Mode, S_ISGID, S_ISUID, S_ISVTX};

/// Single-character glyph for the file type column.
pub fn type_glyph(kind: FileKind) -> char {
    match kind {
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

/// Execute slot, overlaid by a special bit: lowercase when also executable.
fn exec_char(mode: Mode, exec_bit: u32, special_bit: u32, special: char) -> char {
    match (mode.has(special_bit), mode.has(exec_bit)) {
        (true, true) => special,
        (true, false) => special.to_ascii_uppercase(),
        (false, true) => 'x',
        (false, false) => '-',
    }
}

fn flag(mode: Mode, bit: u32, c: char) -> char {
    if mode.has(bit) { c } else { '-' }
}

/// Render the 10-character mode string.
pub fn mode_string(mode: Mode) -> String {
    [
        type_glyph(mode.kind()),
        flag(mode, 0o400, 'r'),
        flag(mode, 0o200, 'w'),
        exec_char(mode, 0o100, S_ISUID, 's'),
        flag(mode, 0o040, 'r'),
        flag(mode, 0o020, 'w'),
        exec_char(mode, 0o010, S_ISGID, 's'),
        flag(mode, 0o004, 'r'),
        flag(mode, 0o002, 'w'),
        exec_char(mode, 0o001, S_ISVTX, 't'),
    ]
    .iter()
    .collect()
}
