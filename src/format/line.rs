//! Assembles one output line per entry
//!
//! Names and link targets are written as raw bytes, so names that are
//! not valid UTF-8 come out exactly as stored on disk.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use termcolor::WriteColor;

use crate::config::ListConfig;
use crate::listing::EntryMetadata;

use super::color::NameStyle;
use super::indicator::type_indicator;
use super::owner::{OwnerNames, owner_field};
use super::permissions::mode_string;
use super::time::time_string;

/// Write a name. With a style, the color is reset afterwards.
fn write_name<W: WriteColor>(
    out: &mut W,
    name: &[u8],
    style: Option<NameStyle>,
) -> io::Result<()> {
    let Some(style) = style else {
        return out.write_all(name);
    };
    if let Some(spec) = style.spec() {
        out.set_color(&spec)?;
    }
    out.write_all(name)?;
    out.reset()
}

/// The long-format columns preceding the name, each followed by a space.
pub fn long_columns(entry: &EntryMetadata, half_year_ago: i64, names: &OwnerNames) -> String {
    let stat = &entry.stat;
    let mut line = mode_string(stat.mode);
    line.reserve(54);
    // Writing into a String cannot fail
    let _ = write!(line, " {:>3} ", stat.nlink);
    line.push_str(&owner_field(&names.user(stat.uid)));
    line.push_str(&owner_field(&names.group(stat.gid)));
    if stat.mode.kind().is_device() {
        let (major, minor) = stat.device_numbers();
        let _ = write!(line, "{:>4},{:>4} ", major, minor);
    } else {
        let _ = write!(line, "{:>9} ", stat.size);
    }
    line.push_str(&time_string(stat.mtime, half_year_ago));
    line.push(' ');
    line
}

/// Write the full line for one entry, including the trailing newline.
pub fn write_entry<W: WriteColor>(
    out: &mut W,
    entry: &EntryMetadata,
    config: &ListConfig,
    names: &OwnerNames,
) -> io::Result<()> {
    if let Some(long) = config.long_format {
        out.write_all(long_columns(entry, long.half_year_ago, names).as_bytes())?;
    }

    let style = config
        .color
        .then(|| NameStyle::for_mode(entry.mode(), entry.link_ok));
    write_name(out, entry.name.as_bytes(), style)?;

    if config.classify
        && let Some(glyph) = type_indicator(entry.mode())
    {
        write!(out, "{}", glyph)?;
    }

    if config.is_long()
        && let Some(target) = &entry.link_target
    {
        out.write_all(b" -> ")?;
        let style = config
            .color
            .then(|| NameStyle::for_mode(entry.target_mode(), entry.link_ok));
        write_name(out, target.as_os_str().as_bytes(), style)?;
    }

    writeln!(out)
}
