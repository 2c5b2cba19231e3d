//! Name coloring by file type

use termcolor::{Color, ColorSpec};

use crate::listing::{FileKind, Mode, S_ISGID, S_ISUID, S_ISVTX, S_IWOTH};

/// How a name is styled in color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStyle {
    /// Symlink whose target does not resolve (red)
    Broken,
    /// Setuid regular file (white on red)
    Setuid,
    /// Setgid regular file (black on yellow)
    Setgid,
    /// Executable regular file (bold green)
    Executable,
    /// Other regular files (terminal default)
    Plain,
    /// Sticky and other-writable directory (black on green)
    StickyOtherWritable,
    /// Other-writable directory (blue on green)
    OtherWritable,
    /// Sticky directory (white on blue)
    Sticky,
    /// Bold blue
    Directory,
    /// Bold cyan
    Symlink,
    /// Yellow
    Fifo,
    /// Bold magenta
    Socket,
    /// Block or character device (bold yellow)
    Device,
    /// Unrecognized type, printed without touching the current style
    Unstyled,
}

impl NameStyle {
    /// Pick the style for a name. A broken link wins over every type rule.
    pub fn for_mode(mode: Mode, link_ok: bool) -> Self {
        if !link_ok {
            return NameStyle::Broken;
        }
        match mode.kind() {
            FileKind::Regular if mode.has(S_ISUID) => NameStyle::Setuid,
            FileKind::Regular if mode.has(S_ISGID) => NameStyle::Setgid,
            FileKind::Regular if mode.is_executable() => NameStyle::Executable,
            FileKind::Regular => NameStyle::Plain,
            FileKind::Directory => match (mode.has(S_ISVTX), mode.has(S_IWOTH)) {
                (true, true) => NameStyle::StickyOtherWritable,
                (false, true) => NameStyle::OtherWritable,
                (true, false) => NameStyle::Sticky,
                (false, false) => NameStyle::Directory,
            },
            FileKind::Symlink => NameStyle::Symlink,
            FileKind::Fifo => NameStyle::Fifo,
            FileKind::Socket => NameStyle::Socket,
            FileKind::BlockDevice | FileKind::CharDevice => NameStyle::Device,
            FileKind::Unknown => NameStyle::Unstyled,
        }
    }

    /// The color to set before the name, or `None` to leave it untouched.
    /// `Plain` maps to an empty spec, which resets to the terminal default.
    pub fn spec(&self) -> Option<ColorSpec> {
        let mut spec = ColorSpec::new();
        match self {
            NameStyle::Broken => spec.set_fg(Some(Color::Red)),
            NameStyle::Setuid => spec.set_fg(Some(Color::White)).set_bg(Some(Color::Red)),
            NameStyle::Setgid => spec.set_fg(Some(Color::Black)).set_bg(Some(Color::Yellow)),
            NameStyle::Executable => spec.set_fg(Some(Color::Green)).set_bold(true),
            NameStyle::Plain => &mut spec,
            NameStyle::StickyOtherWritable => {
                spec.set_fg(Some(Color::Black)).set_bg(Some(Color::Green))
            }
            NameStyle::OtherWritable => spec.set_fg(Some(Color::Blue)).set_bg(Some(Color::Green)),
            NameStyle::Sticky => spec.set_fg(Some(Color::White)).set_bg(Some(Color::Blue)),
            NameStyle::Directory => spec.set_fg(Some(Color::Blue)).set_bold(true),
            NameStyle::Symlink => spec.set_fg(Some(Color::Cyan)).set_bold(true),
            NameStyle::Fifo => spec.set_fg(Some(Color::Yellow)),
            NameStyle::Socket => spec.set_fg(Some(Color::Magenta)).set_bold(true),
            NameStyle::Device => spec.set_fg(Some(Color::Yellow)).set_bold(true),
            NameStyle::Unstyled => return None,
        };
        Some(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(mode: u32) -> NameStyle {
        NameStyle::for_mode(Mode(mode), true)
    }

    #[test]
    fn test_broken_link_overrides_type() {
        for mode in [0o120777, 0o040755, 0o104755, 0] {
            assert_eq!(NameStyle::for_mode(Mode(mode), false), NameStyle::Broken);
        }
    }

    #[test]
    fn test_regular_file_styles() {
        assert_eq!(style(0o106755), NameStyle::Setuid);
        assert_eq!(style(0o102755), NameStyle::Setgid);
        assert_eq!(style(0o100700), NameStyle::Executable);
        assert_eq!(style(0o100644), NameStyle::Plain);
    }

    #[test]
    fn test_directory_styles() {
        assert_eq!(style(0o041777), NameStyle::StickyOtherWritable);
        assert_eq!(style(0o040777), NameStyle::OtherWritable);
        assert_eq!(style(0o041755), NameStyle::Sticky);
        assert_eq!(style(0o040755), NameStyle::Directory);
    }

    #[test]
    fn test_other_type_styles() {
        assert_eq!(style(0o120777), NameStyle::Symlink);
        assert_eq!(style(0o010644), NameStyle::Fifo);
        assert_eq!(style(0o140755), NameStyle::Socket);
        assert_eq!(style(0o060660), NameStyle::Device);
        assert_eq!(style(0o020620), NameStyle::Device);
        assert_eq!(style(0o000644), NameStyle::Unstyled);
    }

    #[test]
    fn test_specs() {
        assert_eq!(NameStyle::Unstyled.spec(), None);
        assert!(NameStyle::Plain.spec().is_some_and(|s| s.is_none()));

        let dir = NameStyle::Directory.spec().unwrap();
        assert_eq!(dir.fg(), Some(&Color::Blue));
        assert!(dir.bold());

        let setuid = NameStyle::Setuid.spec().unwrap();
        assert_eq!(setuid.fg(), Some(&Color::White));
        assert_eq!(setuid.bg(), Some(&Color::Red));

        let broken = NameStyle::Broken.spec().unwrap();
        assert_eq!(broken.fg(), Some(&Color::Red));
        assert!(!broken.bold());
    }
}
