//! Entry metadata reading
//!
//! Wraps `lstat`/`stat`/`readlink` behind [`MetadataSource`] and combines
//! their results into one [`EntryMetadata`] per directory entry.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

const S_IFMT: u32 = 0o170000;
const S_IFSOCK: u32 = 0o140000;
const S_IFLNK: u32 = 0o120000;
const S_IFREG: u32 = 0o100000;
const S_IFBLK: u32 = 0o060000;
const S_IFDIR: u32 = 0o040000;
const S_IFCHR: u32 = 0o020000;
const S_IFIFO: u32 = 0o010000;

pub const S_ISUID: u32 = 0o4000;
pub const S_ISGID: u32 = 0o2000;
pub const S_ISVTX: u32 = 0o1000;
pub const S_IXUGO: u32 = 0o111;
pub const S_IWOTH: u32 = 0o002;

/// File type, as encoded in the high bits of `st_mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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
    pub fn is_device(&self) -> bool {
        matches!(self, FileKind::BlockDevice | FileKind::CharDevice)
    }
}

/// Raw `st_mode` value: file type plus permission and special bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mode(pub u32);

impl Mode {
    pub fn kind(self) -> FileKind {
        match self.0 & S_IFMT {
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

    pub fn has(self, bits: u32) -> bool {
        self.0 & bits != 0
    }

    pub fn is_dir(self) -> bool {
        self.kind() == FileKind::Directory
    }

    pub fn is_symlink(self) -> bool {
        self.kind() == FileKind::Symlink
    }

    /// Any of the owner/group/other execute bits.
    pub fn is_executable(self) -> bool {
        self.has(S_IXUGO)
    }
}

/// The subset of `struct stat` the formatters use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatRecord {
    pub mode: Mode,
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
    /// Modification time, seconds since the Unix epoch
    pub mtime: i64,
    pub rdev: u64,
}

impl StatRecord {
    /// Major and minor device numbers of `rdev`.
    pub fn device_numbers(&self) -> (u32, u32) {
        let dev = self.rdev as libc::dev_t;
        (libc::major(dev) as u32, libc::minor(dev) as u32)
    }
}

impl From<&fs::Metadata> for StatRecord {
    fn from(meta: &fs::Metadata) -> Self {
        Self {
            mode: Mode(meta.mode()),
            nlink: meta.nlink(),
            uid: meta.uid(),
            gid: meta.gid(),
            size: meta.size(),
            mtime: meta.mtime(),
            rdev: meta.rdev(),
        }
    }
}

/// Source of filesystem metadata.
///
/// The lister only touches metadata through this trait, so alternate
/// sources can stand in for the real filesystem.
pub trait MetadataSource {
    /// Metadata of `path` itself, without following a final symlink.
    fn lstat(&self, path: &Path) -> io::Result<StatRecord>;

    /// Metadata of whatever `path` resolves to.
    fn stat(&self, path: &Path) -> io::Result<StatRecord>;

    /// The target string stored in a symlink.
    fn read_link(&self, path: &Path) -> io::Result<PathBuf>;
}

/// Reads metadata from the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemMetadata;

impl MetadataSource for SystemMetadata {
    fn lstat(&self, path: &Path) -> io::Result<StatRecord> {
        fs::symlink_metadata(path).map(|m| StatRecord::from(&m))
    }

    fn stat(&self, path: &Path) -> io::Result<StatRecord> {
        fs::metadata(path).map(|m| StatRecord::from(&m))
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        fs::read_link(path)
    }
}

/// Everything printed for one directory entry. Lives for one output line.
#[derive(Debug, Clone)]
pub struct EntryMetadata {
    pub name: OsString,
    pub stat: StatRecord,
    /// Target string, for symlinks whose target could be read
    pub link_target: Option<PathBuf>,
    /// Metadata of the resolved target, for symlinks that resolve
    pub target_stat: Option<StatRecord>,
    /// False only for symlinks whose target does not resolve
    pub link_ok: bool,
}

impl EntryMetadata {
    pub fn mode(&self) -> Mode {
        self.stat.mode
    }

    /// Mode of the link target, or an empty mode when it is unresolved.
    pub fn target_mode(&self) -> Mode {
        self.target_stat.map(|s| s.mode).unwrap_or_default()
    }
}

/// Read the metadata for the entry `name` found at `path`.
///
/// Fails only when the entry itself cannot be `lstat`ed. Symlink resolution
/// failures degrade to `link_ok == false`.
pub fn read_entry<S: MetadataSource + ?Sized>(
    source: &S,
    path: &Path,
    name: OsString,
) -> io::Result<EntryMetadata> {
    let stat = source.lstat(path)?;

    let (link_target, target_stat) = if stat.mode.is_symlink() {
        let target = source
            .read_link(path)
            .ok()
            .filter(|t| !t.as_os_str().is_empty());
        (target, source.stat(path).ok())
    } else {
        (None, None)
    };
    let link_ok = !stat.mode.is_symlink() || target_stat.is_some();

    Ok(EntryMetadata {
        name,
        stat,
        link_target,
        target_stat,
        link_ok,
    })
}
