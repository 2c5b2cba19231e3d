//! Directory lister and traversal driver
//!
//! The driver pops one [`PendingDirectory`] at a time, prints its header,
//! and lists it. Listing may discover subdirectories, which go back into
//! the queue directly after the directory that found them. Everything runs
//! on the calling thread in queue order.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::os::unix::ffi::OsStrExt;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use log::{debug, trace};
use termcolor::WriteColor;

use crate::config::{FilterPolicy, ListConfig, MAX_PATH};
use crate::error::{ListError, Result};
use crate::format::{OwnerNames, write_entry};

use super::filter::{is_dot_or_dotdot, is_hidden};
use super::metadata::{MetadataSource, SystemMetadata, read_entry};
use super::queue::{PendingDirectory, TraversalQueue};

/// Counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalSummary {
    /// Directories opened and listed
    pub directories: usize,
    /// Entry lines written
    pub entries: usize,
    /// Diagnostics written to the error stream
    pub errors: usize,
}

/// Lists a directory, and its subdirectories when recursive.
pub struct Lister<S = SystemMetadata> {
    config: ListConfig,
    source: S,
    names: OwnerNames,
}

impl Lister<SystemMetadata> {
    pub fn new(config: ListConfig) -> Self {
        Self {
            config,
            source: SystemMetadata,
            names: OwnerNames::new(),
        }
    }
}

impl<S: MetadataSource> Lister<S> {
    /// Read entry metadata through a different source.
    pub fn with_source<T: MetadataSource>(self, source: T) -> Lister<T> {
        Lister {
            config: self.config,
            source,
            names: self.names,
        }
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// List `root` and, when recursive, every directory below it.
    ///
    /// Entry lines go to `out`; diagnostics go to `diag`. Unreadable
    /// directories and entries are reported and skipped. Only a failure to
    /// write is returned as an error.
    pub fn run<O, E>(
        &self,
        root: impl Into<PathBuf>,
        out: &mut O,
        diag: &mut E,
    ) -> Result<TraversalSummary>
    where
        O: WriteColor,
        E: Write,
    {
        let mut summary = TraversalSummary::default();

        let mut queue = match PendingDirectory::root(root) {
            Ok(root) => TraversalQueue::seeded(root),
            Err(e) => {
                report(diag, &e, &mut summary)?;
                return Ok(summary);
            }
        };

        while let Some(dir) = queue.pop() {
            debug!("listing {} at depth {}", dir.path().display(), dir.depth());
            if dir.needs_header() {
                out.write_all(b"\n")?;
                out.write_all(dir.path().as_os_str().as_bytes())?;
                out.write_all(b":\n")?;
            }
            let children = self.list_dir(&dir, out, diag, &mut summary)?;
            queue.insert_after_current(children);
        }

        Ok(summary)
    }

    /// List one directory, returning the subdirectories to visit next.
    pub fn list_dir<O, E>(
        &self,
        dir: &PendingDirectory,
        out: &mut O,
        diag: &mut E,
        summary: &mut TraversalSummary,
    ) -> Result<Vec<PendingDirectory>>
    where
        O: WriteColor,
        E: Write,
    {
        let base = dir.path();
        let read_dir = match fs::read_dir(base) {
            Ok(r) => r,
            Err(source) => {
                let err = ListError::OpenDir {
                    path: base.to_path_buf(),
                    source,
                };
                report(diag, &err, summary)?;
                return Ok(Vec::new());
            }
        };

        let base_len = base.as_os_str().len();
        if base_len >= MAX_PATH - 1 {
            let err = ListError::PathTooLong {
                path: base.to_path_buf(),
            };
            report(diag, &err, summary)?;
            return Ok(Vec::new());
        }
        let prefix_len = if ends_with_separator(base) {
            base_len
        } else {
            base_len + 1
        };

        summary.directories += 1;

        // read_dir never yields the self and parent links
        let dots: &[&str] = match self.config.filter {
            FilterPolicy::All => &[".", ".."],
            _ => &[],
        };
        let names = dots
            .iter()
            .map(|d| Ok(OsString::from(*d)))
            .chain(read_dir.map(|r| r.map(|e| e.file_name())));

        let mut children = Vec::new();
        for name in names {
            let name = match name {
                Ok(n) => n,
                Err(source) => {
                    let err = ListError::Metadata {
                        path: base.to_path_buf(),
                        source,
                    };
                    report(diag, &err, summary)?;
                    break;
                }
            };

            if is_hidden(&name, self.config.filter) {
                trace!("hiding {}", name.to_string_lossy());
                continue;
            }

            let path = base.join(&name);
            if prefix_len + name.len() > MAX_PATH {
                report(diag, &ListError::PathTooLong { path }, summary)?;
                continue;
            }

            let entry = match read_entry(&self.source, &path, name) {
                Ok(e) => e,
                Err(source) => {
                    report(diag, &ListError::Metadata { path, source }, summary)?;
                    continue;
                }
            };

            if self.config.recursive && entry.mode().is_dir() && !is_dot_or_dotdot(&entry.name) {
                match PendingDirectory::new(path, dir.depth() + 1) {
                    Ok(child) => {
                        debug!("queueing {}", child.path().display());
                        children.push(child);
                    }
                    Err(e) => report(diag, &e, summary)?,
                }
            }

            write_entry(out, &entry, &self.config, &self.names)?;
            summary.entries += 1;
        }

        Ok(children)
    }
}

fn ends_with_separator(path: &Path) -> bool {
    path.as_os_str()
        .as_encoded_bytes()
        .last()
        .is_some_and(|&b| b as char == MAIN_SEPARATOR)
}

/// Write one diagnostic line for a recoverable error.
fn report<E: Write>(diag: &mut E, err: &ListError, summary: &mut TraversalSummary) -> Result<()> {
    debug!("recovered: {err:?}");
    summary.errors += 1;
    writeln!(diag, "{}", err)?;
    Ok(())
}
