//! Work queue of directories waiting to be listed

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::config::MAX_PATH;
use crate::error::{ListError, Result};

/// One directory awaiting traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDirectory {
    path: PathBuf,
    depth: usize,
}

impl PendingDirectory {
    /// Create a pending directory, rejecting paths longer than `MAX_PATH` bytes.
    pub fn new(path: impl Into<PathBuf>, depth: usize) -> Result<Self> {
        let path = path.into();
        if path.as_os_str().len() > MAX_PATH {
            return Err(ListError::PathTooLong { path });
        }
        Ok(Self { path, depth })
    }

    pub fn root(path: impl Into<PathBuf>) -> Result<Self> {
        Self::new(path, 0)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The root never gets a `path:` header.
    pub fn needs_header(&self) -> bool {
        self.depth > 0
    }
}

/// Pending directories in visiting order.
///
/// Subdirectories found while listing a directory are placed directly after
/// it, ahead of anything queued earlier, in the order they were read. A
/// directory's subtree is therefore finished before its next sibling starts.
#[derive(Debug, Default)]
pub struct TraversalQueue {
    pending: VecDeque<PendingDirectory>,
}

impl TraversalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// A queue holding only the root directory.
    pub fn seeded(root: PendingDirectory) -> Self {
        let mut queue = Self::new();
        queue.pending.push_back(root);
        queue
    }

    pub fn pop(&mut self) -> Option<PendingDirectory> {
        self.pending.pop_front()
    }

    /// Insert the subdirectories of the directory just popped, keeping their order.
    pub fn insert_after_current(&mut self, children: Vec<PendingDirectory>) {
        for child in children.into_iter().rev() {
            self.pending.push_front(child);
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
