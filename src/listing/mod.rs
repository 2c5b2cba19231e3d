//! Directory traversal
//!
//! - `filter` decides which names are visible
//! - `metadata` reads one entry's metadata and resolves symlinks
//! - `queue` holds the directories still to be listed
//! - `lister` lists one directory and drives the queue until it is empty

mod filter;
mod lister;
mod metadata;
mod queue;

pub use filter::{is_dot_or_dotdot, is_hidden};
pub use lister::{Lister, TraversalSummary};
pub use metadata::{
    EntryMetadata, FileKind, MetadataSource, Mode, S_ISGID, S_ISUID, S_ISVTX, S_IWOTH, S_IXUGO,
    StatRecord, SystemMetadata, read_entry,
};
pub use queue::{PendingDirectory, TraversalQueue};
