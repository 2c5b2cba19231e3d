//! lsr - an `ls` that recurses with a work queue instead of the call stack

pub mod config;
pub mod error;
pub mod format;
pub mod listing;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{FilterPolicy, ListConfig, LongFormat, HALF_YEAR_SECONDS, MAX_PATH};
pub use error::{ListError, Result};
pub use listing::{Lister, PendingDirectory, TraversalQueue, TraversalSummary};
