//! Error types for listing
//!
//! Every recoverable variant renders as the diagnostic line printed to the
//! error stream: `<path>: <reason>`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::MAX_PATH;

#[derive(Error, Debug)]
pub enum ListError {
    /// The directory could not be opened; its listing is abandoned.
    #[error("{}: {}", .path.display(), os_reason(.source))]
    OpenDir { path: PathBuf, source: io::Error },

    /// A directory prefix or entry path would exceed `MAX_PATH` bytes.
    #[error("{}: path exceeds {} bytes", .path.display(), MAX_PATH)]
    PathTooLong { path: PathBuf },

    /// Metadata for a single entry could not be read; the entry is skipped.
    #[error("{}: {}", .path.display(), os_reason(.source))]
    Metadata { path: PathBuf, source: io::Error },

    /// Writing the listing itself failed.
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl ListError {
    /// Whether the run can continue after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ListError::Output(_))
    }
}

pub type Result<T> = std::result::Result<T, ListError>;

/// The OS message for an error, without the ` (os error N)` suffix.
pub fn os_reason(err: &io::Error) -> String {
    let text = err.to_string();
    match text.rfind(" (os error ") {
        Some(pos) => text[..pos].to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_reason_strips_code() {
        let err = io::Error::from_raw_os_error(libc::ENOENT);
        assert_eq!(os_reason(&err), "No such file or directory");
    }

    #[test]
    fn test_os_reason_custom_message() {
        let err = io::Error::other("went away");
        assert_eq!(os_reason(&err), "went away");
    }

    #[test]
    fn test_diagnostic_line_format() {
        let err = ListError::Metadata {
            path: PathBuf::from("dir/file"),
            source: io::Error::from_raw_os_error(libc::EACCES),
        };
        assert_eq!(err.to_string(), "dir/file: Permission denied");
        assert!(err.is_recoverable());

        let err = ListError::PathTooLong {
            path: PathBuf::from("deep"),
        };
        assert_eq!(err.to_string(), "deep: path exceeds 4096 bytes");
    }

    #[test]
    fn test_output_error_not_recoverable() {
        let err = ListError::from(io::Error::other("broken pipe"));
        assert!(!err.is_recoverable());
    }
}
