//! Hidden-name filtering

use std::ffi::OsStr;

use crate::config::FilterPolicy;

/// Check if an entry name is hidden under the given policy.
pub fn is_hidden(name: &OsStr, policy: FilterPolicy) -> bool {
    match policy {
        FilterPolicy::Default => name.as_encoded_bytes().first() == Some(&b'.'),
        FilterPolicy::Almost => is_dot_or_dotdot(name),
        FilterPolicy::All => false,
    }
}

/// `.` or `..`, the self and parent links of a directory.
pub fn is_dot_or_dotdot(name: &OsStr) -> bool {
    matches!(name.as_encoded_bytes(), b"." | b"..")
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 5] = [".", "..", ".git", "file", "..name"];

    fn hidden(policy: FilterPolicy) -> Vec<bool> {
        NAMES
            .iter()
            .map(|n| is_hidden(OsStr::new(n), policy))
            .collect()
    }

    #[test]
    fn test_default_hides_dot_prefixed() {
        assert_eq!(
            hidden(FilterPolicy::Default),
            vec![true, true, true, false, true]
        );
    }

    #[test]
    fn test_almost_hides_only_self_and_parent() {
        assert_eq!(
            hidden(FilterPolicy::Almost),
            vec![true, true, false, false, false]
        );
    }

    #[test]
    fn test_all_hides_nothing() {
        assert_eq!(
            hidden(FilterPolicy::All),
            vec![false, false, false, false, false]
        );
    }

    #[test]
    fn test_dot_or_dotdot() {
        assert!(is_dot_or_dotdot(OsStr::new(".")));
        assert!(is_dot_or_dotdot(OsStr::new("..")));
        assert!(!is_dot_or_dotdot(OsStr::new("...")));
        assert!(!is_dot_or_dotdot(OsStr::new(".a")));
        assert!(!is_dot_or_dotdot(OsStr::new("")));
    }
}
