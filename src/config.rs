//! Listing configuration

use std::time::{SystemTime, UNIX_EPOCH};

/// Longest path, in bytes, the lister will build for a directory or entry.
pub const MAX_PATH: usize = 4096;

/// Half of a 365-day year, in seconds.
pub const HALF_YEAR_SECONDS: i64 = 365 * 24 * 60 * 60 / 2;

/// Which entry names are hidden from the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterPolicy {
    /// Hide every name starting with `.`
    #[default]
    Default,
    /// Hide only `.` and `..`
    Almost,
    /// Hide nothing
    All,
}

/// Settings that only exist while long format is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongFormat {
    /// Unix time half a year before the run started. Entries modified after
    /// this show a clock time, older ones show the year.
    pub half_year_ago: i64,
}

impl LongFormat {
    /// Fix the recent/old boundary relative to `now`.
    pub fn starting_at(now: SystemTime) -> Self {
        let now = match now.duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_secs() as i64,
            Err(e) => -(e.duration().as_secs() as i64),
        };
        Self::from_unix(now)
    }

    pub fn from_unix(now: i64) -> Self {
        Self {
            half_year_ago: now - HALF_YEAR_SECONDS,
        }
    }
}

/// Configuration for one listing run.
///
/// Built once before traversal starts and shared read-only with the lister.
#[derive(Debug, Clone, Default)]
pub struct ListConfig {
    pub filter: FilterPolicy,
    pub color: bool,
    pub classify: bool,
    /// Long format, carrying the timestamp threshold computed at startup
    pub long_format: Option<LongFormat>,
    pub recursive: bool,
}

impl ListConfig {
    pub fn with_filter(mut self, filter: FilterPolicy) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_classify(mut self, classify: bool) -> Self {
        self.classify = classify;
        self
    }

    pub fn with_long_format(mut self, long_format: LongFormat) -> Self {
        self.long_format = Some(long_format);
        self
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn is_long(&self) -> bool {
        self.long_format.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_half_year_constant() {
        assert_eq!(HALF_YEAR_SECONDS, 15_768_000);
    }

    #[test]
    fn test_long_format_threshold() {
        let now = UNIX_EPOCH + Duration::from_secs(100_000_000);
        let long = LongFormat::starting_at(now);
        assert_eq!(long.half_year_ago, 100_000_000 - 15_768_000);
        assert_eq!(LongFormat::from_unix(0).half_year_ago, -15_768_000);
    }

    #[test]
    fn test_config_defaults() {
        let config = ListConfig::default();
        assert_eq!(config.filter, FilterPolicy::Default);
        assert!(!config.color);
        assert!(!config.classify);
        assert!(!config.is_long());
        assert!(!config.recursive);
    }

    #[test]
    fn test_config_builders() {
        let config = ListConfig::default()
            .with_filter(FilterPolicy::Almost)
            .with_classify(true)
            .with_long_format(LongFormat::from_unix(20_000_000))
            .with_recursive(true);
        assert_eq!(config.filter, FilterPolicy::Almost);
        assert!(config.classify);
        assert!(config.recursive);
        assert_eq!(
            config.long_format.map(|l| l.half_year_ago),
            Some(20_000_000 - HALF_YEAR_SECONDS)
        );
    }
}
