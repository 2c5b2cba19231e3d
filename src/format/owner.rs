//! User and group name columns

use uzers::{Groups, Users, UsersCache};

/// Width of the user and group columns.
const NAME_WIDTH: usize = 8;

/// Resolves uids and gids to names, remembering every lookup for the run.
pub struct OwnerNames {
    cache: UsersCache,
}

impl OwnerNames {
    pub fn new() -> Self {
        Self {
            cache: UsersCache::new(),
        }
    }

    /// User name for `uid`, or the number when there is no such user.
    pub fn user(&self, uid: u32) -> String {
        self.cache
            .get_user_by_uid(uid)
            .map(|u| u.name().to_string_lossy().into_owned())
            .unwrap_or_else(|| uid.to_string())
    }

    /// Group name for `gid`, or the number when there is no such group.
    pub fn group(&self, gid: u32) -> String {
        self.cache
            .get_group_by_gid(gid)
            .map(|g| g.name().to_string_lossy().into_owned())
            .unwrap_or_else(|| gid.to_string())
    }
}

impl Default for OwnerNames {
    fn default() -> Self {
        Self::new()
    }
}

/// Right-align a name in its column, followed by a separating space.
pub fn owner_field(name: &str) -> String {
    format!("{:>width$} ", name, width = NAME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Far outside any range a system would allocate.
    const UNUSED_ID: u32 = 3_999_999_999;

    #[test]
    fn test_owner_field_alignment() {
        assert_eq!(owner_field("root"), "    root ");
        assert_eq!(owner_field("12345678"), "12345678 ");
        assert_eq!(owner_field("longername"), "longername ");
    }

    #[test]
    fn test_unknown_ids_fall_back_to_numbers() {
        let names = OwnerNames::new();
        assert_eq!(names.user(UNUSED_ID), UNUSED_ID.to_string());
        assert_eq!(names.group(UNUSED_ID), UNUSED_ID.to_string());
        assert_eq!(owner_field(&names.user(UNUSED_ID)), "3999999999 ");
    }

    #[test]
    fn test_repeated_lookup_is_stable() {
        let names = OwnerNames::new();
        let uid = uzers::get_current_uid();
        assert_eq!(names.user(uid), names.user(uid));
        assert!(!names.user(uid).is_empty());
    }
}
