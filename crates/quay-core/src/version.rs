//! Release/snapshot classification of version strings.

use std::fmt;

use serde::Serialize;

/// Suffix that marks a mutable pre-release build.
pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// Whether a version publishes to the release or the snapshot area of a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VersionClass {
    Release,
    Snapshot,
}

impl VersionClass {
    /// Path segment under a repository base URL: `releases` or `snapshots`.
    pub fn path_segment(self) -> &'static str {
        match self {
            VersionClass::Release => "releases",
            VersionClass::Snapshot => "snapshots",
        }
    }

    /// Suffix appended to a repository name to form its display name.
    pub fn display_suffix(self) -> &'static str {
        match self {
            VersionClass::Release => "Releases",
            VersionClass::Snapshot => "Snapshots",
        }
    }

    pub fn is_snapshot(self) -> bool {
        self == VersionClass::Snapshot
    }
}

impl fmt::Display for VersionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionClass::Release => write!(f, "release"),
            VersionClass::Snapshot => write!(f, "snapshot"),
        }
    }
}

/// Classify a version string by its exact, case-sensitive `-SNAPSHOT` suffix.
pub fn classify(version: &str) -> VersionClass {
    if version.ends_with(SNAPSHOT_SUFFIX) {
        VersionClass::Snapshot
    } else {
        VersionClass::Release
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_version_is_release() {
        assert_eq!(classify("2.0.2"), VersionClass::Release);
    }

    #[test]
    fn snapshot_suffix_is_snapshot() {
        assert_eq!(classify("2.0.2-SNAPSHOT"), VersionClass::Snapshot);
    }

    #[test]
    fn suffix_match_is_case_sensitive() {
        assert_eq!(classify("2.0.2-snapshot"), VersionClass::Release);
        assert_eq!(classify("2.0.2-Snapshot"), VersionClass::Release);
    }

    #[test]
    fn suffix_must_be_at_the_end() {
        assert_eq!(classify("2.0.2-SNAPSHOT.1"), VersionClass::Release);
        assert_eq!(classify("1.0-SNAPSHOT-rc"), VersionClass::Release);
        assert_eq!(classify("SNAPSHOT"), VersionClass::Release);
    }

    #[test]
    fn bare_suffix_is_snapshot() {
        assert_eq!(classify("-SNAPSHOT"), VersionClass::Snapshot);
    }

    #[test]
    fn empty_version_is_release() {
        assert_eq!(classify(""), VersionClass::Release);
    }

    #[test]
    fn segments_and_suffixes() {
        assert_eq!(VersionClass::Release.path_segment(), "releases");
        assert_eq!(VersionClass::Snapshot.path_segment(), "snapshots");
        assert_eq!(VersionClass::Release.display_suffix(), "Releases");
        assert_eq!(VersionClass::Snapshot.display_suffix(), "Snapshots");
    }
}
