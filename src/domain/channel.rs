use std::fmt;

use crate::domain::prerelease::is_pre_release;

/// Release channel a version belongs to
///
/// Used by release workflows to decide where a build is published,
/// e.g. whether a package gets the "latest" tag or a pre-release one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseChannel {
    Stable,
    PreRelease,
}

impl ReleaseChannel {
    /// Classify a version string into its release channel
    pub fn for_version(version: &str) -> Self {
        if is_pre_release(version) {
            ReleaseChannel::PreRelease
        } else {
            ReleaseChannel::Stable
        }
    }
}

impl fmt::Display for ReleaseChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseChannel::Stable => write!(f, "stable"),
            ReleaseChannel::PreRelease => write!(f, "prerelease"),
        }
    }
}
