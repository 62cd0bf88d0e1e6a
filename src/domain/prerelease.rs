//! Pre-release classification for version strings
//!
//! Follows the pre-release grammar from semver.org: https://semver.org/#spec-item-9

use semver::Prerelease;

/// Return the pre-release marker of a version string, if any
///
/// The marker is everything after the first '-' in the part of the string
/// before any build metadata ('+'). "1.2.3-rc.1" -> Some("rc.1").
pub fn pre_release_part(version: &str) -> Option<&str> {
    let core = match version.split_once('+') {
        Some((core, _build)) => core,
        None => version,
    };
    let idx = core.find('-')?;
    Some(&core[idx + 1..])
}

/// Check whether a version string denotes a pre-release
///
/// True when the string carries a hyphen followed by one or more
/// dot-separated identifiers (e.g. "-rc.1", "-alpha"). Identifiers are
/// alphanumeric or hyphen; numeric identifiers must not have leading
/// zeros. Never fails: anything else, including a plain
/// MAJOR.MINOR.PATCH string, is simply not a pre-release.
pub fn is_pre_release(version: &str) -> bool {
    match pre_release_part(version) {
        Some(pre) => !pre.is_empty() && Prerelease::new(pre).is_ok(),
        None => false,
    }
}
