use std::fmt;

/// Warnings that occur when inspecting an extracted tag version.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseWarning {
    /// Tag version cannot be parsed as a semantic version
    NonSemverVersion { version: String, reason: String },
    /// Tag ref carried nothing after the prefix
    EmptyTagVersion,
}

impl fmt::Display for ReleaseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseWarning::NonSemverVersion { version, reason } => {
                write!(
                    f,
                    "Tag version '{}' is not a semantic version: {}",
                    version, reason
                )
            }
            ReleaseWarning::EmptyTagVersion => {
                write!(f, "Tag ref has an empty version part")
            }
        }
    }
}

/// Inspect an extracted tag version for advisory issues.
///
/// Extraction itself never validates the version shape, so a release
/// workflow surfaces oddities here instead. A leading 'v' or 'V' prefix
/// is tolerated the way common tag schemes use it.
pub fn check_tag_version(version: &str) -> Option<ReleaseWarning> {
    if version.is_empty() {
        return Some(ReleaseWarning::EmptyTagVersion);
    }

    let clean = version.trim_start_matches('v').trim_start_matches('V');
    match semver::Version::parse(clean) {
        Ok(_) => None,
        Err(e) => Some(ReleaseWarning::NonSemverVersion {
            version: version.to_string(),
            reason: e.to_string(),
        }),
    }
}
