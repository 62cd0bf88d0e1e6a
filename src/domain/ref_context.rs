use crate::error::{RefVersionError, Result};

/// Prefix git puts on fully qualified tag refs
pub const TAG_REF_PREFIX: &str = "refs/tags/";

/// Ref context handed over by the CI host (e.g. the value of GITHUB_REF)
///
/// Transient value constructed by the caller; the helper never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefContext {
    pub ref_name: String,
}

impl RefContext {
    /// Create a new ref context from a fully qualified ref string
    pub fn new(ref_name: impl Into<String>) -> Self {
        RefContext {
            ref_name: ref_name.into(),
        }
    }

    /// Check whether this ref points at a tag
    pub fn is_tag(&self) -> bool {
        self.ref_name.starts_with(TAG_REF_PREFIX)
    }

    /// Extract the version from a tag ref (e.g. "refs/tags/1.2.3" -> "1.2.3")
    ///
    /// The remainder after the prefix is returned verbatim, with no further
    /// validation of its shape. Branch refs and arbitrary strings fail.
    pub fn tag_version(&self) -> Result<String> {
        match self.ref_name.strip_prefix(TAG_REF_PREFIX) {
            Some(version) => Ok(version.to_string()),
            None => Err(RefVersionError::invalid_ref(self.ref_name.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_ref_extraction() {
        let context = RefContext::new("refs/tags/1.2.3");
        assert_eq!(context.tag_version().unwrap(), "1.2.3");
    }

    #[test]
    fn test_branch_ref_rejected() {
        let context = RefContext::new("refs/heads/main");
        let err = context.tag_version().unwrap_err();
        assert!(err.to_string().contains("Invalid ref"));
        assert!(err.to_string().contains("refs/heads/main"));
    }

    #[test]
    fn test_arbitrary_string_rejected() {
        let context = RefContext::new("bad-ref");
        let err = context.tag_version().unwrap_err();
        assert!(err.to_string().contains("Invalid ref"));
    }

    #[test]
    fn test_version_returned_verbatim() {
        // No 'v' stripping and no semver validation of the remainder
        let context = RefContext::new("refs/tags/v2.0.0-rc.1+build.5");
        assert_eq!(context.tag_version().unwrap(), "v2.0.0-rc.1+build.5");
    }

    #[test]
    fn test_round_trip_suffixes() {
        let suffixes = vec!["1.2.3", "v1.0.0", "release/1.0", "", "not.a.version!"];

        for suffix in suffixes {
            let context = RefContext::new(format!("{}{}", TAG_REF_PREFIX, suffix));
            assert_eq!(context.tag_version().unwrap(), suffix);
        }
    }

    #[test]
    fn test_prefix_must_be_exact() {
        // Close-but-wrong prefixes are invalid
        assert!(RefContext::new("refs/tag/1.2.3").tag_version().is_err());
        assert!(RefContext::new("refs/Tags/1.2.3").tag_version().is_err());
        assert!(RefContext::new(" refs/tags/1.2.3").tag_version().is_err());
    }

    #[test]
    fn test_is_tag() {
        assert!(RefContext::new("refs/tags/1.2.3").is_tag());
        assert!(!RefContext::new("refs/heads/main").is_tag());
    }
}
