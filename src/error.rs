use thiserror::Error;

/// Unified error type for ref-version operations
#[derive(Error, Debug)]
pub enum RefVersionError {
    #[error("Invalid ref: {0}")]
    InvalidRef(String),
}

/// Convenience type alias for Results in ref-version
pub type Result<T> = std::result::Result<T, RefVersionError>;

impl RefVersionError {
    /// Create an invalid-ref error carrying the offending ref
    pub fn invalid_ref(ref_name: impl Into<String>) -> Self {
        RefVersionError::InvalidRef(ref_name.into())
    }
}
