pub mod boundary;
pub mod domain;
pub mod error;
pub mod ui;

pub use domain::{is_pre_release, pre_release_part, RefContext, ReleaseChannel, TAG_REF_PREFIX};
pub use error::{RefVersionError, Result};
