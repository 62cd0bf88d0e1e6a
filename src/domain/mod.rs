//! Domain logic - pure ref and version rules independent of the CI host

pub mod channel;
pub mod prerelease;
pub mod ref_context;

pub use channel::ReleaseChannel;
pub use prerelease::{is_pre_release, pre_release_part};
pub use ref_context::{RefContext, TAG_REF_PREFIX};
