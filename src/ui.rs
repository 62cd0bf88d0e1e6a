//! Formatting functions for CLI output.
//!
//! Everything human-facing is printed to stderr so that stdout stays
//! machine-readable for the calling workflow.

use console::style;

use crate::boundary::ReleaseWarning;
use crate::domain::ReleaseChannel;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a release warning with a yellow marker.
pub fn display_warning(warning: &ReleaseWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the release summary for an extracted tag version.
///
/// Shows the source ref, the version and its channel, plus the
/// pre-release marker when one is present.
pub fn display_release(
    ref_name: &str,
    version: &str,
    channel: ReleaseChannel,
    pre_release: Option<&str>,
) {
    match pre_release {
        Some(marker) => eprintln!(
            "{} {}: version {} ({} channel, {})",
            style("✓").green(),
            ref_name,
            style(version).bold(),
            channel,
            marker
        ),
        None => eprintln!(
            "{} {}: version {} ({} channel)",
            style("✓").green(),
            ref_name,
            style(version).bold(),
            channel
        ),
    }
}
