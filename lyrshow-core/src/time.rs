//! Time formatting utilities.
//!
//! Elapsed playback time is displayed as `MM:SS`, floored to whole
//! seconds. Minutes are not wrapped, so an elapsed time past the hour
//! renders as `62:05` rather than rolling over.

use std::time::Duration;

/// Format an elapsed duration as a zero-padded `MM:SS` timestamp.
#[must_use]
pub fn format_mm_ss(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}
