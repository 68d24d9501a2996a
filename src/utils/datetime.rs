//! Date formatting utilities
//!
//! Renders timestamps the way reply templates expose them.

use chrono::{DateTime, Utc};

const ISO_8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Format a timestamp as ISO-8601 in UTC with millisecond precision,
/// e.g. `2024-03-01T12:30:05.120Z`.
pub fn iso8601(time: &DateTime<Utc>) -> String {
    time.format(ISO_8601_FORMAT).to_string()
}
