//! Timestamp utilities
//!
//! Every request captures a single reference timestamp with [`now`] and
//! passes it to all classification and counting calls it makes.

use chrono::{DateTime, Utc};

/// Wire format for start times echoed to clients
///
/// Six fractional digits and a literal `Z`; no offset is computed.
pub const START_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Format a show start time for clients
pub fn format_start_time(start_time: &DateTime<Utc>) -> String {
    start_time.format(START_TIME_FORMAT).to_string()
}
