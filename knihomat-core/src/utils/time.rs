//! Time helpers
//!
//! Repositories store timestamps as `i64` Unix millis; any conversion
//! to a display format happens at the presentation boundary.

use chrono::{DateTime, Utc};

/// Current wall-clock time as Unix millis
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a stored timestamp as RFC 3339 (UTC)
///
/// Out-of-range values render as an empty string rather than panicking.
pub fn millis_to_rfc3339(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_after_2020() {
        assert!(now_millis() > 1_577_836_800_000);
    }

    #[test]
    fn formats_known_timestamp() {
        let formatted = millis_to_rfc3339(0);
        assert!(formatted.starts_with("1970-01-01T00:00:00"));
    }

    #[test]
    fn out_of_range_renders_empty() {
        assert_eq!(millis_to_rfc3339(i64::MAX), "");
    }
}
