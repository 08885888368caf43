//! OpsDeck Utils - Formatting Helpers
//!
//! Display formatting shared by the dashboard views.
//!
//! Key Features:
//! - Calendar dates for "updated" columns
//! - Thousands separators for counters
//! - Overflow badges for truncated lists
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use chrono::{DateTime, Utc};

// =============================================================================
// Dates
// =============================================================================

/// Format a timestamp as a calendar date.
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}

// =============================================================================
// Numbers
// =============================================================================

/// Format a counter with thousands separators.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Badge text for items hidden from a truncated list.
pub fn overflow_badge(hidden: usize) -> Option<String> {
    (hidden > 0).then(|| format!("+{}", hidden))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let ts = Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 0).unwrap();
        assert_eq!(format_date(&ts), "2024-02-29");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(2400), "2,400");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_overflow_badge() {
        assert_eq!(overflow_badge(0), None);
        assert_eq!(overflow_badge(2).as_deref(), Some("+2"));
    }
}
