use chrono::{DateTime, Utc};

/// Which consumer a field accessor is feeding.
///
/// `Sort` yields numeric keys where a column has one, `Filter` yields text
/// only for fields that are conceptually strings (so numeric fields pass
/// through the search filter), and `Display` yields the display text every
/// field has — the default cell rendering path.
#[derive(Debug, Clone, Copy)]
pub enum AccessorMode {
    Sort,
    Filter,
    Display,
}

/// A typed cell value handed to the sort/filter pipeline.
///
/// Text sorts case-insensitively, numbers sort numerically, and a mismatched
/// pair compares as equal. Non-text fields are invisible to the search filter.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Number(i64),
    Text(String),
}

/// A processed table field: the display string plus an optional numeric key
/// used when the column is sorted (timestamps, counts, parsed IPs).
#[derive(Debug, Clone, serde::Serialize)]
pub struct FieldValue {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<i64>,
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            sort_by: None,
        }
    }

    pub fn numeric(value: impl Into<String>, sort_by: i64) -> Self {
        Self {
            value: value.into(),
            sort_by: Some(sort_by),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self {
            value: String::new(),
            sort_by: None,
        }
    }
}

/// Formats the elapsed time between `timestamp` and `now` as a coarse age:
/// whole days, else whole hours, else whole minutes, else `<1m`.
///
/// The clock is injected so callers (and tests) control "now".
pub fn format_age(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);

    let days = elapsed.num_days();
    let hours = elapsed.num_hours();
    let minutes = elapsed.num_minutes();

    if days > 0 {
        format!("{}d", days)
    } else if hours > 0 {
        format!("{}h", hours)
    } else if minutes > 0 {
        format!("{}m", minutes)
    } else {
        "<1m".to_string()
    }
}

/// Parses an RFC 3339 timestamp from sample data. Returns `None` for empty
/// or malformed values so callers can fall back to a placeholder cell.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 14, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_format_age_minutes() {
        let now = fixed_now();
        assert_eq!(format_age(now - chrono::Duration::seconds(90), now), "1m");
    }

    #[test]
    fn test_format_age_hours() {
        let now = fixed_now();
        assert_eq!(format_age(now - chrono::Duration::hours(3), now), "3h");
    }

    #[test]
    fn test_format_age_days() {
        let now = fixed_now();
        assert_eq!(format_age(now - chrono::Duration::days(2), now), "2d");
    }

    #[test]
    fn test_format_age_sub_minute() {
        let now = fixed_now();
        assert_eq!(format_age(now - chrono::Duration::seconds(30), now), "<1m");
    }

    #[test]
    fn test_format_age_prefers_largest_unit() {
        let now = fixed_now();
        // 26 hours is "1d", not "26h"
        assert_eq!(format_age(now - chrono::Duration::hours(26), now), "1d");
    }

    #[test]
    fn test_parse_timestamp() {
        assert!(parse_timestamp("2025-02-14T10:00:00Z").is_some());
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("not-a-date").is_none());
    }
}
