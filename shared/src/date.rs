//! Date helpers
//!
//! Orders carry `DateTime<Utc>`; the UI shows short dates and groups sales by month.

use chrono::{DateTime, Datelike, Duration, Utc};

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// `now` minus a whole number of days.
pub fn days_before(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now - Duration::days(days)
}

/// Zero-based month index, suitable for indexing [`MONTH_LABELS`].
#[inline]
pub fn month_index(date: &DateTime<Utc>) -> usize {
    date.month0() as usize
}

/// e.g. `Apr 3, 2025`
pub fn format_short(date: &DateTime<Utc>) -> String {
    format!(
        "{} {}, {}",
        MONTH_LABELS[month_index(date)],
        date.day(),
        date.year()
    )
}

/// Short date or a dash when the value is missing.
pub fn format_optional(date: Option<&DateTime<Utc>>) -> String {
    date.map(format_short).unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_short_dates() {
        let d = Utc.with_ymd_and_hms(2025, 4, 3, 10, 0, 0).unwrap();
        assert_eq!(format_short(&d), "Apr 3, 2025");
        assert_eq!(format_optional(None), "—");
    }

    #[test]
    fn days_before_crosses_month_boundary() {
        let d = Utc.with_ymd_and_hms(2025, 3, 2, 0, 0, 0).unwrap();
        let earlier = days_before(d, 2);
        assert_eq!(month_index(&earlier), 1);
        assert_eq!(earlier.day(), 28);
    }
}
