//! Time windows for calendar queries.
//!
//! [`TimeWindow`] is the half-open `[start, end)` range a calendar source is
//! asked to cover. [`format_clock`] renders instants as `HH:MM`.

use chrono::{DateTime, Days, Duration, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A time window for querying calendar events.
///
/// Represents a half-open interval `[start, end)` in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Start of the window (inclusive).
    pub start: DateTime<Utc>,
    /// End of the window (exclusive).
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Creates a new time window.
    ///
    /// # Panics
    ///
    /// Panics if `start` is after `end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        assert!(start <= end, "TimeWindow start must be <= end");
        Self { start, end }
    }

    /// Creates the window a board fetches: yesterday 00:00 through tomorrow
    /// 00:00, both local midnights in `tz`.
    pub fn around_today<Tz: TimeZone>(now: DateTime<Utc>, tz: &Tz) -> Self {
        let today = now.with_timezone(tz).date_naive();
        let yesterday = today.checked_sub_days(Days::new(1)).unwrap_or(today);
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
        Self {
            start: local_midnight(yesterday, tz),
            end: local_midnight(tomorrow, tz),
        }
    }

    /// Returns the duration of this time window.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Checks if a datetime falls within this window.
    pub fn contains(&self, dt: DateTime<Utc>) -> bool {
        self.start <= dt && dt < self.end
    }

    /// Checks if an event `[start, end)` overlaps with this window.
    ///
    /// Zero-length events overlap when their instant lies inside the window.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        if start == end {
            return self.contains(start);
        }
        start < self.end && end > self.start
    }
}

/// Midnight of `date` in `tz`, as UTC.
///
/// Days whose midnight falls in a DST gap use midnight UTC instead.
fn local_midnight<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> DateTime<Utc> {
    let naive = date.and_time(chrono::NaiveTime::MIN);
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| naive.and_utc())
}

/// Formats an instant as 24-hour `HH:MM` in `tz`.
pub fn format_clock<Tz: TimeZone>(dt: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.with_timezone(tz).format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn creation() {
        let window = TimeWindow::new(utc(2025, 2, 5, 9, 0, 0), utc(2025, 2, 5, 17, 0, 0));
        assert_eq!(window.duration(), Duration::hours(8));
    }

    #[test]
    #[should_panic(expected = "start must be <= end")]
    fn invalid_window() {
        TimeWindow::new(utc(2025, 2, 5, 17, 0, 0), utc(2025, 2, 5, 9, 0, 0));
    }

    #[test]
    fn contains_is_half_open() {
        let window = TimeWindow::new(utc(2025, 2, 5, 9, 0, 0), utc(2025, 2, 5, 17, 0, 0));

        assert!(window.contains(utc(2025, 2, 5, 9, 0, 0)));
        assert!(window.contains(utc(2025, 2, 5, 16, 59, 59)));
        assert!(!window.contains(utc(2025, 2, 5, 17, 0, 0)));
        assert!(!window.contains(utc(2025, 2, 5, 8, 59, 59)));
    }

    #[test]
    fn overlaps() {
        let window = TimeWindow::new(utc(2025, 2, 5, 9, 0, 0), utc(2025, 2, 5, 17, 0, 0));

        // inside
        assert!(window.overlaps(utc(2025, 2, 5, 10, 0, 0), utc(2025, 2, 5, 11, 0, 0)));
        // straddles the start
        assert!(window.overlaps(utc(2025, 2, 5, 8, 0, 0), utc(2025, 2, 5, 10, 0, 0)));
        // covers the whole window
        assert!(window.overlaps(utc(2025, 2, 5, 8, 0, 0), utc(2025, 2, 5, 18, 0, 0)));
        // touches the start
        assert!(!window.overlaps(utc(2025, 2, 5, 8, 0, 0), utc(2025, 2, 5, 9, 0, 0)));
        // starts at the end
        assert!(!window.overlaps(utc(2025, 2, 5, 17, 0, 0), utc(2025, 2, 5, 18, 0, 0)));
        // zero length
        assert!(window.overlaps(utc(2025, 2, 5, 9, 0, 0), utc(2025, 2, 5, 9, 0, 0)));
    }

    #[test]
    fn around_today_in_utc() {
        let window = TimeWindow::around_today(utc(2025, 2, 5, 10, 30, 0), &Utc);
        assert_eq!(window.start, utc(2025, 2, 4, 0, 0, 0));
        assert_eq!(window.end, utc(2025, 2, 6, 0, 0, 0));
        assert_eq!(window.duration(), Duration::hours(48));
    }

    #[test]
    fn around_today_uses_local_date() {
        // 23:30 UTC on the 5th is already the 6th in UTC+2
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let window = TimeWindow::around_today(utc(2025, 2, 5, 23, 30, 0), &tz);
        assert_eq!(window.start, utc(2025, 2, 4, 22, 0, 0));
        assert_eq!(window.end, utc(2025, 2, 6, 22, 0, 0));
    }

    #[test]
    fn clock_format() {
        assert_eq!(format_clock(utc(2025, 2, 5, 9, 5, 59), &Utc), "09:05");
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(format_clock(utc(2025, 2, 5, 14, 0, 0), &tz), "09:00");
    }
}
