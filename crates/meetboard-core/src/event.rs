//! Event types for the meeting board.
//!
//! - [`Event`]: an already-fetched calendar event, as handed over by a source
//! - [`Classification`]: where an event sits relative to "now"
//! - [`DisplayRow`]: a display-ready row derived from one event

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A calendar event as supplied by a calendar source.
///
/// Events carry no identifier. A missing `start` or `end` marks an all-day
/// event (or one whose timestamp could not be parsed); such events are never
/// displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// The event title.
    pub summary: String,
    /// When the event starts, if it has a specific time.
    pub start: Option<DateTime<Utc>>,
    /// When the event ends, if it has a specific time.
    pub end: Option<DateTime<Utc>>,
    /// Meeting link (may be empty).
    pub link: String,
}

impl Event {
    /// Creates a timed event.
    pub fn new(summary: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            summary: summary.into(),
            start: Some(start),
            end: Some(end),
            link: String::new(),
        }
    }

    /// Creates an all-day event (no specific start or end time).
    pub fn all_day(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            ..Default::default()
        }
    }

    /// Builder method to set the meeting link.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    /// Returns true if either timestamp is missing.
    pub fn is_all_day(&self) -> bool {
        self.start.is_none() || self.end.is_none()
    }

    /// Returns the `[start, end)` interval when both timestamps are present.
    pub fn interval(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        Some((self.start?, self.end?))
    }

    /// Returns the event duration when both timestamps are present.
    pub fn duration(&self) -> Option<Duration> {
        self.interval().map(|(start, end)| end - start)
    }
}

/// Temporal state of an event relative to a reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// The reference instant falls within `[start, end)`.
    Ongoing,
    /// The event starts within the imminence window.
    ImminentUpcoming,
    /// The event starts later than the imminence window.
    Upcoming,
    /// The event has already ended.
    Past,
}

impl Classification {
    /// Returns a short name for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ongoing => "ongoing",
            Self::ImminentUpcoming => "imminent",
            Self::Upcoming => "upcoming",
            Self::Past => "past",
        }
    }
}

/// One table row, ready for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRow {
    /// Marker-prefixed, truncated title.
    pub label: String,
    /// Start time as `HH:MM`.
    pub start_text: String,
    /// End time as `HH:MM`.
    pub end_text: String,
    /// Meeting link, verbatim.
    pub link: String,
}

impl DisplayRow {
    /// Returns the row as its four cells, in column order.
    pub fn cells(&self) -> [&str; 4] {
        [&self.label, &self.start_text, &self.end_text, &self.link]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    mod event {
        use super::*;

        #[test]
        fn timed_event() {
            let event = Event::new(
                "Team Standup",
                utc(2025, 2, 5, 10, 0, 0),
                utc(2025, 2, 5, 10, 30, 0),
            );
            assert!(!event.is_all_day());
            assert!(event.link.is_empty());
            assert_eq!(event.duration(), Some(Duration::minutes(30)));
        }

        #[test]
        fn all_day_event_has_no_interval() {
            let event = Event::all_day("Holiday");
            assert!(event.is_all_day());
            assert_eq!(event.interval(), None);
            assert_eq!(event.duration(), None);
        }

        #[test]
        fn half_missing_counts_as_all_day() {
            let mut event = Event::new(
                "Broken",
                utc(2025, 2, 5, 10, 0, 0),
                utc(2025, 2, 5, 11, 0, 0),
            );
            event.end = None;
            assert!(event.is_all_day());
            assert_eq!(event.interval(), None);
        }

        #[test]
        fn with_link() {
            let event = Event::all_day("Sync").with_link("https://meet.google.com/abc");
            assert_eq!(event.link, "https://meet.google.com/abc");
        }

        #[test]
        fn serde_roundtrip() {
            let event = Event::new(
                "Review",
                utc(2025, 2, 5, 14, 0, 0),
                utc(2025, 2, 5, 15, 0, 0),
            )
            .with_link("https://zoom.us/j/1");
            let json = serde_json::to_string(&event).unwrap();
            let parsed: Event = serde_json::from_str(&json).unwrap();
            assert_eq!(event, parsed);
        }
    }

    #[test]
    fn classification_names() {
        assert_eq!(Classification::Ongoing.as_str(), "ongoing");
        assert_eq!(Classification::ImminentUpcoming.as_str(), "imminent");
        assert_eq!(Classification::Upcoming.as_str(), "upcoming");
        assert_eq!(Classification::Past.as_str(), "past");
    }

    #[test]
    fn display_row_cells_in_column_order() {
        let row = DisplayRow {
            label: "+Standup".to_string(),
            start_text: "10:00".to_string(),
            end_text: "10:30".to_string(),
            link: String::new(),
        };
        assert_eq!(row.cells(), ["+Standup", "10:00", "10:30", ""]);
    }
}
