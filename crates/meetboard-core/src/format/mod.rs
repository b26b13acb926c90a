//! Row formatting and table rendering.
//!
//! - [`RowFormatter`] turns one eligible event and its classification into a
//!   [`DisplayRow`](crate::event::DisplayRow)
//! - [`TableRenderer`] lays a bounded set of rows into a bordered table
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use meetboard_core::{Classification, Event, Markers, RowFormatter};
//!
//! let now = Utc::now();
//! let event = Event::new("Standup", now, now + Duration::minutes(15));
//! let formatter = RowFormatter::new(Markers::default(), 57);
//! let row = formatter.format_row_in(&event, Classification::Ongoing, &Utc);
//! assert_eq!(row.label, "+Standup");
//! ```

use std::borrow::Cow;

use chrono::{Local, TimeZone};

use crate::event::{Classification, DisplayRow, Event};
use crate::style::Markers;
use crate::time::format_clock;

mod table;

pub use table::{Table, TableRenderer};

/// Appended to labels that were cut short.
pub const ELLIPSIS: &str = "...";

/// Builds display rows from classified events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFormatter {
    markers: Markers,
    width_cap: usize,
}

impl RowFormatter {
    /// Creates a formatter with the given markers and label width cap.
    pub fn new(markers: Markers, width_cap: usize) -> Self {
        Self { markers, width_cap }
    }

    /// Returns the label width cap.
    pub fn width_cap(&self) -> usize {
        self.width_cap
    }

    /// Formats a row with times in the local timezone.
    pub fn format_row(&self, event: &Event, classification: Classification) -> DisplayRow {
        self.format_row_in(event, classification, &Local)
    }

    /// Formats a row with times in `tz`.
    ///
    /// Missing timestamps render as empty cells. Control characters in the
    /// summary and link become spaces. The marker is never cut off; only the
    /// summary after it is shortened to fit the cap.
    pub fn format_row_in<Tz: TimeZone>(
        &self,
        event: &Event,
        classification: Classification,
        tz: &Tz,
    ) -> DisplayRow
    where
        Tz::Offset: std::fmt::Display,
    {
        let summary = strip_controls(&event.summary);
        let label = match self.markers.for_classification(classification) {
            Some(marker) => {
                let room = self.width_cap.saturating_sub(marker.chars().count());
                format!("{}{}", marker, ellipsis(&summary, room))
            }
            None => ellipsis(&summary, self.width_cap).into_owned(),
        };

        DisplayRow {
            label,
            start_text: event
                .start
                .map(|dt| format_clock(dt, tz))
                .unwrap_or_default(),
            end_text: event.end.map(|dt| format_clock(dt, tz)).unwrap_or_default(),
            link: strip_controls(&event.link).into_owned(),
        }
    }
}

/// Replaces control characters (newlines, tabs, ESC) with spaces so a cell
/// stays on one line and cannot emit terminal escapes.
pub fn strip_controls(s: &str) -> Cow<'_, str> {
    if !s.chars().any(char::is_control) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        s.chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect(),
    )
}

/// Truncates a string with ellipsis if it exceeds `max_len` characters.
///
/// The ellipsis counts toward `max_len`, so the result never exceeds it.
pub fn ellipsis(s: &str, max_len: usize) -> Cow<'_, str> {
    if s.chars().count() <= max_len {
        return Cow::Borrowed(s);
    }

    let ellipsis_len = ELLIPSIS.chars().count();
    if max_len <= ellipsis_len {
        return Cow::Owned(ELLIPSIS.chars().take(max_len).collect());
    }

    let truncated: String = s.chars().take(max_len - ellipsis_len).collect();
    Cow::Owned(format!("{}{}", truncated, ELLIPSIS))
}
