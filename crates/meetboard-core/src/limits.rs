//! Tunable limits for a render pass.

use chrono::Duration;

/// Default number of data rows in the table.
pub const DEFAULT_MAX_ROWS: usize = 6;
/// Default label width, in characters, markers included.
pub const DEFAULT_TITLE_WIDTH: usize = 57;
/// Default imminence window, in minutes.
pub const DEFAULT_IMMINENCE_MINUTES: i64 = 10;
/// Default longest event span shown, in hours.
pub const DEFAULT_MAX_SPAN_HOURS: i64 = 24;

/// The knobs that bound a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLimits {
    /// Maximum number of data rows rendered.
    pub max_rows: usize,
    /// Maximum label length in characters.
    pub title_width: usize,
    /// Events starting sooner than this are imminent.
    pub imminence_window: Duration,
    /// Events lasting longer than this are never shown.
    pub max_event_span: Duration,
}

impl Default for BoardLimits {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            title_width: DEFAULT_TITLE_WIDTH,
            imminence_window: Duration::minutes(DEFAULT_IMMINENCE_MINUTES),
            max_event_span: Duration::hours(DEFAULT_MAX_SPAN_HOURS),
        }
    }
}

impl BoardLimits {
    /// Set the maximum row count
    #[must_use]
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Set the label width cap
    #[must_use]
    pub fn with_title_width(mut self, width: usize) -> Self {
        self.title_width = width;
        self
    }

    /// Set the imminence window
    #[must_use]
    pub fn with_imminence_window(mut self, window: Duration) -> Self {
        self.imminence_window = window;
        self
    }

    /// Set the longest event span
    #[must_use]
    pub fn with_max_event_span(mut self, span: Duration) -> Self {
        self.max_event_span = span;
        self
    }
}
