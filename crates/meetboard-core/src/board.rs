//! One complete render pass: filter, classify, format, render.
//!
//! A [`Board`] is immutable. Every call receives the reference instant from
//! the caller and threads that single value through every classification, so
//! all rows of one table agree on what "now" is.

use chrono::{DateTime, Local, TimeZone, Utc};
use tracing::debug;

use crate::classify::TimeWindowEvaluator;
use crate::event::{Classification, DisplayRow, Event};
use crate::filter::EventFilter;
use crate::format::{RowFormatter, Table, TableRenderer};
use crate::limits::BoardLimits;
use crate::style::StyleConfig;

/// The full event-to-table pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    limits: BoardLimits,
    filter: EventFilter,
    evaluator: TimeWindowEvaluator,
    formatter: RowFormatter,
    renderer: TableRenderer,
}

impl Board {
    /// Creates a board from limits and styling.
    pub fn new(limits: BoardLimits, style: StyleConfig) -> Self {
        Self {
            limits,
            filter: EventFilter::new(limits.max_event_span),
            evaluator: TimeWindowEvaluator::new(limits.imminence_window),
            formatter: RowFormatter::new(style.markers.clone(), limits.title_width),
            renderer: TableRenderer::new(style, limits.max_rows),
        }
    }

    /// Returns the limits this board was built with.
    pub fn limits(&self) -> &BoardLimits {
        &self.limits
    }

    /// Produces at most `max_rows` display rows, in input order.
    pub fn rows_in<Tz: TimeZone>(
        &self,
        events: &[Event],
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> Vec<DisplayRow>
    where
        Tz::Offset: std::fmt::Display,
    {
        self.classified_rows_in(events, now, tz)
            .into_iter()
            .map(|(_, row)| row)
            .collect()
    }

    /// Like [`rows_in`](Self::rows_in), keeping each row's classification.
    ///
    /// Stops classifying once the cap is reached.
    pub fn classified_rows_in<Tz: TimeZone>(
        &self,
        events: &[Event],
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> Vec<(Classification, DisplayRow)>
    where
        Tz::Offset: std::fmt::Display,
    {
        self.filter
            .eligible(events, now)
            .take(self.limits.max_rows)
            .map(|(event, (start, end))| {
                let classification = self.evaluator.classify(start, end, now);
                debug!(
                    summary = %event.summary,
                    classification = classification.as_str(),
                    "event classified"
                );
                (
                    classification,
                    self.formatter.format_row_in(event, classification, tz),
                )
            })
            .collect()
    }

    /// Builds the table for `events` at `now`, times in `tz`.
    pub fn build_in<Tz: TimeZone>(&self, events: &[Event], now: DateTime<Utc>, tz: &Tz) -> Table
    where
        Tz::Offset: std::fmt::Display,
    {
        let rows = self.classified_rows_in(events, now, tz);
        debug!(events = events.len(), rows = rows.len(), "render pass");
        self.renderer.build_classified_in(&rows, now, tz)
    }

    /// Renders `events` at `now` in the local timezone.
    pub fn render(&self, events: &[Event], now: DateTime<Utc>) -> String {
        self.render_in(events, now, &Local)
    }

    /// Renders `events` at `now`, times in `tz`.
    pub fn render_in<Tz: TimeZone>(&self, events: &[Event], now: DateTime<Utc>, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        self.build_in(events, now, tz).to_string()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardLimits::default(), StyleConfig::default())
    }
}
