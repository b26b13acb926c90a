//! Eligibility filtering for events.
//!
//! An event is shown only if it has both timestamps, a non-zero duration,
//! has not finished yet, and does not span more than the configured maximum.
//! Ineligible events are dropped silently; nothing here fails.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::event::Event;

/// Why an event was left off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// Start or end timestamp is missing.
    AllDay,
    /// `start == end`.
    ZeroDuration,
    /// `now` is at or after the end.
    Finished,
    /// The event spans more than the allowed maximum.
    TooLong,
}

impl Exclusion {
    /// Returns a short name for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllDay => "all_day",
            Self::ZeroDuration => "zero_duration",
            Self::Finished => "finished",
            Self::TooLong => "too_long",
        }
    }
}

/// Drops events that should never appear on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventFilter {
    max_event_span: Duration,
}

impl EventFilter {
    /// Creates a filter rejecting events longer than `max_event_span`.
    pub fn new(max_event_span: Duration) -> Self {
        Self { max_event_span }
    }

    /// Checks a single event, returning its interval if it is eligible.
    ///
    /// Rules are applied in order; the first failing one is reported.
    pub fn check(
        &self,
        event: &Event,
        now: DateTime<Utc>,
    ) -> Result<(DateTime<Utc>, DateTime<Utc>), Exclusion> {
        let (start, end) = event.interval().ok_or(Exclusion::AllDay)?;
        if start == end {
            return Err(Exclusion::ZeroDuration);
        }
        if now >= end {
            return Err(Exclusion::Finished);
        }
        if end - start > self.max_event_span {
            return Err(Exclusion::TooLong);
        }
        Ok((start, end))
    }

    /// Returns the eligible events, in input order.
    pub fn filter<'a>(&self, events: &'a [Event], now: DateTime<Utc>) -> Vec<&'a Event> {
        self.eligible(events, now).map(|(event, _)| event).collect()
    }

    /// Lazily yields eligible events with their interval, in input order.
    pub fn eligible<'a>(
        &self,
        events: &'a [Event],
        now: DateTime<Utc>,
    ) -> impl Iterator<Item = (&'a Event, (DateTime<Utc>, DateTime<Utc>))> + 'a {
        let filter = *self;
        events
            .iter()
            .filter_map(move |event| match filter.check(event, now) {
                Ok(interval) => Some((event, interval)),
                Err(reason) => {
                    debug!(summary = %event.summary, reason = reason.as_str(), "event excluded");
                    None
                }
            })
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::new(Duration::hours(crate::limits::DEFAULT_MAX_SPAN_HOURS))
    }
}
