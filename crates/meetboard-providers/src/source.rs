//! The `CalendarSource` trait.

use meetboard_core::{Event, TimeWindow};

use crate::error::SourceResult;

/// Anything that can hand the board a list of events.
///
/// Sources do the remote-query part of the pipeline: they keep only events
/// overlapping `window`, drop cancelled ones, and return them ordered by start
/// time. Events without timestamps are passed through untouched; excluding
/// them is the board's job.
pub trait CalendarSource {
    /// Short identifier used in logs and error messages.
    fn name(&self) -> &str;

    /// Fetches the events overlapping `window`.
    fn fetch(&self, window: &TimeWindow) -> SourceResult<Vec<Event>>;
}

impl<S: CalendarSource + ?Sized> CalendarSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn fetch(&self, window: &TimeWindow) -> SourceResult<Vec<Event>> {
        (**self).fetch(window)
    }
}

/// A fixed list of events, mostly useful in tests and demos.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    events: Vec<Event>,
}

impl StaticSource {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }
}

impl CalendarSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch(&self, window: &TimeWindow) -> SourceResult<Vec<Event>> {
        Ok(select_window(self.events.clone(), window))
    }
}

/// Keeps events overlapping `window` and orders them by start time.
///
/// Events missing a timestamp are kept; they sort first because an absent
/// start orders before any instant. The sort is stable.
pub fn select_window(events: Vec<Event>, window: &TimeWindow) -> Vec<Event> {
    let mut kept: Vec<Event> = events
        .into_iter()
        .filter(|event| match event.interval() {
            Some((start, end)) => window.overlaps(start, end),
            None => true,
        })
        .collect();
    kept.sort_by_key(|event| event.start);
    kept
}
