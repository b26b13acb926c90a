//! One-shot rendering: fetch, render, print.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};
use meetboard_core::{Board, TimeWindow};
use meetboard_providers::{CalendarSource, GoogleEventsFile};
use tracing::info;

use crate::config::ClientConfig;
use crate::error::ClientResult;

/// Printed instead of a table when the source has nothing for today.
pub const NO_EVENTS_TEXT: &str = "No upcoming events found.";

/// Fetches today's events and prints the table once.
pub fn run(config: &ClientConfig) -> ClientResult<()> {
    let source = GoogleEventsFile::new(config.events_file()?)?;
    let board = Board::new(config.limits(), config.style());
    println!("{}", render_pass(&source, &board, Utc::now(), &Local)?);
    Ok(())
}

/// Runs one fetch and render pass against a single `now`.
///
/// Returns [`NO_EVENTS_TEXT`] when the source returns no events at all. If it
/// returns events that are all filtered out, the header-only table is
/// returned instead.
pub fn render_pass<S, Tz>(
    source: &S,
    board: &Board,
    now: DateTime<Utc>,
    tz: &Tz,
) -> ClientResult<String>
where
    S: CalendarSource + ?Sized,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let window = TimeWindow::around_today(now, tz);
    let events = source.fetch(&window)?;
    info!(source = source.name(), events = events.len(), "fetched events");

    if events.is_empty() {
        return Ok(NO_EVENTS_TEXT.to_string());
    }
    Ok(board.render_in(&events, now, tz))
}
