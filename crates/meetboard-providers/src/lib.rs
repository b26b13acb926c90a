//! Calendar sources for meetboard.
//!
//! - [`CalendarSource`] - the trait every backend implements
//! - [`GoogleEventsFile`] - reads a Google Calendar `events.list` JSON dump
//! - [`StaticSource`] - a fixed in-memory list
//! - [`SourceError`] - error type for fetch failures
//!
//! # Example
//!
//! ```no_run
//! use chrono::{Local, Utc};
//! use meetboard_core::{Board, TimeWindow};
//! use meetboard_providers::{CalendarSource, GoogleEventsFile};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = GoogleEventsFile::new("events.json")?;
//! let now = Utc::now();
//! let events = source.fetch(&TimeWindow::around_today(now, &Local))?;
//! println!("{}", Board::default().render(&events, now));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod google;
pub mod source;

pub use error::{SourceError, SourceErrorCode, SourceResult};
pub use google::{EventsInput, GoogleEventsFile, STDIN_PATH, parse_events};
pub use source::{CalendarSource, StaticSource, select_window};
