//! Google Calendar `events.list` responses read from disk or stdin.
//!
//! The file holds what the Calendar API returns for
//! `events.list?singleEvents=true&orderBy=startTime`, either the whole response
//! object (`{"items": [...]}`) or just the array of events. Fetching that
//! response is left to whatever tool produced the file.

use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use meetboard_core::{Event, TimeWindow};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{SourceError, SourceResult};
use crate::source::{CalendarSource, select_window};

const SOURCE_NAME: &str = "google-file";

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Where the JSON comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventsInput {
    Stdin,
    File(PathBuf),
}

impl EventsInput {
    /// Interprets `-` as stdin and anything else as a file path.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path.as_os_str() == STDIN_PATH {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }

    /// Returns true when the input can be read more than once.
    pub fn is_rereadable(&self) -> bool {
        matches!(self, Self::File(_))
    }

    fn read_to_string(&self) -> SourceResult<String> {
        match self {
            Self::Stdin => {
                let mut buf = String::new();
                std::io::stdin()
                    .lock()
                    .read_to_string(&mut buf)
                    .map_err(|e| SourceError::io("failed to read stdin").with_cause(e))?;
                Ok(buf)
            }
            Self::File(path) => std::fs::read_to_string(path).map_err(|e| {
                SourceError::io(format!("failed to read {}", path.display())).with_cause(e)
            }),
        }
    }
}

/// Reads events from a Google Calendar `events.list` JSON dump.
#[derive(Debug, Clone)]
pub struct GoogleEventsFile {
    input: EventsInput,
}

impl GoogleEventsFile {
    /// Creates a source reading `path`, or stdin when `path` is `-`.
    pub fn new(path: impl AsRef<Path>) -> SourceResult<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(SourceError::configuration("events file path is empty")
                .with_source_name(SOURCE_NAME));
        }
        Ok(Self {
            input: EventsInput::from_path(path),
        })
    }

    pub fn input(&self) -> &EventsInput {
        &self.input
    }
}

impl CalendarSource for GoogleEventsFile {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn fetch(&self, window: &TimeWindow) -> SourceResult<Vec<Event>> {
        let body = self
            .input
            .read_to_string()
            .map_err(|e| e.with_source_name(SOURCE_NAME))?;
        let events = parse_events(&body).map_err(|e| e.with_source_name(SOURCE_NAME))?;
        let total = events.len();
        let events = select_window(events, window);
        debug!(total, kept = events.len(), "events read from {:?}", self.input);
        Ok(events)
    }
}

/// Parses an `events.list` response (object or bare array) into events.
///
/// Cancelled events are skipped. Date-only and unparseable timestamps become
/// absent, which marks the event as all-day. Order is preserved.
pub fn parse_events(json: &str) -> SourceResult<Vec<Event>> {
    let document: EventListDocument = serde_json::from_str(json)?;
    let items = match document {
        EventListDocument::Response(response) => response.items,
        EventListDocument::Items(items) => items,
    };
    Ok(items.into_iter().filter_map(convert_event).collect())
}

fn convert_event(event: ApiEvent) -> Option<Event> {
    if event.status.as_deref() == Some("cancelled") {
        debug!(id = ?event.id, "skipping cancelled event");
        return None;
    }

    let summary = event.summary.unwrap_or_default();
    let start = parse_time(&event.start, &summary, "start");
    let end = parse_time(&event.end, &summary, "end");
    let link = event
        .hangout_link
        .or_else(|| event.conference_data.and_then(first_video_uri))
        .unwrap_or_default();

    Some(Event {
        summary,
        start,
        end,
        link,
    })
}

fn parse_time(time: &ApiEventTime, summary: &str, which: &str) -> Option<DateTime<Utc>> {
    let raw = time.date_time.as_deref()?;
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| warn!(summary, "failed to parse {} time {:?}: {}", which, raw, e))
        .ok()
}

fn first_video_uri(data: ApiConferenceData) -> Option<String> {
    data.entry_points
        .unwrap_or_default()
        .into_iter()
        .find(|ep| ep.entry_point_type == "video")
        .and_then(|ep| ep.uri)
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EventListDocument {
    Items(Vec<ApiEvent>),
    Response(EventListResponse),
}

/// Response from the events.list endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventListResponse {
    #[serde(default)]
    items: Vec<ApiEvent>,
}

/// A single event from the Google Calendar API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiEvent {
    id: Option<String>,
    summary: Option<String>,
    #[serde(default)]
    start: ApiEventTime,
    #[serde(default)]
    end: ApiEventTime,
    status: Option<String>,
    hangout_link: Option<String>,
    conference_data: Option<ApiConferenceData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiEventTime {
    date_time: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiConferenceData {
    entry_points: Option<Vec<ApiEntryPoint>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiEntryPoint {
    entry_point_type: String,
    uri: Option<String>,
}
