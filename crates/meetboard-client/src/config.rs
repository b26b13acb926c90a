//! Client configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/meetboard/config.toml` by default. Command-line flags override
//! whatever the file says.
//!
//! ```toml
//! [display]
//! max_rows = 6
//! title_width = 57
//! imminence_minutes = 10
//! max_span_hours = 24
//! color = true
//! started_marker = "+"
//! next_marker = ">"
//!
//! [source]
//! events_file = "~/.cache/meetboard/events.json"
//!
//! [watch]
//! interval_secs = 60
//! ```

use std::path::{Path, PathBuf};

use chrono::Duration;
use meetboard_core::limits::{
    DEFAULT_IMMINENCE_MINUTES, DEFAULT_MAX_ROWS, DEFAULT_MAX_SPAN_HOURS, DEFAULT_TITLE_WIDTH,
};
use meetboard_core::style::{DEFAULT_NEXT_MARKER, DEFAULT_STARTED_MARKER};
use meetboard_core::{BoardLimits, ELLIPSIS, Markers, StyleConfig};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::error::{ClientError, ClientResult};

/// Default refresh period for watch mode.
pub const DEFAULT_WATCH_INTERVAL_SECS: u64 = 60;

/// Longest accepted refresh period for watch mode (one day).
pub const MAX_WATCH_INTERVAL_SECS: u64 = 24 * 60 * 60;

/// Configuration for the meetboard client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Debug mode.
    pub debug: bool,

    /// Table layout and styling.
    pub display: DisplaySettings,

    /// Where events come from.
    pub source: SourceSettings,

    /// Watch mode settings.
    pub watch: WatchSettings,
}

/// Display settings for the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Maximum number of data rows.
    pub max_rows: usize,

    /// Maximum summary width in characters, marker included.
    pub title_width: usize,

    /// Minutes before start during which a meeting is flagged as next.
    pub imminence_minutes: u32,

    /// Events spanning more than this are hidden.
    pub max_span_hours: u32,

    /// Colored output.
    pub color: bool,

    /// Label prefix for meetings in progress.
    pub started_marker: String,

    /// Label prefix for meetings about to start.
    pub next_marker: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            title_width: DEFAULT_TITLE_WIDTH,
            imminence_minutes: DEFAULT_IMMINENCE_MINUTES as u32,
            max_span_hours: DEFAULT_MAX_SPAN_HOURS as u32,
            color: true,
            started_marker: DEFAULT_STARTED_MARKER.to_string(),
            next_marker: DEFAULT_NEXT_MARKER.to_string(),
        }
    }
}

/// Event source settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// Google Calendar events.list JSON file, or `-` for stdin.
    pub events_file: Option<PathBuf>,
}

/// Watch mode settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchSettings {
    /// Seconds between refreshes.
    pub interval_secs: u64,
}

impl Default for WatchSettings {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_WATCH_INTERVAL_SECS,
        }
    }
}

impl ClientConfig {
    /// Loads configuration from the default path, or defaults if it does not exist.
    pub fn load() -> ClientResult<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> ClientResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ClientError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> ClientResult<Self> {
        toml::from_str(content).map_err(|e| ClientError::Config(format!("failed to parse config: {}", e)))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("meetboard")
    }

    /// Applies command-line overrides on top of the file settings.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if cli.debug {
            self.debug = true;
        }
        if let Some(ref events) = cli.events {
            self.source.events_file = Some(events.clone());
        }
        if let Some(rows) = cli.rows {
            self.display.max_rows = rows;
        }
        if let Some(width) = cli.width {
            self.display.title_width = width;
        }
        if let Some(minutes) = cli.imminence_minutes {
            self.display.imminence_minutes = minutes;
        }
        if let Some(hours) = cli.max_span_hours {
            self.display.max_span_hours = hours;
        }
        if cli.no_color {
            self.display.color = false;
        }
        if let Some(interval) = cli.interval {
            self.watch.interval_secs = interval;
        }
    }

    /// Checks the settings for values the board cannot work with.
    pub fn validate(&self) -> ClientResult<()> {
        let display = &self.display;
        if display.max_rows == 0 {
            return Err(ClientError::Config("display.max_rows must be at least 1".into()));
        }
        let longest_marker = display
            .started_marker
            .chars()
            .count()
            .max(display.next_marker.chars().count());
        let min_width = longest_marker + ELLIPSIS.chars().count() + 1;
        if display.title_width < min_width {
            return Err(ClientError::Config(format!(
                "display.title_width must be at least {} to fit a marker, one character and {:?}",
                min_width, ELLIPSIS
            )));
        }
        if display.max_span_hours == 0 {
            return Err(ClientError::Config("display.max_span_hours must be at least 1".into()));
        }
        if display.started_marker.is_empty() || display.next_marker.is_empty() {
            return Err(ClientError::Config("display markers must not be empty".into()));
        }
        if display.started_marker == display.next_marker {
            return Err(ClientError::Config(format!(
                "display.started_marker and display.next_marker are both {:?}",
                display.started_marker
            )));
        }
        if !(1..=MAX_WATCH_INTERVAL_SECS).contains(&self.watch.interval_secs) {
            return Err(ClientError::Config(format!(
                "watch.interval_secs must be between 1 and {}",
                MAX_WATCH_INTERVAL_SECS
            )));
        }
        if let Some(ref path) = self.source.events_file
            && path.as_os_str().is_empty()
        {
            return Err(ClientError::Config("source.events_file must not be empty".into()));
        }
        Ok(())
    }

    /// Builds the board limits from the display settings.
    pub fn limits(&self) -> BoardLimits {
        BoardLimits::default()
            .with_max_rows(self.display.max_rows)
            .with_title_width(self.display.title_width)
            .with_imminence_window(Duration::minutes(i64::from(self.display.imminence_minutes)))
            .with_max_event_span(Duration::hours(i64::from(self.display.max_span_hours)))
    }

    /// Builds the table style from the display settings.
    pub fn style(&self) -> StyleConfig {
        let base = if self.display.color {
            StyleConfig::colored()
        } else {
            StyleConfig::plain()
        };
        base.with_markers(Markers {
            started: self.display.started_marker.clone(),
            next: self.display.next_marker.clone(),
        })
    }

    /// Returns the events file, or an error telling the user how to set one.
    pub fn events_file(&self) -> ClientResult<&Path> {
        self.source.events_file.as_deref().ok_or_else(|| {
            ClientError::Config(
                "no events file configured; pass --events or set source.events_file".into(),
            )
        })
    }
}
