//! Log setup shared by the meetboard binaries.
//!
//! Everything is written to stderr; stdout belongs to the table.
//! `RUST_LOG` wins over the configured level unless an explicit filter is set.
//!
//! ```ignore
//! use meetboard_core::tracing::{init_tracing, TracingConfig};
//!
//! init_tracing(TracingConfig::verbose())?;
//! ```

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Crates whose events are shown by default.
const CRATE_TARGETS: [&str; 4] = [
    "meetboard",
    "meetboard_core",
    "meetboard_providers",
    "meetboard_client",
];

/// Errors that can occur during tracing initialization
#[derive(Debug, Error)]
pub enum TracingError {
    /// A global subscriber is already installed
    #[error("failed to set global tracing subscriber: {0}")]
    SetGlobalSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),

    /// The filter directive does not parse
    #[error("failed to parse log filter: {0}")]
    EnvFilter(#[from] tracing_subscriber::filter::ParseError),
}

/// How log lines are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One short line per event.
    #[default]
    Compact,
    /// One JSON object per line.
    Json,
}

/// Configuration for tracing initialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Level for meetboard crates when neither `filter` nor `RUST_LOG` is set
    pub level: Level,
    pub format: LogFormat,
    /// Include file and line of the call site
    pub show_location: bool,
    pub show_time: bool,
    /// Explicit filter directive; takes precedence over `RUST_LOG`
    pub filter: Option<String>,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            format: LogFormat::Compact,
            show_location: false,
            show_time: true,
            filter: None,
        }
    }
}

impl TracingConfig {
    /// Debug-level output with call sites, for `--debug`.
    #[must_use]
    pub fn verbose() -> Self {
        Self {
            level: Level::DEBUG,
            show_location: true,
            show_time: false,
            ..Self::default()
        }
    }

    /// JSON lines at info level, for captured stderr of a watch session.
    #[must_use]
    pub fn json() -> Self {
        Self {
            level: Level::INFO,
            format: LogFormat::Json,
            show_location: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Resolves the filter: explicit directive, then `RUST_LOG`, then `level`
    /// for the meetboard crates only.
    pub fn env_filter(&self) -> Result<EnvFilter, TracingError> {
        if let Some(ref filter) = self.filter {
            return Ok(EnvFilter::try_new(filter)?);
        }
        Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directives(self.level))))
    }
}

/// Installs the global subscriber. Call once, early in `main`.
///
/// # Errors
///
/// Fails if a subscriber is already installed or the filter is invalid.
pub fn init_tracing(config: TracingConfig) -> Result<(), TracingError> {
    let filter = config.env_filter()?;

    let base = fmt::layer()
        .with_writer(std::io::stderr)
        .with_file(config.show_location)
        .with_line_number(config.show_location)
        .with_target(true);

    let layer = match config.format {
        LogFormat::Compact if config.show_time => base.compact().boxed(),
        LogFormat::Compact => base.compact().without_time().boxed(),
        LogFormat::Json => base.json().boxed(),
    };

    let subscriber = tracing_subscriber::registry().with(filter).with(layer);
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn default_directives(level: Level) -> String {
    CRATE_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}
