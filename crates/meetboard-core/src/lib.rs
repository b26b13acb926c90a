//! Core pipeline: events, classification, row formatting, table rendering

pub mod board;
pub mod classify;
pub mod event;
pub mod filter;
pub mod format;
pub mod limits;
pub mod style;
pub mod time;
pub mod tracing;

pub use board::Board;
pub use classify::{classify, TimeWindowEvaluator};
pub use event::{Classification, DisplayRow, Event};
pub use filter::{EventFilter, Exclusion};
pub use format::{ellipsis, strip_controls, RowFormatter, Table, TableRenderer, ELLIPSIS};
pub use limits::BoardLimits;
pub use style::{Markers, RowKind, StyleConfig};
pub use time::{format_clock, TimeWindow};
pub use self::tracing::{init_tracing, LogFormat, TracingConfig, TracingError};
