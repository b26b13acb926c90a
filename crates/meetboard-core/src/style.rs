//! Markers and terminal styles for the board.
//!
//! [`StyleConfig`] is the single place that knows which marker glyph means
//! what. The row formatter embeds markers from it. Row styles come from the
//! classification when the caller has it, and are otherwise read back from
//! the label markers.

use crossterm::style::{Attribute, Color, ContentStyle};

use crate::event::Classification;

/// Default marker for meetings in progress.
pub const DEFAULT_STARTED_MARKER: &str = "+";
/// Default marker for meetings starting soon.
pub const DEFAULT_NEXT_MARKER: &str = ">";

/// Visual category of a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// The column titles.
    Header,
    /// A meeting in progress.
    Started,
    /// A meeting starting soon.
    Next,
    /// Everything else.
    Normal,
}

impl From<Classification> for RowKind {
    fn from(classification: Classification) -> Self {
        match classification {
            Classification::Ongoing => Self::Started,
            Classification::ImminentUpcoming => Self::Next,
            Classification::Upcoming | Classification::Past => Self::Normal,
        }
    }
}

/// Marker glyphs prefixed to labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    /// Prefix for ongoing meetings.
    pub started: String,
    /// Prefix for imminent meetings.
    pub next: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            started: DEFAULT_STARTED_MARKER.to_string(),
            next: DEFAULT_NEXT_MARKER.to_string(),
        }
    }
}

impl Markers {
    /// Returns the marker for a classification, if it gets one.
    pub fn for_classification(&self, classification: Classification) -> Option<&str> {
        match classification {
            Classification::Ongoing => Some(&self.started),
            Classification::ImminentUpcoming => Some(&self.next),
            Classification::Upcoming | Classification::Past => None,
        }
    }

    /// Reads a label's marker back into a row kind.
    ///
    /// Only meaningful for labels this formatter produced: a title that
    /// happens to start with a marker glyph reads as marked. Empty markers
    /// never match.
    pub fn row_kind(&self, label: &str) -> RowKind {
        if !self.next.is_empty() && label.starts_with(&self.next) {
            RowKind::Next
        } else if !self.started.is_empty() && label.starts_with(&self.started) {
            RowKind::Started
        } else {
            RowKind::Normal
        }
    }
}

/// Immutable styling for one board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    /// Label markers.
    pub markers: Markers,
    /// Style of the header row.
    pub header: ContentStyle,
    /// Style of ordinary rows.
    pub normal: ContentStyle,
    /// Style of rows for meetings in progress.
    pub started: ContentStyle,
    /// Style of rows for meetings starting soon.
    pub next: ContentStyle,
    /// Style of the table borders.
    pub border: ContentStyle,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::colored()
    }
}

impl StyleConfig {
    /// The standard color scheme.
    pub fn colored() -> Self {
        let black = Color::AnsiValue(0);
        Self {
            markers: Markers::default(),
            header: styled(rgb(0xFA, 0xFA, 0xFA), black, false),
            normal: styled(Color::AnsiValue(7), black, false),
            started: styled(rgb(0x62, 0xD9, 0xF5), rgb(0x00, 0x00, 0xFF), true),
            next: styled(rgb(0x00, 0x00, 0x00), rgb(0x00, 0xFF, 0x00), true),
            border: {
                let mut style = ContentStyle::new();
                style.foreground_color = Some(Color::AnsiValue(99));
                style
            },
        }
    }

    /// No colors or attributes at all, for pipes and tests.
    pub fn plain() -> Self {
        Self {
            markers: Markers::default(),
            header: ContentStyle::new(),
            normal: ContentStyle::new(),
            started: ContentStyle::new(),
            next: ContentStyle::new(),
            border: ContentStyle::new(),
        }
    }

    /// Builder method to replace the markers.
    #[must_use]
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    /// Returns the style for a row kind.
    pub fn style_for(&self, kind: RowKind) -> ContentStyle {
        match kind {
            RowKind::Header => self.header,
            RowKind::Started => self.started,
            RowKind::Next => self.next,
            RowKind::Normal => self.normal,
        }
    }
}

fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

fn styled(foreground: Color, background: Color, bold: bool) -> ContentStyle {
    let mut style = ContentStyle::new();
    style.foreground_color = Some(foreground);
    style.background_color = Some(background);
    if bold {
        style.attributes.set(Attribute::Bold);
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    mod markers {
        use super::*;

        #[test]
        fn defaults() {
            let markers = Markers::default();
            assert_eq!(markers.started, "+");
            assert_eq!(markers.next, ">");
        }

        #[test]
        fn marker_per_classification() {
            let markers = Markers::default();
            assert_eq!(markers.for_classification(Classification::Ongoing), Some("+"));
            assert_eq!(
                markers.for_classification(Classification::ImminentUpcoming),
                Some(">")
            );
            assert_eq!(markers.for_classification(Classification::Upcoming), None);
            assert_eq!(markers.for_classification(Classification::Past), None);
        }

        #[test]
        fn row_kind_from_label() {
            let markers = Markers::default();
            assert_eq!(markers.row_kind("+Standup"), RowKind::Started);
            assert_eq!(markers.row_kind(">Review"), RowKind::Next);
            assert_eq!(markers.row_kind("Lunch"), RowKind::Normal);
            assert_eq!(markers.row_kind(""), RowKind::Normal);
        }

        #[test]
        fn row_kind_from_classification() {
            assert_eq!(RowKind::from(Classification::Ongoing), RowKind::Started);
            assert_eq!(RowKind::from(Classification::ImminentUpcoming), RowKind::Next);
            assert_eq!(RowKind::from(Classification::Upcoming), RowKind::Normal);
            assert_eq!(RowKind::from(Classification::Past), RowKind::Normal);
        }

        #[test]
        fn custom_glyphs() {
            let markers = Markers {
                started: "● ".to_string(),
                next: "→ ".to_string(),
            };
            assert_eq!(markers.row_kind("● Standup"), RowKind::Started);
            assert_eq!(markers.row_kind("→ Review"), RowKind::Next);
            assert_eq!(markers.row_kind("+Standup"), RowKind::Normal);
        }

        #[test]
        fn empty_marker_never_matches() {
            let markers = Markers {
                started: String::new(),
                next: String::new(),
            };
            assert_eq!(markers.row_kind("anything"), RowKind::Normal);
        }
    }

    #[test]
    fn plain_has_no_colors() {
        let style = StyleConfig::plain();
        for kind in [RowKind::Header, RowKind::Started, RowKind::Next, RowKind::Normal] {
            let s = style.style_for(kind);
            assert!(s.foreground_color.is_none());
            assert!(s.background_color.is_none());
            assert!(s.attributes.is_empty());
        }
    }

    #[test]
    fn colored_rows_are_distinct() {
        let style = StyleConfig::colored();
        assert_ne!(style.style_for(RowKind::Started), style.style_for(RowKind::Normal));
        assert_ne!(style.style_for(RowKind::Next), style.style_for(RowKind::Normal));
        assert_ne!(style.style_for(RowKind::Started), style.style_for(RowKind::Next));
        assert!(style.started.attributes.has(Attribute::Bold));
        assert!(style.next.attributes.has(Attribute::Bold));
    }
}
