//! Bordered table rendering.

use std::fmt;

use chrono::{DateTime, Local, TimeZone, Utc};
use crossterm::style::ContentStyle;
use unicode_width::UnicodeWidthStr;

use crate::event::{Classification, DisplayRow};
use crate::style::{RowKind, StyleConfig};
use crate::time::format_clock;

const COLUMNS: usize = 4;

/// Box-drawing pieces for one horizontal rule: left, fill, junction, right.
struct Rule(char, char, char, char);

const TOP: Rule = Rule('┌', '─', '┬', '┐');
const MIDDLE: Rule = Rule('├', '─', '┼', '┤');
const BOTTOM: Rule = Rule('└', '─', '┴', '┘');
const VERTICAL: char = '│';

/// Lays display rows into a bounded, styled table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRenderer {
    style: StyleConfig,
    max_rows: usize,
}

impl TableRenderer {
    /// Creates a renderer that keeps at most `max_rows` data rows.
    pub fn new(style: StyleConfig, max_rows: usize) -> Self {
        Self { style, max_rows }
    }

    /// Returns the row cap.
    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    /// Builds the table with the header clock in the local timezone.
    pub fn build(&self, rows: &[DisplayRow], now: DateTime<Utc>) -> Table {
        self.build_in(rows, now, &Local)
    }

    /// Builds the table with the header clock in `tz`.
    ///
    /// Row styles are read back from the label markers. Rows past the cap are
    /// dropped; the rest keep their order.
    pub fn build_in<Tz: TimeZone>(&self, rows: &[DisplayRow], now: DateTime<Utc>, tz: &Tz) -> Table
    where
        Tz::Offset: fmt::Display,
    {
        let rows = rows
            .iter()
            .map(|row| (self.style.markers.row_kind(&row.label), row.clone()));
        self.assemble(rows, now, tz)
    }

    /// Builds the table from rows whose classification is already known.
    ///
    /// Styles follow the classification, so an unmarked title that happens to
    /// begin with a marker glyph still gets the normal style.
    pub fn build_classified_in<Tz: TimeZone>(
        &self,
        rows: &[(Classification, DisplayRow)],
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> Table
    where
        Tz::Offset: fmt::Display,
    {
        let rows = rows
            .iter()
            .map(|(classification, row)| (RowKind::from(*classification), row.clone()));
        self.assemble(rows, now, tz)
    }

    fn assemble<Tz: TimeZone>(
        &self,
        rows: impl Iterator<Item = (RowKind, DisplayRow)>,
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> Table
    where
        Tz::Offset: fmt::Display,
    {
        let header = [
            "Summary".to_string(),
            format_clock(now, tz),
            "End".to_string(),
            "Link".to_string(),
        ];

        Table {
            header,
            rows: rows.take(self.max_rows).collect(),
            style: self.style.clone(),
        }
    }

    /// Renders the table to a printable string, clock in local time.
    pub fn render(&self, rows: &[DisplayRow], now: DateTime<Utc>) -> String {
        self.build(rows, now).to_string()
    }

    /// Renders the table to a printable string, clock in `tz`.
    pub fn render_in<Tz: TimeZone>(&self, rows: &[DisplayRow], now: DateTime<Utc>, tz: &Tz) -> String
    where
        Tz::Offset: fmt::Display,
    {
        self.build_in(rows, now, tz).to_string()
    }
}

/// A complete, bounded table ready to print.
///
/// Serialize it with `to_string()`; the whole table is produced at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    header: [String; COLUMNS],
    rows: Vec<(RowKind, DisplayRow)>,
    style: StyleConfig,
}

impl Table {
    /// Returns the column titles.
    pub fn header(&self) -> &[String; COLUMNS] {
        &self.header
    }

    /// Returns the data rows with their style kind, in display order.
    pub fn rows(&self) -> &[(RowKind, DisplayRow)] {
        &self.rows
    }

    /// Returns the style kind of every data row.
    pub fn row_kinds(&self) -> Vec<RowKind> {
        self.rows.iter().map(|(kind, _)| *kind).collect()
    }

    /// Returns the number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true when only the header would be printed.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> [usize; COLUMNS] {
        let mut widths = [0; COLUMNS];
        let header = self.header.each_ref().map(String::as_str);
        for cells in std::iter::once(header).chain(self.rows.iter().map(|(_, row)| row.cells())) {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.width());
            }
        }
        widths
    }

    fn write_rule(&self, f: &mut fmt::Formatter<'_>, widths: &[usize], rule: &Rule) -> fmt::Result {
        let mut line = String::new();
        line.push(rule.0);
        for (i, width) in widths.iter().enumerate() {
            if i > 0 {
                line.push(rule.2);
            }
            line.extend(std::iter::repeat_n(rule.1, width + 2));
        }
        line.push(rule.3);
        write!(f, "{}", self.style.border.apply(line))
    }

    fn write_cells(
        &self,
        f: &mut fmt::Formatter<'_>,
        widths: &[usize],
        cells: [&str; COLUMNS],
        style: ContentStyle,
    ) -> fmt::Result {
        let border = self.style.border.apply(VERTICAL);
        write!(f, "{}", border)?;
        for (cell, width) in cells.iter().zip(widths) {
            let padding = width.saturating_sub(cell.width());
            let padded = format!(" {}{} ", cell, " ".repeat(padding));
            write!(f, "{}{}", style.apply(padded), border)?;
        }
        Ok(())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        let header = self.header.each_ref().map(String::as_str);

        self.write_rule(f, &widths, &TOP)?;
        writeln!(f)?;
        self.write_cells(f, &widths, header, self.style.style_for(RowKind::Header))?;
        writeln!(f)?;

        if !self.rows.is_empty() {
            self.write_rule(f, &widths, &MIDDLE)?;
            writeln!(f)?;
            for (kind, row) in &self.rows {
                self.write_cells(f, &widths, row.cells(), self.style.style_for(*kind))?;
                writeln!(f)?;
            }
        }

        self.write_rule(f, &widths, &BOTTOM)
    }
}
