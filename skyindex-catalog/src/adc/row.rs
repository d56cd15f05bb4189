//! Fixed-width row slicing.
//!
//! [`parse_fixed_width`] applies a column layout to one data line. Catalogs
//! routinely drop trailing optional columns, so slicing never fails on short
//! lines: a column that starts past the end of the line is empty, and one that
//! ends past it takes the rest of the line.

use super::layout::ColumnDescriptor;
use crate::error::{CatalogError, Result};

/// One trimmed cell of a data line, with the unit declared for its column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedCell {
    pub name: String,
    pub value: String,
    /// Declared unit; `None` when the layout leaves it blank.
    pub unit: Option<String>,
}

impl ParsedCell {
    pub fn is_blank(&self) -> bool {
        self.value.is_empty()
    }
}

/// Cells of one data line, keyed by column name, in layout order.
///
/// A repeated column name keeps the position of its first occurrence and the
/// value of its last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRow {
    cells: Vec<ParsedCell>,
}

impl ParsedRow {
    pub fn get(&self, name: &str) -> Option<&ParsedCell> {
        self.cells.iter().find(|cell| cell.name == name)
    }

    /// Like [`get`](Self::get), but a missing column is an error.
    pub fn require(&self, name: &str) -> Result<&ParsedCell> {
        self.get(name)
            .ok_or_else(|| CatalogError::MissingColumn(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParsedCell> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn insert(&mut self, cell: ParsedCell) {
        match self.cells.iter_mut().find(|c| c.name == cell.name) {
            Some(existing) => *existing = cell,
            None => self.cells.push(cell),
        }
    }
}

impl<'a> IntoIterator for &'a ParsedRow {
    type Item = &'a ParsedCell;
    type IntoIter = std::slice::Iter<'a, ParsedCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Slices `line` into one trimmed cell per column.
pub fn parse_fixed_width(line: &str, columns: &[ColumnDescriptor]) -> ParsedRow {
    let mut row = ParsedRow {
        cells: Vec::with_capacity(columns.len()),
    };
    for column in columns {
        let unit = (!column.unit.is_empty()).then(|| column.unit.clone());
        row.insert(ParsedCell {
            name: column.name.clone(),
            value: slice_column(line, column),
            unit,
        });
    }
    row
}

fn slice_column(line: &str, column: &ColumnDescriptor) -> String {
    let bytes = line.as_bytes();
    if column.begin >= bytes.len() {
        return String::new();
    }
    let raw = match column.end {
        Some(end) if end < bytes.len() => &bytes[column.begin..end.max(column.begin)],
        _ => &bytes[column.begin..],
    };
    String::from_utf8_lossy(raw).trim().to_string()
}
