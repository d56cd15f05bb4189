//! Column layout extraction from ADC "Byte-by-byte Description" blocks.
//!
//! An ADC ReadMe describes each data file with a block like:
//!
//! ```text
//! Byte-by-byte Description of file: main.dat
//! --------------------------------------------------------------------------------
//!    Bytes Format Units   Label     Explanations
//! --------------------------------------------------------------------------------
//!    1-   6  I6    ---     HIP       Hipparcos identifier
//!         8  A1    ---     Comp      Component identifier
//!   10-  21  F12.8 deg     RAdeg     Right ascension (ICRS, Epoch 1991.25)
//! --------------------------------------------------------------------------------
//! ```
//!
//! The table sits between the second and third 80-dash rule of the block. Each
//! row is itself fixed-width:
//!
//! | Bytes | Field |
//! |-------|-------|
//! | `[0, 4)` | first byte, 1-based, blank for single-byte columns |
//! | `[4, 9)` | `-` separator and last byte, 1-based |
//! | `[9, 16)` | Fortran-style format code |
//! | `[16, 23)` | unit |
//! | `[23, 35)` | label (column name) |
//! | `[35, ..)` | free-text explanation |
//!
//! Rows with neither byte position continue the previous row's explanation.

use crate::error::{CatalogError, Result};
use log::debug;
use std::borrow::Cow;

/// Literal header that starts every byte-by-byte description block.
pub const DESCRIPTION_MARKER: &str = "Byte-by-byte Description of file";

/// Width of the dashed rule that brackets the column table.
pub const RULE_WIDTH: usize = 80;

const BEGIN_FIELD: (usize, usize) = (0, 4);
const END_FIELD: (usize, usize) = (4, 9);
const FORMAT_FIELD: (usize, usize) = (9, 16);
const UNIT_FIELD: (usize, usize) = (16, 23);
const LABEL_FIELD: (usize, usize) = (23, 35);
const DESCRIPTION_START: usize = 35;

/// One column of a fixed-width data file.
///
/// `begin` and `end` are 0-based, half-open byte offsets into a data line.
/// `end == None` means the column runs to the end of the line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnDescriptor {
    pub name: String,
    pub unit: String,
    pub format: String,
    pub description: String,
    pub begin: usize,
    pub end: Option<usize>,
}

impl ColumnDescriptor {
    /// Creates a descriptor with empty format and description.
    pub fn new(name: impl Into<String>, unit: impl Into<String>, begin: usize, end: Option<usize>) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            format: String::new(),
            description: String::new(),
            begin,
            end,
        }
    }

    /// Number of bytes the column spans, if bounded.
    pub fn width(&self) -> Option<usize> {
        self.end.map(|end| end.saturating_sub(self.begin))
    }
}

/// Parses the column table of the `block`-th (0-based) byte-by-byte description.
///
/// # Errors
/// [`CatalogError::Format`] if the document has fewer than `block + 1`
/// description blocks, the block lacks the two rules that open the table, or
/// a table row carries an unreadable byte position.
pub fn parse_column_layout(document: &str, block: usize) -> Result<Vec<ColumnDescriptor>> {
    let segment = document.split(DESCRIPTION_MARKER).nth(block + 1).ok_or_else(|| {
        let found = document.matches(DESCRIPTION_MARKER).count();
        CatalogError::format(format!(
            "requested description block {} but the document has {} '{}' block(s)",
            block, found, DESCRIPTION_MARKER
        ))
    })?;

    let table = column_table(segment).ok_or_else(|| {
        CatalogError::format(format!(
            "description block {} has no column table between {}-dash rules",
            block, RULE_WIDTH
        ))
    })?;

    let mut columns: Vec<ColumnDescriptor> = Vec::new();
    for line in table {
        if line.trim().is_empty() {
            continue;
        }
        match parse_table_line(line)? {
            TableLine::Column(column) => columns.push(column),
            TableLine::Continuation(text) => {
                let previous = columns.last_mut().ok_or_else(|| {
                    CatalogError::format(format!(
                        "explanation continues before any column is defined: '{}'",
                        line.trim()
                    ))
                })?;
                if !previous.description.is_empty() {
                    previous.description.push(' ');
                }
                previous.description.push_str(&text);
            }
        }
    }

    debug!(
        "parsed {} column descriptors from description block {}",
        columns.len(),
        block
    );
    Ok(columns)
}

/// Looks up a column by its label.
pub fn find_column<'a>(columns: &'a [ColumnDescriptor], name: &str) -> Option<&'a ColumnDescriptor> {
    columns.iter().find(|c| c.name == name)
}

/// Returns the lines strictly between the second rule and the third (or the
/// end of the segment), or `None` if fewer than two rules are present.
fn column_table(segment: &str) -> Option<Vec<&str>> {
    let mut rules_seen = 0;
    let mut table = Vec::new();
    for line in segment.lines() {
        if is_rule(line) {
            rules_seen += 1;
            if rules_seen == 3 {
                break;
            }
            continue;
        }
        if rules_seen == 2 {
            table.push(line);
        }
    }
    (rules_seen >= 2).then_some(table)
}

fn is_rule(line: &str) -> bool {
    let line = line.trim_end();
    line.len() == RULE_WIDTH && line.bytes().all(|b| b == b'-')
}

enum TableLine {
    Column(ColumnDescriptor),
    Continuation(String),
}

fn parse_table_line(line: &str) -> Result<TableLine> {
    let begin = parse_position(&field(line, BEGIN_FIELD), line)?;
    let end = parse_position(&field(line, END_FIELD), line)?;
    let format = field(line, FORMAT_FIELD).trim().to_string();
    let unit = field(line, UNIT_FIELD).trim().to_string();
    let name = field(line, LABEL_FIELD).trim().to_string();
    let description = tail(line, DESCRIPTION_START).trim().to_string();

    let (begin, end) = match (begin, end) {
        (Some(begin), end) => (begin - 1, end),
        // Single-byte column: only the last byte is written.
        (None, Some(end)) => (end - 1, Some(end)),
        (None, None) if format.is_empty() && unit.is_empty() && name.is_empty() => {
            return Ok(TableLine::Continuation(line.trim().to_string()));
        }
        (None, None) => {
            return Err(CatalogError::format(format!(
                "column '{}' has no byte position: '{}'",
                name, line
            )));
        }
    };

    if let Some(end) = end {
        if begin >= end {
            return Err(CatalogError::format(format!(
                "column '{}' starts at byte {} but ends at byte {}",
                name,
                begin + 1,
                end
            )));
        }
    }

    Ok(TableLine::Column(ColumnDescriptor {
        name,
        unit,
        format,
        description,
        begin,
        end,
    }))
}

/// Parses a 1-based byte position; the `-` range separator is ignored.
fn parse_position(text: &str, line: &str) -> Result<Option<usize>> {
    let digits = text.trim_matches(|c: char| c == '-' || c.is_whitespace());
    if digits.is_empty() {
        return Ok(None);
    }
    match digits.parse::<usize>() {
        Ok(0) | Err(_) => Err(CatalogError::format(format!(
            "invalid byte position '{}' in '{}'",
            digits, line
        ))),
        Ok(position) => Ok(Some(position)),
    }
}

/// Byte slice `[start, end)` of `line`, clipped to its length.
fn field(line: &str, (start, end): (usize, usize)) -> Cow<'_, str> {
    let bytes = line.as_bytes();
    let end = end.min(bytes.len());
    if start >= end {
        return Cow::Borrowed("");
    }
    String::from_utf8_lossy(&bytes[start..end])
}

fn tail(line: &str, start: usize) -> Cow<'_, str> {
    field(line, (start, line.len()))
}
