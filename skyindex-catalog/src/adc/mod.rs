//! Reader for the ADC fixed-width catalog convention.
//!
//! - [`layout`]: column table of a ReadMe "Byte-by-byte Description" block
//! - [`row`]: slicing one data line into named cells
//! - [`convert`]: unit-aware conversion of cells into angles and magnitudes

pub mod convert;
pub mod layout;
pub mod row;

pub use layout::{find_column, parse_column_layout, ColumnDescriptor};
pub use row::{parse_fixed_width, ParsedCell, ParsedRow};
