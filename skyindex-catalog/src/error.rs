//! Error type for catalog parsing and loading.
//!
//! Every variant is terminal for the operation that raised it: a malformed
//! metadata document aborts the load before any row is read, and a bad row
//! aborts the whole load with its line number attached.

use skyindex_core::AstroError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The metadata document does not have the expected ADC structure.
    #[error("malformed catalog description: {0}")]
    Format(String),

    #[error("unknown unit '{unit}' in column {column}")]
    UnknownUnit { unit: String, column: String },

    #[error("invalid value '{value}' in column {column}: {source}")]
    Value {
        column: String,
        value: String,
        #[source]
        source: AstroError,
    },

    #[error("column {0} not present in row")]
    MissingColumn(String),

    /// A row-level failure, tagged with the 1-based line number of the data file.
    #[error("line {line}: {source}")]
    Row {
        line: usize,
        #[source]
        source: Box<CatalogError>,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    pub(crate) fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }

    pub(crate) fn at_line(self, line: usize) -> Self {
        Self::Row {
            line,
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, looking through [`CatalogError::Row`] wrappers.
    pub fn root(&self) -> &CatalogError {
        match self {
            Self::Row { source, .. } => source.root(),
            other => other,
        }
    }
}
