//! Catalog configuration.
//!
//! A catalog is described by where its files live, which metadata block
//! describes the data file, and which columns carry the coordinates. New
//! ADC catalogs are supported by a new configuration, not new code.
//!
//! ```json
//! {
//!   "metadata": "data/xhip.readme",
//!   "data": "data/xhip.dat.bz2",
//!   "block": 0,
//!   "ra_column": "RAdeg",
//!   "dec_column": "DEdeg"
//! }
//! ```

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use skyindex_core::angle::AngleUnits;
use skyindex_core::Angle;
use std::path::{Path, PathBuf};

/// Default sky resolution of the index.
pub const DEFAULT_RESOLUTION_ARCMIN: i64 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// ReadMe holding the byte-by-byte description.
    pub metadata: PathBuf,
    /// Fixed-width data file, optionally `.gz` or `.bz2` compressed.
    pub data: PathBuf,
    /// Zero-based index of the description block for `data`.
    pub block: usize,
    pub ra_column: String,
    pub dec_column: String,
    pub magnitude_column: Option<String>,
    /// Sky resolution, in micro-arcseconds when serialized.
    pub resolution: Angle,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            metadata: PathBuf::from("data/xhip.readme"),
            data: PathBuf::from("data/xhip.dat.bz2"),
            block: 0,
            ra_column: "RAdeg".to_string(),
            dec_column: "DEdeg".to_string(),
            magnitude_column: None,
            resolution: DEFAULT_RESOLUTION_ARCMIN.arc_minutes(),
        }
    }
}

impl CatalogConfig {
    /// Reads a JSON configuration; absent fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| CatalogError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| CatalogError::Config(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| CatalogError::Config(e.to_string()))
    }
}
