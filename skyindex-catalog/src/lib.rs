//! ADC star catalog ingestion and a HEALPix-keyed in-memory star index.
//!
//! Catalogs in the ADC convention ship as a ReadMe, whose "Byte-by-byte
//! Description" blocks define the fixed-width layout of each data file, and
//! the data files themselves. Loading parses the layout once, slices every
//! data line into typed cells, builds a [`Star`](star::Star) per row, and files
//! it under its HEALPix pixel in a [`StarDao`](dao::StarDao). Area queries are
//! then ordered scans over pixel-id ranges.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`adc`] | Column layout parser, fixed-width row parser, unit-aware cell conversion |
//! | [`star`] | [`Star`](star::Star), [`Magnitude`](star::Magnitude), [`Pixelization`](star::Pixelization) |
//! | [`dao`] | [`StarDao`](dao::StarDao): pixel-keyed index, range and cone queries |
//! | [`healpix`] | NESTED pixel ids, resolution selection, disc-to-ranges cover |
//! | [`ranges`] | [`PixelRange`](ranges::PixelRange), [`PixelRangeSet`](ranges::PixelRangeSet) |
//! | [`reader`] | Plain, gzip and bzip2 line readers |
//! | [`config`] | [`CatalogConfig`](config::CatalogConfig) |
//! | [`load`] | [`load_catalog`](load::load_catalog), streaming [`StarRows`](load::StarRows) |
//! | [`error`] | [`CatalogError`](error::CatalogError) |
//!
//! # Quick Start
//!
//! ```no_run
//! use skyindex_catalog::{load_catalog, CatalogConfig};
//! use skyindex_core::angle::AngleUnits;
//! use skyindex_core::Vector3;
//!
//! let config = CatalogConfig {
//!     magnitude_column: Some("Vmag".into()),
//!     ..CatalogConfig::default()
//! };
//! let dao = load_catalog(&config)?;
//!
//! let vega = Vector3::from_ra_dec(279.2347.degrees(), 38.7837.degrees());
//! for m in dao.stars_in_cone(&vega, 1.degrees()) {
//!     println!("{} at {:.4}°", m.star, m.distance.to_degrees());
//! }
//! # Ok::<(), skyindex_catalog::CatalogError>(())
//! ```
//!
//! # Features
//!
//! - **`cli`** (default): builds the `skyindex-query` binary.
//! - **`integration-tests`**: enables tests against the full catalog in `data/`.

pub mod adc;
pub mod config;
pub mod dao;
pub mod error;
pub mod healpix;
pub mod load;
pub mod ranges;
pub mod reader;
pub mod star;

pub use config::CatalogConfig;
pub use dao::{ConeMatch, StarDao};
pub use error::{CatalogError, Result};
pub use load::{load_catalog, load_from_str, StarColumns, StarRows};
pub use ranges::{PixelRange, PixelRangeSet};
pub use star::{Magnitude, Pixelization, Star};
