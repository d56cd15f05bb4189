//! Exact angles and direction vectors for star catalog indexing.
//!
//! `skyindex-core` holds the value types shared by the catalog parser and the
//! spatial index. Catalog coordinates are kept as integer micro-arcseconds so
//! unit conversions never drift; they become floating-point unit vectors only
//! when a position is pixelized or compared geometrically.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`], [`AngleUnit`](angle::AngleUnit), literal constructors, exact decimal parsing |
//! | [`vector`] | [`Vector3`] unit directions, spherical conversion, angular separation |
//! | [`constants`] | Micro-arcsecond unit scales and π multiples |
//! | [`errors`] | [`AstroError`] and [`AstroResult`] |
//!
//! # Features
//!
//! - **`serde`**: `Serialize`/`Deserialize` for [`Angle`] (as micro-arcseconds)
//!   and [`Vector3`].

pub mod angle;
pub mod constants;
pub mod errors;
pub mod vector;

pub use angle::Angle;
pub use errors::{AstroError, AstroResult, MathErrorKind};
pub use vector::Vector3;
