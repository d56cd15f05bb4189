//! Core angle type for catalog coordinates.
//!
//! [`Angle`] stores a signed count of micro-arcseconds. Catalog values are
//! converted into this integer representation once, with exact decimal
//! arithmetic, and every comparison or unit conversion afterwards works on the
//! integer. Floating point enters only when a direction vector is needed
//! ([`Angle::to_radians`]).
//!
//! # Quick Start
//!
//! ```
//! use skyindex_core::angle::{AngleUnit, AngleUnits};
//! use skyindex_core::Angle;
//!
//! let a = 1.degrees();
//! assert_eq!(a, 60.arc_minutes());
//! assert_eq!(a, 3600.arc_seconds());
//! assert_eq!(1000.milliarcseconds(), 1.arc_seconds());
//!
//! let ra = Angle::parse_decimal("000.00091185", AngleUnit::Degree).unwrap();
//! assert_eq!(ra.micro_arcseconds(), 3_282_660);
//! ```
//!
//! # Range
//!
//! `i64` micro-arcseconds covers about ±2.5 million degrees, far beyond any
//! position a catalog can hold.

use crate::constants::{
    MICROARCSEC_PER_ARCMIN, MICROARCSEC_PER_ARCSEC, MICROARCSEC_PER_DEGREE,
    MICROARCSEC_PER_MILLIARCSEC, MICROARCSEC_TO_RAD,
};
use std::fmt;

/// An angular quantity stored as an integer number of micro-arcseconds.
///
/// Equality, ordering and hashing all use the integer value, so two angles are
/// equal exactly when they denote the same number of micro-arcseconds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Angle {
    micro_arcsec: i64,
}

impl Angle {
    /// Zero angle.
    pub const ZERO: Self = Self { micro_arcsec: 0 };

    #[inline]
    pub const fn from_micro_arcseconds(micro_arcsec: i64) -> Self {
        Self { micro_arcsec }
    }

    #[inline]
    pub const fn micro_arcseconds(self) -> i64 {
        self.micro_arcsec
    }

    /// Creates an angle from radians, truncating toward zero.
    ///
    /// Used for query radii and other geometry-derived values; catalog values
    /// should go through [`Angle::parse_decimal`] instead.
    #[inline]
    pub fn from_radians(rad: f64) -> Self {
        Self {
            micro_arcsec: (rad / MICROARCSEC_TO_RAD) as i64,
        }
    }

    #[inline]
    pub fn to_radians(self) -> f64 {
        self.micro_arcsec as f64 * MICROARCSEC_TO_RAD
    }

    #[inline]
    pub fn to_degrees(self) -> f64 {
        self.micro_arcsec as f64 / MICROARCSEC_PER_DEGREE as f64
    }

    #[inline]
    pub fn to_arc_minutes(self) -> f64 {
        self.micro_arcsec as f64 / MICROARCSEC_PER_ARCMIN as f64
    }

    #[inline]
    pub fn to_arc_seconds(self) -> f64 {
        self.micro_arcsec as f64 / MICROARCSEC_PER_ARCSEC as f64
    }

    #[inline]
    pub fn to_milliarcseconds(self) -> f64 {
        self.micro_arcsec as f64 / MICROARCSEC_PER_MILLIARCSEC as f64
    }

    /// Returns `(sin, cos)` of the angle.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        libm::sincos(self.to_radians())
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self {
            micro_arcsec: self.micro_arcsec.abs(),
        }
    }

    /// Multiplies by an integer factor, returning `None` on overflow.
    #[inline]
    pub fn checked_mul(self, factor: i64) -> Option<Self> {
        self.micro_arcsec
            .checked_mul(factor)
            .map(Self::from_micro_arcseconds)
    }
}

/// Prints decimal degrees to nine places.
impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.9}°", self.to_degrees())
    }
}
