//! Unit entry points and exact decimal parsing for [`Angle`].
//!
//! Two routes lead into the integer representation:
//!
//! - [`AngleUnits`] on `i64` and `f64` literals: `5.degrees()`, `20.arc_minutes()`.
//!   Integer inputs scale exactly; float inputs round to the nearest micro-arcsecond.
//! - [`Angle::parse_decimal`] for catalog text: the string is read as an exact
//!   decimal, scaled, then truncated toward zero. No binary float is involved,
//!   so `"0.1"` degrees is exactly 360 000 000 micro-arcseconds.

use super::core::Angle;
use crate::constants::{
    MICROARCSEC_PER_ARCMIN, MICROARCSEC_PER_ARCSEC, MICROARCSEC_PER_DEGREE,
    MICROARCSEC_PER_MILLIARCSEC,
};
use crate::{AstroError, AstroResult, MathErrorKind};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Angular units a catalog value can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    Degree,
    ArcMinute,
    ArcSecond,
    MilliArcSecond,
}

impl AngleUnit {
    /// Size of one unit in micro-arcseconds.
    pub const fn micro_arcseconds(self) -> i64 {
        match self {
            Self::Degree => MICROARCSEC_PER_DEGREE,
            Self::ArcMinute => MICROARCSEC_PER_ARCMIN,
            Self::ArcSecond => MICROARCSEC_PER_ARCSEC,
            Self::MilliArcSecond => MICROARCSEC_PER_MILLIARCSEC,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Degree => "deg",
            Self::ArcMinute => "arcmin",
            Self::ArcSecond => "arcsec",
            Self::MilliArcSecond => "mas",
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Builds angles from numeric literals.
///
/// ```
/// use skyindex_core::angle::AngleUnits;
///
/// assert_eq!(2.degrees(), 120.arc_minutes());
/// assert_eq!(1.5.arc_seconds(), 1500.milliarcseconds());
/// ```
pub trait AngleUnits {
    fn degrees(self) -> Angle;
    fn arc_minutes(self) -> Angle;
    fn arc_seconds(self) -> Angle;
    fn milliarcseconds(self) -> Angle;
}

impl AngleUnits for i64 {
    #[inline]
    fn degrees(self) -> Angle {
        Angle::from_micro_arcseconds(self * MICROARCSEC_PER_DEGREE)
    }

    #[inline]
    fn arc_minutes(self) -> Angle {
        Angle::from_micro_arcseconds(self * MICROARCSEC_PER_ARCMIN)
    }

    #[inline]
    fn arc_seconds(self) -> Angle {
        Angle::from_micro_arcseconds(self * MICROARCSEC_PER_ARCSEC)
    }

    #[inline]
    fn milliarcseconds(self) -> Angle {
        Angle::from_micro_arcseconds(self * MICROARCSEC_PER_MILLIARCSEC)
    }
}

impl AngleUnits for f64 {
    #[inline]
    fn degrees(self) -> Angle {
        Angle::from_micro_arcseconds(libm::round(self * MICROARCSEC_PER_DEGREE as f64) as i64)
    }

    #[inline]
    fn arc_minutes(self) -> Angle {
        Angle::from_micro_arcseconds(libm::round(self * MICROARCSEC_PER_ARCMIN as f64) as i64)
    }

    #[inline]
    fn arc_seconds(self) -> Angle {
        Angle::from_micro_arcseconds(libm::round(self * MICROARCSEC_PER_ARCSEC as f64) as i64)
    }

    #[inline]
    fn milliarcseconds(self) -> Angle {
        Angle::from_micro_arcseconds(libm::round(self * MICROARCSEC_PER_MILLIARCSEC as f64) as i64)
    }
}

impl Angle {
    /// Parses decimal text in the given unit without going through `f64`.
    ///
    /// Leading and trailing whitespace and a leading `+` are accepted. The
    /// scaled value is truncated toward zero.
    ///
    /// # Errors
    /// [`AstroError::InvalidNumber`] if the text is not a decimal number,
    /// [`AstroError::MathError`] if the result does not fit in `i64`.
    pub fn parse_decimal(text: &str, unit: AngleUnit) -> AstroResult<Angle> {
        let trimmed = text.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let value =
            Decimal::from_str(digits).map_err(|e| AstroError::invalid_number(text, &e.to_string()))?;
        Self::from_decimal(value, unit)
    }

    /// Scales an exact decimal into micro-arcseconds, truncating toward zero.
    pub fn from_decimal(value: Decimal, unit: AngleUnit) -> AstroResult<Angle> {
        let overflow = || {
            AstroError::math_error(
                "Angle::from_decimal",
                MathErrorKind::Overflow,
                &format!("{} {} exceeds the micro-arcsecond range", value, unit),
            )
        };
        let scaled = value
            .checked_mul(Decimal::from(unit.micro_arcseconds()))
            .ok_or_else(overflow)?;
        scaled
            .trunc()
            .to_i64()
            .map(Angle::from_micro_arcseconds)
            .ok_or_else(overflow)
    }
}
