//! Typed conversion of parsed cells.
//!
//! Units are taken from the column layout, never guessed from the value.

use super::row::ParsedCell;
use crate::error::{CatalogError, Result};
use crate::star::Magnitude;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use skyindex_core::angle::AngleUnit;
use skyindex_core::{Angle, AstroError, MathErrorKind};
use std::str::FromStr;

const NO_UNIT: &str = "<none>";

impl ParsedCell {
    /// Reads the cell as an angle in its declared unit.
    ///
    /// Accepted units are `deg` and `mas`. The text is parsed as an exact
    /// decimal and truncated toward zero at the micro-arcsecond.
    ///
    /// # Errors
    /// [`CatalogError::UnknownUnit`] for any other unit (including none),
    /// [`CatalogError::Value`] if the text is not a number in range.
    pub fn to_angle(&self) -> Result<Angle> {
        let unit = match self.unit.as_deref() {
            Some("deg") => AngleUnit::Degree,
            Some("mas") => AngleUnit::MilliArcSecond,
            other => return Err(self.unknown_unit(other)),
        };
        Angle::parse_decimal(&self.value, unit).map_err(|source| self.invalid_value(source))
    }

    /// Reads the cell as a magnitude in milli-magnitudes.
    ///
    /// A blank cell is `Ok(None)`: catalogs leave magnitudes empty for stars
    /// without a measurement.
    pub fn to_magnitude(&self) -> Result<Option<Magnitude>> {
        if self.unit.as_deref() != Some("mag") {
            return Err(self.unknown_unit(self.unit.as_deref()));
        }
        if self.is_blank() {
            return Ok(None);
        }
        let digits = self.value.strip_prefix('+').unwrap_or(&self.value);
        let value = Decimal::from_str(digits).map_err(|e| {
            self.invalid_value(AstroError::invalid_number(&self.value, &e.to_string()))
        })?;
        value
            .checked_mul(Decimal::from(Magnitude::SCALE))
            .and_then(|milli| milli.trunc().to_i32())
            .map(|milli| Some(Magnitude::from_milli(milli)))
            .ok_or_else(|| {
                self.invalid_value(AstroError::math_error(
                    "ParsedCell::to_magnitude",
                    MathErrorKind::Overflow,
                    "magnitude exceeds the milli-magnitude range",
                ))
            })
    }

    fn unknown_unit(&self, unit: Option<&str>) -> CatalogError {
        CatalogError::UnknownUnit {
            unit: unit.unwrap_or(NO_UNIT).to_string(),
            column: self.name.clone(),
        }
    }

    fn invalid_value(&self, source: AstroError) -> CatalogError {
        CatalogError::Value {
            column: self.name.clone(),
            value: self.value.clone(),
            source,
        }
    }
}
