//! Star records and the sky pixelization they are indexed under.

use crate::error::{CatalogError, Result};
use crate::healpix;
use serde::{Deserialize, Serialize};
use skyindex_core::{Angle, Vector3};
use std::fmt;

/// Apparent magnitude in integer milli-magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Magnitude(i32);

impl Magnitude {
    /// Milli-magnitudes per magnitude.
    pub const SCALE: i32 = 1_000;

    /// Marks a star without a magnitude measurement.
    pub const UNKNOWN: Magnitude = Magnitude(i32::MAX);

    pub const fn from_milli(milli: i32) -> Self {
        Self(milli)
    }

    pub const fn milli(self) -> i32 {
        self.0
    }

    pub const fn is_known(self) -> bool {
        self.0 != Self::UNKNOWN.0
    }

    /// Magnitude as a float, `None` if unknown.
    pub fn value(self) -> Option<f64> {
        self.is_known().then(|| self.0 as f64 / Self::SCALE as f64)
    }
}

impl Default for Magnitude {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(v) => write!(f, "{:.3}", v),
            None => f.write_str("-"),
        }
    }
}

/// The sky resolution a star index is built at: one HEALPix order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pixelization {
    order: u32,
}

impl Pixelization {
    /// Finest order whose mean pixel size is no larger than `resolution`.
    ///
    /// # Errors
    /// [`CatalogError::Config`] if `resolution` is not positive.
    pub fn from_resolution(resolution: Angle) -> Result<Self> {
        if resolution <= Angle::ZERO {
            return Err(CatalogError::Config(format!(
                "sky resolution must be positive, got {}",
                resolution
            )));
        }
        Ok(Self {
            order: healpix::order_for_resolution(resolution),
        })
    }

    pub fn from_order(order: u32) -> Result<Self> {
        if order > healpix::MAX_ORDER {
            return Err(CatalogError::Config(format!(
                "HEALPix order {} exceeds the maximum of {}",
                order,
                healpix::MAX_ORDER
            )));
        }
        Ok(Self { order })
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn nside(&self) -> u64 {
        healpix::nside(self.order)
    }

    pub fn npix(&self) -> u64 {
        healpix::npix(self.order)
    }

    pub fn pixel_size(&self) -> Angle {
        healpix::pixel_size(self.order)
    }

    pub fn pixel_of(&self, direction: &Vector3) -> u64 {
        healpix::vec2pix_nest(self.order, direction)
    }
}

/// One catalog star.
///
/// Immutable once built: the direction vector and pixel id are derived from
/// the coordinates at construction and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Star {
    ra: Angle,
    dec: Angle,
    magnitude: Magnitude,
    direction: Vector3,
    pixel_id: u64,
}

impl Star {
    pub fn new(ra: Angle, dec: Angle, magnitude: Magnitude, pixelization: &Pixelization) -> Self {
        let direction = Vector3::from_ra_dec(ra, dec);
        Self {
            ra,
            dec,
            magnitude,
            direction,
            pixel_id: pixelization.pixel_of(&direction),
        }
    }

    pub fn ra(&self) -> Angle {
        self.ra
    }

    pub fn dec(&self) -> Angle {
        self.dec
    }

    pub fn magnitude(&self) -> Magnitude {
        self.magnitude
    }

    /// Unit vector toward the star.
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    pub fn pixel_id(&self) -> u64 {
        self.pixel_id
    }

    /// Angular distance to `target`.
    pub fn separation(&self, target: &Vector3) -> Angle {
        Angle::from_radians(self.direction.angle_to(target))
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RA {:.8} Dec {:+.8} mag {} pixel {}",
            self.ra.to_degrees(),
            self.dec.to_degrees(),
            self.magnitude,
            self.pixel_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyindex_core::angle::AngleUnits;

    #[test]
    fn test_pixelization_default_resolution() {
        let pix = Pixelization::from_resolution(20.arc_minutes()).unwrap();
        assert_eq!(pix.order(), 8);
        assert_eq!(pix.nside(), 256);
        assert_eq!(pix.npix(), 786_432);
    }

    #[test]
    fn test_pixelization_rejects_bad_input() {
        assert!(matches!(
            Pixelization::from_resolution(Angle::ZERO),
            Err(CatalogError::Config(_))
        ));
        assert!(Pixelization::from_resolution(-(1.degrees())).is_err());
        assert!(Pixelization::from_order(30).is_err());
        assert!(Pixelization::from_order(29).is_ok());
    }

    #[test]
    fn test_star_pixel_matches_healpix() {
        let pix = Pixelization::from_order(8).unwrap();
        let star = Star::new(
            Angle::parse_decimal("000.00091185", skyindex_core::angle::AngleUnit::Degree).unwrap(),
            Angle::parse_decimal("+01.08901332", skyindex_core::angle::AngleUnit::Degree).unwrap(),
            Magnitude::from_milli(9_100),
            &pix,
        );
        assert_eq!(star.pixel_id(), healpix::ang2pix_nest(8, 0.00091185, 1.08901332));
        assert!((star.direction().magnitude() - 1.0).abs() < 1e-15);
        assert_eq!(star.magnitude().value(), Some(9.1));
    }

    #[test]
    fn test_separation() {
        let pix = Pixelization::from_order(4).unwrap();
        let a = Star::new(10.degrees(), 0.degrees(), Magnitude::UNKNOWN, &pix);
        let b = Star::new(10.degrees(), 1.degrees(), Magnitude::UNKNOWN, &pix);
        let sep = a.separation(b.direction());
        assert!((sep.micro_arcseconds() - 1.degrees().micro_arcseconds()).abs() <= 1);
    }

    #[test]
    fn test_unknown_magnitude() {
        assert!(!Magnitude::UNKNOWN.is_known());
        assert_eq!(Magnitude::UNKNOWN.value(), None);
        assert_eq!(Magnitude::default(), Magnitude::UNKNOWN);
        assert_eq!(Magnitude::UNKNOWN.to_string(), "-");
        assert_eq!(Magnitude::from_milli(-1_440).to_string(), "-1.440");
    }
}
