//! Unit scales and mathematical constants.
//!
//! Angles are counted in micro-arcseconds, so every catalog unit below is an
//! exact integer multiple of the base unit.

pub const MICROARCSEC_PER_MILLIARCSEC: i64 = 1_000;

pub const MICROARCSEC_PER_ARCSEC: i64 = 1_000_000;

pub const MICROARCSEC_PER_ARCMIN: i64 = MICROARCSEC_PER_ARCSEC * 60;

pub const MICROARCSEC_PER_DEGREE: i64 = MICROARCSEC_PER_ARCMIN * 60;

#[allow(clippy::excessive_precision)]
pub const MICROARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-12;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;
