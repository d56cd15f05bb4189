//! Arithmetic operators for [`Angle`].
//!
//! All operators work on the micro-arcsecond integer: `+`, `-`, unary `-`,
//! and multiplication/division by an `i64` factor.

use super::core::Angle;
use core::ops::*;

/// Angle + Angle → Angle
impl Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Angle::from_micro_arcseconds(self.micro_arcseconds() + rhs.micro_arcseconds())
    }
}

/// Angle - Angle → Angle
impl Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Angle::from_micro_arcseconds(self.micro_arcseconds() - rhs.micro_arcseconds())
    }
}

/// Angle * integer → Angle
impl Mul<i64> for Angle {
    type Output = Angle;
    #[inline]
    fn mul(self, k: i64) -> Self {
        Angle::from_micro_arcseconds(self.micro_arcseconds() * k)
    }
}

/// Angle / integer → Angle, truncating toward zero
impl Div<i64> for Angle {
    type Output = Angle;
    #[inline]
    fn div(self, k: i64) -> Self {
        Angle::from_micro_arcseconds(self.micro_arcseconds() / k)
    }
}

/// -Angle → Angle
impl Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Self {
        Angle::from_micro_arcseconds(-self.micro_arcseconds())
    }
}
