mod core;
mod ops;
#[cfg(feature = "serde")]
mod serde_;
mod units;

pub use self::core::Angle;
pub use self::units::{AngleUnit, AngleUnits};
