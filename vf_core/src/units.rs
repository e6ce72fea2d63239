//! # Unit Types
//!
//! Type-safe wrappers for body measurement units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The calculator uses a small, fixed set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## US Customary Units (Primary)
//!
//! Measurements are entered in US customary units and converted to metric
//! internally, since the published index formulas are metric:
//! - Weight: pounds (lb) -> kilograms (kg)
//! - Height: feet (ft) -> meters (m)
//! - Circumference: inches (in) -> centimeters (cm)
//!
//! ## Example
//!
//! ```rust
//! use vf_core::units::{Feet, Kilograms, Meters, Pounds};
//!
//! let weight: Kilograms = Pounds(190.0).into();
//! assert!((weight.0 - 86.18).abs() < 0.01);
//!
//! let height: Meters = Feet(6.1).into();
//! assert!((height.0 - 1.86).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Conversion Factors (NIST definitions)
// ============================================================================

/// Kilograms per avoirdupois pound
pub const KG_PER_LB: f64 = 0.45359237;

/// Centimeters per international inch
pub const CM_PER_IN: f64 = 2.54;

/// Meters per international foot
pub const M_PER_FT: f64 = 0.3048;

/// Inches per foot
pub const IN_PER_FT: f64 = 12.0;

// ============================================================================
// Weight Units
// ============================================================================

/// Weight in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

/// Weight in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

impl From<Pounds> for Kilograms {
    fn from(lb: Pounds) -> Self {
        Kilograms(lb.0 * KG_PER_LB)
    }
}

impl From<Kilograms> for Pounds {
    fn from(kg: Kilograms) -> Self {
        Pounds(kg.0 / KG_PER_LB)
    }
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * IN_PER_FT)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / IN_PER_FT)
    }
}

impl From<Feet> for Meters {
    fn from(ft: Feet) -> Self {
        Meters(ft.0 * M_PER_FT)
    }
}

impl From<Meters> for Feet {
    fn from(m: Meters) -> Self {
        Feet(m.0 / M_PER_FT)
    }
}

impl From<Inches> for Centimeters {
    fn from(inches: Inches) -> Self {
        Centimeters(inches.0 * CM_PER_IN)
    }
}

impl From<Centimeters> for Inches {
    fn from(cm: Centimeters) -> Self {
        Inches(cm.0 / CM_PER_IN)
    }
}

impl Feet {
    /// Build decimal feet from a whole feet-and-inches pair.
    ///
    /// 6 ft 1 in becomes 6.0833... ft, matching how a tape measure
    /// reading is folded into a single height value.
    pub fn from_feet_inches(feet: u32, inches: u32) -> Self {
        Feet(f64::from(feet) + f64::from(inches) / IN_PER_FT)
    }
}

// ============================================================================
// Height
// ============================================================================

/// Standing height, stored as decimal feet.
///
/// Height flows through the system in two shapes: the command line takes
/// decimal feet directly (e.g. `6.1`), while the interactive form and the
/// data store work with a whole feet-and-inches pair. This wrapper holds
/// the decimal value and converts between the two.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Height(pub Feet);

impl Height {
    /// Height from decimal feet (e.g. `6.1`)
    pub fn from_decimal_feet(feet: f64) -> Self {
        Height(Feet(feet))
    }

    /// Height from a whole feet-and-inches pair (e.g. 6 ft 1 in)
    pub fn from_feet_inches(feet: u32, inches: u32) -> Self {
        Height(Feet::from_feet_inches(feet, inches))
    }

    /// The decimal feet value
    pub fn decimal_feet(self) -> Feet {
        self.0
    }

    /// Height in meters
    pub fn meters(self) -> Meters {
        self.0.into()
    }

    /// Split into a whole `(feet, inches)` pair, rounding to the nearest
    /// inch. Rounding can carry into the feet component: 5.99 ft is
    /// 71.88 in, which reads back as 6 ft 0 in.
    pub fn components(self) -> (u32, u32) {
        let total_in = (self.0.value() * IN_PER_FT).round().max(0.0) as u32;
        (total_in / 12, total_in % 12)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Pounds);
impl_arithmetic!(Kilograms);
impl_arithmetic!(Feet);
impl_arithmetic!(Inches);
impl_arithmetic!(Meters);
impl_arithmetic!(Centimeters);

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_pounds_to_kilograms() {
        let kg: Kilograms = Pounds(190.0).into();
        assert_approx_eq!(kg.0, 86.18, 0.01);
    }

    #[test]
    fn test_weight_roundtrip() {
        let lb: Pounds = Kilograms::from(Pounds(190.0)).into();
        assert_approx_eq!(lb.0, 190.0, 1e-9);
    }

    #[test]
    fn test_inches_to_centimeters() {
        let cm: Centimeters = Inches(36.0).into();
        assert_approx_eq!(cm.0, 91.44, 1e-9);
    }

    #[test]
    fn test_centimeters_to_inches() {
        let inches: Inches = Centimeters(91.44).into();
        assert_approx_eq!(inches.0, 36.0, 1e-9);
    }

    #[test]
    fn test_feet_to_meters() {
        let m: Meters = Feet(6.1).into();
        assert_approx_eq!(m.0, 1.86, 0.01);
    }

    #[test]
    fn test_feet_to_inches() {
        let inches: Inches = Feet(6.0).into();
        assert_eq!(inches.0, 72.0);
    }

    #[test]
    fn test_feet_from_feet_inches() {
        assert_approx_eq!(Feet::from_feet_inches(6, 1).0, 6.0833, 1e-4);
        assert_eq!(Feet::from_feet_inches(5, 0).0, 5.0);
    }

    #[test]
    fn test_height_components() {
        assert_eq!(Height::from_decimal_feet(6.1).components(), (6, 1));
        assert_eq!(Height::from_feet_inches(6, 1).components(), (6, 1));
        assert_eq!(Height::from_decimal_feet(5.5).components(), (5, 6));
    }

    #[test]
    fn test_height_components_carry() {
        // 5.99 ft = 71.88 in, nearest inch rounds up into the next foot
        assert_eq!(Height::from_decimal_feet(5.99).components(), (6, 0));
        // 6 ft 11.6 in carries all the way to 7 ft 0 in
        assert_eq!(Height::from_decimal_feet(6.0 + 11.6 / 12.0).components(), (7, 0));
    }

    #[test]
    fn test_height_meters() {
        let m = Height::from_feet_inches(6, 1).meters();
        assert_approx_eq!(m.0, 1.854, 0.001);
    }

    #[test]
    fn test_arithmetic() {
        let a = Pounds(100.0);
        let b = Pounds(50.0);
        assert_eq!((a + b).0, 150.0);
        assert_eq!((a - b).0, 50.0);
        assert_eq!((a * 2.0).0, 200.0);
        assert_eq!((a / 2.0).0, 50.0);
    }

    #[test]
    fn test_serialization() {
        let kg = Kilograms(86.18);
        let json = serde_json::to_string(&kg).unwrap();
        assert_eq!(json, "86.18");

        let roundtrip: Kilograms = serde_json::from_str(&json).unwrap();
        assert_eq!(kg, roundtrip);
    }
}
