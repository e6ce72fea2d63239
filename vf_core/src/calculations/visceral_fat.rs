//! # Visceral Fat Area Estimation
//!
//! Estimates abdominal visceral fat area in cm^2 from anthropometric
//! measurements, using sex-specific regression equations:
//!
//! - Male:   VF = (6.0 * waist_cm - 4.41 * thigh_cm) + (1.19 * age - 213.65)
//! - Female: VF = (2.15 * waist_cm - 3.63 * thigh_cm) + 1.46 * age + (6.22 * bmi - 92.713)
//!
//! The female equation reads the subject's BMI; the male equation does not.
//! Inputs carry BMI either way so both paths take the same shape.
//!
//! ## Example
//!
//! ```rust
//! use vf_core::calculations::visceral_fat::{calculate, VisceralFatInput};
//! use vf_core::record::Sex;
//!
//! let input = VisceralFatInput {
//!     sex: Sex::Male,
//!     age: 42,
//!     waist_in: 36.0,
//!     thigh_in: 24.5,
//!     bmi: 24.93,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.visceral_fat_cm2 - 110.54).abs() < 0.1);
//! ```

use serde::{Deserialize, Serialize};

use crate::categories::VisceralFatCategory;
use crate::errors::{CalcError, CalcResult};
use crate::record::Sex;
use crate::units::{Centimeters, Inches};

/// Input parameters for a visceral fat estimate.
///
/// Circumferences use inches, matching how measurements are entered;
/// conversion to centimeters happens inside `calculate()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisceralFatInput {
    /// Biological sex, selecting the regression equation
    pub sex: Sex,

    /// Age in whole years
    pub age: u32,

    /// Waist circumference in inches
    pub waist_in: f64,

    /// Thigh circumference in inches
    pub thigh_in: f64,

    /// Body mass index (kg/m^2); only the female equation reads it
    pub bmi: f64,
}

impl VisceralFatInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.age == 0 {
            return Err(CalcError::invalid_input(
                "age",
                self.age.to_string(),
                "Age must be at least 1",
            ));
        }
        if self.waist_in <= 0.0 {
            return Err(CalcError::invalid_input(
                "waist_in",
                self.waist_in.to_string(),
                "Waist circumference must be positive",
            ));
        }
        if self.thigh_in <= 0.0 {
            return Err(CalcError::invalid_input(
                "thigh_in",
                self.thigh_in.to_string(),
                "Thigh circumference must be positive",
            ));
        }
        if self.sex == Sex::Female && self.bmi <= 0.0 {
            return Err(CalcError::invalid_input(
                "bmi",
                self.bmi.to_string(),
                "BMI must be positive for the female equation",
            ));
        }
        Ok(())
    }
}

/// Results from a visceral fat estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisceralFatResult {
    /// Waist circumference converted to centimeters
    pub waist_cm: f64,

    /// Thigh circumference converted to centimeters
    pub thigh_cm: f64,

    /// Estimated visceral fat area in cm^2
    pub visceral_fat_cm2: f64,

    /// Classification band for the estimate
    pub category: VisceralFatCategory,
}

/// Male regression equation (metric inputs, age in years)
pub fn male_visceral_fat(waist_cm: f64, thigh_cm: f64, age: u32) -> f64 {
    (6.0 * waist_cm - 4.41 * thigh_cm) + (1.19 * f64::from(age) - 213.65)
}

/// Female regression equation (metric inputs, age in years, BMI in kg/m^2)
pub fn female_visceral_fat(waist_cm: f64, thigh_cm: f64, age: u32, bmi: f64) -> f64 {
    (2.15 * waist_cm - 3.63 * thigh_cm) + 1.46 * f64::from(age) + (6.22 * bmi - 92.713)
}

/// Calculate the visceral fat estimate and its classification band.
///
/// # Arguments
///
/// * `input` - Sex, age, circumferences in inches, and BMI
///
/// # Returns
///
/// * `Ok(VisceralFatResult)` - Estimate, metric conversions, and category
/// * `Err(CalcError)` - Structured error if inputs are invalid
pub fn calculate(input: &VisceralFatInput) -> CalcResult<VisceralFatResult> {
    input.validate()?;

    let waist_cm = Centimeters::from(Inches(input.waist_in));
    let thigh_cm = Centimeters::from(Inches(input.thigh_in));

    let visceral_fat_cm2 = match input.sex {
        Sex::Male => male_visceral_fat(waist_cm.value(), thigh_cm.value(), input.age),
        Sex::Female => {
            female_visceral_fat(waist_cm.value(), thigh_cm.value(), input.age, input.bmi)
        }
    };

    Ok(VisceralFatResult {
        waist_cm: waist_cm.value(),
        thigh_cm: thigh_cm.value(),
        visceral_fat_cm2,
        category: VisceralFatCategory::from_area(visceral_fat_cm2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn male_input() -> VisceralFatInput {
        VisceralFatInput {
            sex: Sex::Male,
            age: 42,
            waist_in: 36.0,
            thigh_in: 24.5,
            bmi: 24.93,
        }
    }

    fn female_input() -> VisceralFatInput {
        VisceralFatInput {
            sex: Sex::Female,
            age: 42,
            waist_in: 36.0,
            thigh_in: 24.5,
            bmi: 19.37,
        }
    }

    #[test]
    fn test_male_equation() {
        // 36 in waist = 91.44 cm, 24.5 in thigh = 62.23 cm
        let area = male_visceral_fat(91.44, 62.23, 42);
        assert_approx_eq!(area, 110.5357, 1e-4);
    }

    #[test]
    fn test_female_equation() {
        let area = female_visceral_fat(91.44, 62.23, 42, 19.37);
        assert_approx_eq!(area, 59.7895, 1e-4);
    }

    #[test]
    fn test_male_reference_estimate() {
        let result = calculate(&male_input()).unwrap();

        assert_approx_eq!(result.waist_cm, 91.44, 1e-9);
        assert_approx_eq!(result.thigh_cm, 62.23, 1e-2);
        assert_approx_eq!(result.visceral_fat_cm2, 110.54, 0.1);
        assert_eq!(
            result.category,
            VisceralFatCategory::AbsenceOfVisceralObesity
        );
    }

    #[test]
    fn test_female_reference_estimate() {
        let result = calculate(&female_input()).unwrap();

        assert_approx_eq!(result.visceral_fat_cm2, 59.78, 0.1);
        assert_eq!(
            result.category,
            VisceralFatCategory::AbsenceOfVisceralObesity
        );
    }

    #[test]
    fn test_male_equation_ignores_bmi() {
        let mut input = male_input();
        let baseline = calculate(&input).unwrap();

        input.bmi = 99.0;
        let varied = calculate(&input).unwrap();

        assert_eq!(baseline.visceral_fat_cm2, varied.visceral_fat_cm2);
    }

    #[test]
    fn test_obesity_classification() {
        let input = VisceralFatInput {
            waist_in: 50.0,
            ..male_input()
        };
        let result = calculate(&input).unwrap();

        // 50 in waist = 127 cm pushes the estimate well past 130 cm^2
        assert!(result.visceral_fat_cm2 > 130.0);
        assert_eq!(result.category, VisceralFatCategory::VisceralObesity);
    }

    #[test]
    fn test_negative_estimate_not_clamped() {
        // Implausibly small waist drives the estimate below zero; the
        // regression output is reported as-is.
        let input = VisceralFatInput {
            age: 20,
            waist_in: 20.0,
            ..male_input()
        };
        let result = calculate(&input).unwrap();

        assert!(result.visceral_fat_cm2 < 0.0);
        assert_eq!(
            result.category,
            VisceralFatCategory::AbsenceOfVisceralObesity
        );
    }

    #[test]
    fn test_invalid_age() {
        let input = VisceralFatInput {
            age: 0,
            ..male_input()
        };
        let err = calculate(&input).unwrap_err();
        match err {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "age"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_waist() {
        let input = VisceralFatInput {
            waist_in: -36.0,
            ..male_input()
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_female_requires_bmi() {
        let input = VisceralFatInput {
            bmi: 0.0,
            ..female_input()
        };
        let err = calculate(&input).unwrap_err();
        match err {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "bmi"),
            other => panic!("unexpected error: {other:?}"),
        }

        // the male equation never reads BMI, so the same value passes
        let male = VisceralFatInput {
            bmi: 0.0,
            ..male_input()
        };
        assert!(calculate(&male).is_ok());
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&male_input()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("visceral_fat_cm2"));
        assert!(json.contains("absence_of_visceral_obesity"));

        let roundtrip: VisceralFatResult = serde_json::from_str(&json).unwrap();
        assert!((result.visceral_fat_cm2 - roundtrip.visceral_fat_cm2).abs() < 1e-9);
    }
}
