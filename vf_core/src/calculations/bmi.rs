//! # Body Mass Index Calculation
//!
//! Computes BMI from US customary measurements. Weight and height are
//! converted to metric internally and the standard formula is applied:
//!
//! BMI = weight_kg / height_m^2
//!
//! ## Example
//!
//! ```rust
//! use vf_core::calculations::bmi::{calculate, BmiInput};
//!
//! let input = BmiInput {
//!     weight_lbs: 190.0,
//!     height_ft: 6.1,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.bmi - 24.9).abs() < 0.1);
//! ```

use serde::{Deserialize, Serialize};

use crate::categories::BmiCategory;
use crate::errors::{CalcError, CalcResult};
use crate::units::{Feet, Kilograms, Meters, Pounds};

/// Input parameters for a BMI calculation.
///
/// Both values use US customary units, matching how measurements are
/// entered on the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiInput {
    /// Body weight in pounds
    pub weight_lbs: f64,

    /// Standing height in decimal feet (6 ft 1 in = 6.0833)
    pub height_ft: f64,
}

impl BmiInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.weight_lbs <= 0.0 {
            return Err(CalcError::invalid_input(
                "weight_lbs",
                self.weight_lbs.to_string(),
                "Weight must be positive",
            ));
        }
        if self.height_ft <= 0.0 {
            return Err(CalcError::invalid_input(
                "height_ft",
                self.height_ft.to_string(),
                "Height must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from a BMI calculation.
///
/// Includes the metric conversions alongside the index so front ends can
/// show their work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiResult {
    /// Weight converted to kilograms
    pub weight_kg: f64,

    /// Height converted to meters
    pub height_m: f64,

    /// Body mass index in kg/m^2
    pub bmi: f64,

    /// Classification band for the index
    pub category: BmiCategory,
}

/// Calculate BMI and its classification band.
///
/// # Arguments
///
/// * `input` - Weight and height in US customary units
///
/// # Returns
///
/// * `Ok(BmiResult)` - Index, metric conversions, and category
/// * `Err(CalcError)` - Structured error if inputs are invalid
pub fn calculate(input: &BmiInput) -> CalcResult<BmiResult> {
    input.validate()?;

    let weight_kg = Kilograms::from(Pounds(input.weight_lbs));
    let height_m = Meters::from(Feet(input.height_ft));

    let bmi = weight_kg.value() / height_m.value().powi(2);

    Ok(BmiResult {
        weight_kg: weight_kg.value(),
        height_m: height_m.value(),
        bmi,
        category: BmiCategory::from_bmi(bmi),
    })
}
