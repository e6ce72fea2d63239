//! # Measurement Records
//!
//! Subject details plus both computed indices, in the shape the data
//! store persists and the JSON output mode prints.

use serde::{Deserialize, Serialize};

use crate::units::Height;

/// Biological sex of the measured subject.
///
/// Sex selects which visceral fat regression equation applies; there is
/// no shared fallback between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Both variants, for UI selection
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    /// Lowercase name as stored in the data store
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One complete measurement session: who was measured, the raw inputs,
/// and the two computed indices.
///
/// Index values are rounded to two decimals on construction, matching
/// the precision the store and both front ends report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// Subject name (single word)
    pub name: String,

    /// Biological sex
    pub sex: Sex,

    /// Age in whole years
    pub age: u32,

    /// Body weight in pounds
    pub weight_lbs: f64,

    /// Standing height
    pub height: Height,

    /// Waist circumference in inches
    pub waist_in: f64,

    /// Thigh circumference in inches
    pub thigh_in: f64,

    /// Body mass index (kg/m^2), rounded to two decimals
    pub bmi: f64,

    /// Estimated visceral fat area (cm^2), rounded to two decimals
    pub visceral_fat_cm2: f64,
}

impl MeasurementRecord {
    /// Assemble a record from validated inputs and computed indices.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        sex: Sex,
        age: u32,
        weight_lbs: f64,
        height: Height,
        waist_in: f64,
        thigh_in: f64,
        bmi: f64,
        visceral_fat_cm2: f64,
    ) -> Self {
        MeasurementRecord {
            name: name.into(),
            sex,
            age,
            weight_lbs,
            height,
            waist_in,
            thigh_in,
            bmi: round2(bmi),
            visceral_fat_cm2: round2(visceral_fat_cm2),
        }
    }
}

/// Round to two decimal places, ties away from zero
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
