//! # Category Bands
//!
//! Classification bands for the two computed indices, plus the shared
//! color scale both front ends use when drawing the band charts.
//!
//! BMI bands follow the WHO adult cut-offs, with the obese range split at
//! 35 kg/m^2. Visceral fat uses the single 130 cm^2 threshold from the
//! source regression studies. Every lower bound is inclusive, so a BMI of
//! exactly 18.5 is `Normal` and an area of exactly 130.0 is `VisceralObesity`.

use serde::{Deserialize, Serialize};

// ============================================================================
// Chart Colors
// ============================================================================

/// Severity color scale for band charts.
///
/// The RGB values are the X11 `sky blue`, `green2`, `yellow2`, `orange2`
/// and `red2` shades, which is why the saturated channels read 238.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartColor {
    SkyBlue,
    Green,
    Yellow,
    Orange,
    Red,
}

impl ChartColor {
    /// Human-readable color name
    pub fn name(&self) -> &'static str {
        match self {
            ChartColor::SkyBlue => "sky blue",
            ChartColor::Green => "green",
            ChartColor::Yellow => "yellow",
            ChartColor::Orange => "orange",
            ChartColor::Red => "red",
        }
    }

    /// RGB triple for rendering
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ChartColor::SkyBlue => (135, 206, 235),
            ChartColor::Green => (0, 238, 0),
            ChartColor::Yellow => (238, 238, 0),
            ChartColor::Orange => (238, 154, 0),
            ChartColor::Red => (238, 0, 0),
        }
    }
}

// ============================================================================
// BMI Categories
// ============================================================================

/// BMI classification bands (kg/m^2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// Below 18.5
    Underweight,
    /// 18.5 to 24.9
    Normal,
    /// 25.0 to 29.9
    Overweight,
    /// 30.0 to 34.9
    Obese,
    /// 35.0 and above
    ExtremelyObese,
}

impl BmiCategory {
    /// All bands in ascending BMI order, for chart rendering
    pub const ALL: [BmiCategory; 5] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
        BmiCategory::ExtremelyObese,
    ];

    /// Classify a BMI value. Lower bounds are inclusive.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else if bmi < 35.0 {
            BmiCategory::Obese
        } else {
            BmiCategory::ExtremelyObese
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
            BmiCategory::ExtremelyObese => "extremely obese",
        }
    }

    /// Band range label for chart segments
    pub fn range_label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "< 18.5",
            BmiCategory::Normal => "18.5 - 24.9",
            BmiCategory::Overweight => "25 - 29.9",
            BmiCategory::Obese => "30 - 34.9",
            BmiCategory::ExtremelyObese => ">= 35",
        }
    }

    /// Chart color for this band
    pub fn color(&self) -> ChartColor {
        match self {
            BmiCategory::Underweight => ChartColor::SkyBlue,
            BmiCategory::Normal => ChartColor::Green,
            BmiCategory::Overweight => ChartColor::Yellow,
            BmiCategory::Obese => ChartColor::Orange,
            BmiCategory::ExtremelyObese => ChartColor::Red,
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Visceral Fat Categories
// ============================================================================

/// Visceral fat classification bands (cm^2 of estimated abdominal area)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisceralFatCategory {
    /// Below 130 cm^2
    AbsenceOfVisceralObesity,
    /// 130 cm^2 and above
    VisceralObesity,
}

impl VisceralFatCategory {
    /// Both bands in ascending area order, for chart rendering
    pub const ALL: [VisceralFatCategory; 2] = [
        VisceralFatCategory::AbsenceOfVisceralObesity,
        VisceralFatCategory::VisceralObesity,
    ];

    /// Classify an estimated visceral fat area. The threshold is inclusive.
    pub fn from_area(area_cm2: f64) -> Self {
        if area_cm2 < 130.0 {
            VisceralFatCategory::AbsenceOfVisceralObesity
        } else {
            VisceralFatCategory::VisceralObesity
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            VisceralFatCategory::AbsenceOfVisceralObesity => "absence of visceral obesity",
            VisceralFatCategory::VisceralObesity => "visceral obesity",
        }
    }

    /// Band range label for chart segments
    pub fn range_label(&self) -> &'static str {
        match self {
            VisceralFatCategory::AbsenceOfVisceralObesity => "< 130.0",
            VisceralFatCategory::VisceralObesity => ">= 130.0",
        }
    }

    /// Chart color for this band
    pub fn color(&self) -> ChartColor {
        match self {
            VisceralFatCategory::AbsenceOfVisceralObesity => ChartColor::SkyBlue,
            VisceralFatCategory::VisceralObesity => ChartColor::Red,
        }
    }
}

impl std::fmt::Display for VisceralFatCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(10.0, BmiCategory::Underweight)]
    #[case(18.49, BmiCategory::Underweight)]
    #[case(18.5, BmiCategory::Normal)]
    #[case(24.99, BmiCategory::Normal)]
    #[case(25.0, BmiCategory::Overweight)]
    #[case(29.99, BmiCategory::Overweight)]
    #[case(30.0, BmiCategory::Obese)]
    #[case(34.99, BmiCategory::Obese)]
    #[case(35.0, BmiCategory::ExtremelyObese)]
    #[case(60.0, BmiCategory::ExtremelyObese)]
    fn test_bmi_thresholds(#[case] bmi: f64, #[case] expected: BmiCategory) {
        assert_eq!(BmiCategory::from_bmi(bmi), expected);
    }

    #[rstest]
    #[case(0.0, VisceralFatCategory::AbsenceOfVisceralObesity)]
    #[case(129.99, VisceralFatCategory::AbsenceOfVisceralObesity)]
    #[case(130.0, VisceralFatCategory::VisceralObesity)]
    #[case(250.0, VisceralFatCategory::VisceralObesity)]
    fn test_visceral_fat_thresholds(#[case] area: f64, #[case] expected: VisceralFatCategory) {
        assert_eq!(VisceralFatCategory::from_area(area), expected);
    }

    #[test]
    fn test_bmi_band_order() {
        // ALL drives chart rendering, so it must stay in ascending order
        assert_eq!(BmiCategory::ALL[0], BmiCategory::Underweight);
        assert_eq!(BmiCategory::ALL[4], BmiCategory::ExtremelyObese);
    }

    #[test]
    fn test_colors() {
        assert_eq!(BmiCategory::Normal.color(), ChartColor::Green);
        assert_eq!(BmiCategory::ExtremelyObese.color(), ChartColor::Red);
        assert_eq!(
            VisceralFatCategory::AbsenceOfVisceralObesity.color(),
            ChartColor::SkyBlue
        );
        assert_eq!(ChartColor::SkyBlue.rgb(), (135, 206, 235));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(BmiCategory::ExtremelyObese.to_string(), "extremely obese");
        assert_eq!(
            VisceralFatCategory::VisceralObesity.to_string(),
            "visceral obesity"
        );
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&BmiCategory::ExtremelyObese).unwrap();
        assert_eq!(json, "\"extremely_obese\"");

        let roundtrip: VisceralFatCategory =
            serde_json::from_str("\"visceral_obesity\"").unwrap();
        assert_eq!(roundtrip, VisceralFatCategory::VisceralObesity);
    }
}
