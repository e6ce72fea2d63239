//! # Input Boundary Validation
//!
//! String-level parsers for every field a front end collects. Both front
//! ends funnel raw text through these before anything is computed, so a
//! bad value is reported against its field name and nothing downstream
//! ever sees it.

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::errors::{CalcError, CalcResult};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z-]*$").expect("valid pattern"));

static POSITIVE_INT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]*$").expect("valid pattern"));

static WHOLE_INT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0|[1-9][0-9]*)$").expect("valid pattern"));

static DECIMAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(\.[0-9]*)?$").expect("valid pattern"));

/// Parse a subject name: one word of letters, hyphens allowed inside.
///
/// Surrounding whitespace is trimmed; the trimmed name is returned.
pub fn parse_name(input: &str) -> CalcResult<String> {
    let trimmed = input.trim();
    if !NAME_RE.is_match(trimmed) {
        return Err(CalcError::invalid_input(
            "name",
            input,
            "Name must be a single word of letters",
        ));
    }
    Ok(trimmed.to_string())
}

/// Parse an age in whole years, 1 or more.
pub fn parse_age(input: &str) -> CalcResult<u32> {
    let trimmed = input.trim();
    if !POSITIVE_INT_RE.is_match(trimmed) {
        return Err(CalcError::invalid_input(
            "age",
            input,
            "Age must be a whole number of years, 1 or more",
        ));
    }
    trimmed
        .parse()
        .map_err(|_| CalcError::invalid_input("age", input, "Age is out of range"))
}

/// Parse a positive decimal measurement (weight, height, circumferences).
///
/// `field` names the measurement in any error, e.g. `"weight_lbs"`.
pub fn parse_measurement(field: &str, input: &str) -> CalcResult<f64> {
    let trimmed = input.trim();
    let err = || CalcError::invalid_input(field, input, "Must be a positive number");
    if !DECIMAL_RE.is_match(trimmed) {
        return Err(err());
    }
    let value: f64 = trimmed.parse().map_err(|_| err())?;
    if value <= 0.0 {
        return Err(err());
    }
    Ok(value)
}

/// Parse the whole-feet part of a height, 1 or more.
pub fn parse_feet_component(input: &str) -> CalcResult<u32> {
    let trimmed = input.trim();
    if !POSITIVE_INT_RE.is_match(trimmed) {
        return Err(CalcError::invalid_input(
            "height_ft",
            input,
            "Feet must be a whole number, 1 or more",
        ));
    }
    trimmed
        .parse()
        .map_err(|_| CalcError::invalid_input("height_ft", input, "Feet is out of range"))
}

/// Parse the inches part of a height, 0 through 11.
pub fn parse_inches_component(input: &str) -> CalcResult<u32> {
    let trimmed = input.trim();
    let err = || {
        CalcError::invalid_input(
            "height_in",
            input,
            "Inches must be a whole number from 0 to 11",
        )
    };
    if !WHOLE_INT_RE.is_match(trimmed) {
        return Err(err());
    }
    let value: u32 = trimmed.parse().map_err(|_| err())?;
    if value > 11 {
        return Err(err());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Tony", "Tony")]
    #[case(" Tony ", "Tony")]
    #[case("Mary-Jane", "Mary-Jane")]
    fn test_parse_name_accepts(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse_name(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("Tony Stark")]
    #[case("T0ny")]
    #[case("-Tony")]
    #[case("42")]
    fn test_parse_name_rejects(#[case] input: &str) {
        assert!(parse_name(input).is_err());
    }

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age("42").unwrap(), 42);
        assert_eq!(parse_age(" 1 ").unwrap(), 1);

        assert!(parse_age("0").is_err());
        assert!(parse_age("-5").is_err());
        assert!(parse_age("4.5").is_err());
        assert!(parse_age("abc").is_err());
        assert!(parse_age("99999999999999999999").is_err());
    }

    #[rstest]
    #[case("190", 190.0)]
    #[case("190.0", 190.0)]
    #[case("190.", 190.0)]
    #[case("0.5", 0.5)]
    #[case(" 36.5 ", 36.5)]
    fn test_parse_measurement_accepts(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(parse_measurement("weight_lbs", input).unwrap(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("0.0")]
    #[case("-3")]
    #[case("abc")]
    #[case("1.2.3")]
    #[case("")]
    fn test_parse_measurement_rejects(#[case] input: &str) {
        assert!(parse_measurement("weight_lbs", input).is_err());
    }

    #[test]
    fn test_parse_measurement_names_field() {
        let err = parse_measurement("thigh_in", "nope").unwrap_err();
        match err {
            CalcError::InvalidInput { field, value, .. } => {
                assert_eq!(field, "thigh_in");
                assert_eq!(value, "nope");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_feet_component() {
        assert_eq!(parse_feet_component("6").unwrap(), 6);
        assert!(parse_feet_component("0").is_err());
        assert!(parse_feet_component("6.5").is_err());
    }

    #[test]
    fn test_parse_inches_component() {
        assert_eq!(parse_inches_component("0").unwrap(), 0);
        assert_eq!(parse_inches_component("11").unwrap(), 11);

        assert!(parse_inches_component("12").is_err());
        assert!(parse_inches_component("-1").is_err());
        assert!(parse_inches_component("1.5").is_err());
    }
}
