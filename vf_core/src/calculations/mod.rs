//! # Calculations
//!
//! Pure calculation functions for the two indices. Each submodule follows
//! the same pattern: an `*Input` struct with a `validate()` method, a free
//! `calculate()` function, and an `*Result` struct that serializes cleanly
//! for JSON output. Inputs are US customary; conversion to metric happens
//! inside `calculate()` so callers never mix unit systems.

pub mod bmi;
pub mod visceral_fat;
