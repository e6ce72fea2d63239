//! # vf_core - BMI and Visceral Fat Calculation Engine
//!
//! `vf_core` is the computational heart of VFCalc. It converts US customary
//! body measurements to metric, computes BMI and an estimated visceral fat
//! area from sex-specific regression equations, classifies both against
//! their standard bands, and appends finished sessions to a small SQLite
//! store. Both front ends (command line and interactive form) are thin
//! shells over this crate.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All result types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Validated at the Boundary**: Raw text goes through [`validate`]
//!   before anything is computed
//!
//! ## Quick Start
//!
//! ```rust
//! use vf_core::calculations::{bmi, visceral_fat};
//! use vf_core::record::Sex;
//!
//! let bmi_result = bmi::calculate(&bmi::BmiInput {
//!     weight_lbs: 190.0,
//!     height_ft: 6.1,
//! })
//! .unwrap();
//!
//! let vf_result = visceral_fat::calculate(&visceral_fat::VisceralFatInput {
//!     sex: Sex::Male,
//!     age: 42,
//!     waist_in: 36.0,
//!     thigh_in: 24.5,
//!     bmi: bmi_result.bmi,
//! })
//! .unwrap();
//!
//! // Serialize for the JSON output mode
//! let json = serde_json::to_string_pretty(&vf_result).unwrap();
//! assert!(json.contains("visceral_fat_cm2"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The two index calculations (BMI, visceral fat)
//! - [`categories`] - Classification bands and the chart color scale
//! - [`record`] - Sex and the persisted measurement record
//! - [`validate`] - String-level input parsing for both front ends
//! - [`store`] - Append-only SQLite persistence
//! - [`units`] - Type-safe unit wrappers and conversions
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod categories;
pub mod errors;
pub mod record;
pub mod store;
pub mod units;
pub mod validate;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use record::{MeasurementRecord, Sex};
