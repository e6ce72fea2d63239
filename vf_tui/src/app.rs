//! # Form State and Key Handling
//!
//! The form mirrors the command line defaults: a reference subject whose
//! measurements can be edited field by field. Keystrokes are filtered per
//! field so a buffer can only ever hold a prefix of a valid value; full
//! validation still runs on calculate, through the same parsers the
//! command line uses.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use vf_core::calculations::bmi::{self, BmiInput, BmiResult};
use vf_core::calculations::visceral_fat::{self, VisceralFatInput, VisceralFatResult};
use vf_core::record::{MeasurementRecord, Sex};
use vf_core::store::{database_path, Store};
use vf_core::units::Height;
use vf_core::validate;
use vf_core::{CalcError, CalcResult};

// ============================================================================
// DEFAULTS
// ============================================================================

const DEFAULT_NAME: &str = "Tony";
const DEFAULT_AGE: &str = "42";
const DEFAULT_WEIGHT: &str = "190.0";
const DEFAULT_HEIGHT_FT: &str = "6";
const DEFAULT_HEIGHT_IN: &str = "1";
const DEFAULT_WAIST: &str = "36.0";
const DEFAULT_THIGH: &str = "24.5";

// ============================================================================
// FIELDS
// ============================================================================

/// One focusable element of the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Sex,
    Age,
    Weight,
    HeightFt,
    HeightIn,
    Waist,
    Thigh,
    StoreData,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Name,
        Field::Sex,
        Field::Age,
        Field::Weight,
        Field::HeightFt,
        Field::HeightIn,
        Field::Waist,
        Field::Thigh,
        Field::StoreData,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Sex => "Gender",
            Field::Age => "Age (years)",
            Field::Weight => "Weight (lbs)",
            Field::HeightFt => "Height (ft)",
            Field::HeightIn => "Height (in)",
            Field::Waist => "Waist (inches)",
            Field::Thigh => "Thigh (inches)",
            Field::StoreData => "Store Data",
        }
    }

    pub fn next(self) -> Field {
        let idx = Field::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Field::ALL[(idx + 1) % Field::ALL.len()]
    }

    pub fn prev(self) -> Field {
        let idx = Field::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Field::ALL[(idx + Field::ALL.len() - 1) % Field::ALL.len()]
    }
}

// ============================================================================
// APP STATE
// ============================================================================

/// Both indices from the latest successful calculate.
pub struct Results {
    pub bmi: BmiResult,
    pub visceral_fat: VisceralFatResult,
}

/// Form state: one string buffer per editable field, plus the toggles,
/// focus, and the outcome of the last calculate.
pub struct App {
    pub name: String,
    pub sex: Sex,
    pub age: String,
    pub weight: String,
    pub height_ft: String,
    pub height_in: String,
    pub waist: String,
    pub thigh: String,
    pub store_data: bool,
    pub focus: Field,
    pub error: Option<String>,
    pub status: Option<String>,
    pub results: Option<Results>,
    db_path: PathBuf,
}

impl App {
    pub fn new(db_override: Option<PathBuf>) -> Self {
        App {
            name: DEFAULT_NAME.to_string(),
            sex: Sex::Male,
            age: DEFAULT_AGE.to_string(),
            weight: DEFAULT_WEIGHT.to_string(),
            height_ft: DEFAULT_HEIGHT_FT.to_string(),
            height_in: DEFAULT_HEIGHT_IN.to_string(),
            waist: DEFAULT_WAIST.to_string(),
            thigh: DEFAULT_THIGH.to_string(),
            store_data: false,
            focus: Field::Name,
            error: None,
            status: None,
            results: None,
            db_path: database_path(db_override),
        }
    }

    /// Handle one key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('r') | KeyCode::Char('R') => self.reset(),
                KeyCode::Char('c') => return true,
                _ => {}
            }
            return false;
        }

        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Enter => self.calculate(),
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Left | KeyCode::Right if self.focus == Field::Sex => {
                self.sex = other_sex(self.sex);
            }
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Backspace => {
                if let Some(buffer) = self.buffer_mut() {
                    buffer.pop();
                }
            }
            _ => {}
        }
        false
    }

    /// Run both calculations from the current buffers. On success the
    /// band charts update and, when Store Data is checked, the session
    /// is appended to the database. On failure the form shows the
    /// first validation message.
    pub fn calculate(&mut self) {
        self.error = None;
        self.status = None;
        match self.evaluate() {
            Ok((record, results)) => {
                self.results = Some(results);
                if self.store_data {
                    self.store(&record);
                }
            }
            Err(e) => {
                self.results = None;
                self.error = Some(validation_message(&e));
            }
        }
    }

    /// Restore every field to the reference subject and clear the outcome.
    /// Focus stays where it is.
    pub fn reset(&mut self) {
        self.name = DEFAULT_NAME.to_string();
        self.sex = Sex::Male;
        self.age = DEFAULT_AGE.to_string();
        self.weight = DEFAULT_WEIGHT.to_string();
        self.height_ft = DEFAULT_HEIGHT_FT.to_string();
        self.height_in = DEFAULT_HEIGHT_IN.to_string();
        self.waist = DEFAULT_WAIST.to_string();
        self.thigh = DEFAULT_THIGH.to_string();
        self.store_data = false;
        self.error = None;
        self.status = None;
        self.results = None;
    }

    /// The buffer text for an editable field; empty for the toggles.
    pub fn buffer(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Age => &self.age,
            Field::Weight => &self.weight,
            Field::HeightFt => &self.height_ft,
            Field::HeightIn => &self.height_in,
            Field::Waist => &self.waist,
            Field::Thigh => &self.thigh,
            Field::Sex | Field::StoreData => "",
        }
    }

    fn buffer_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Name => Some(&mut self.name),
            Field::Age => Some(&mut self.age),
            Field::Weight => Some(&mut self.weight),
            Field::HeightFt => Some(&mut self.height_ft),
            Field::HeightIn => Some(&mut self.height_in),
            Field::Waist => Some(&mut self.waist),
            Field::Thigh => Some(&mut self.thigh),
            Field::Sex | Field::StoreData => None,
        }
    }

    fn handle_char(&mut self, ch: char) {
        match self.focus {
            Field::Sex => match ch {
                ' ' => self.sex = other_sex(self.sex),
                'm' | 'M' => self.sex = Sex::Male,
                'f' | 'F' => self.sex = Sex::Female,
                _ => {}
            },
            Field::StoreData => {
                if ch == ' ' {
                    self.store_data = !self.store_data;
                }
            }
            _ => self.insert_char(ch),
        }
    }

    fn insert_char(&mut self, ch: char) {
        let accepted = match self.focus {
            Field::Name => ch.is_ascii_alphabetic() || (ch == '-' && !self.name.is_empty()),
            Field::Age => positive_int_char(&self.age, ch),
            Field::HeightFt => positive_int_char(&self.height_ft, ch),
            Field::HeightIn => ch.is_ascii_digit() && self.height_in != "0",
            Field::Weight => decimal_char(&self.weight, ch),
            Field::Waist => decimal_char(&self.waist, ch),
            Field::Thigh => decimal_char(&self.thigh, ch),
            Field::Sex | Field::StoreData => false,
        };
        if accepted {
            if let Some(buffer) = self.buffer_mut() {
                buffer.push(ch);
            }
        }
    }

    fn evaluate(&self) -> CalcResult<(MeasurementRecord, Results)> {
        let name = validate::parse_name(&self.name)?;
        let age = validate::parse_age(&self.age)?;
        let weight_lbs = validate::parse_measurement("weight_lbs", &self.weight)?;
        let feet = validate::parse_feet_component(&self.height_ft)?;
        let inches = validate::parse_inches_component(&self.height_in)?;
        let waist_in = validate::parse_measurement("waist_in", &self.waist)?;
        let thigh_in = validate::parse_measurement("thigh_in", &self.thigh)?;

        let height = Height::from_feet_inches(feet, inches);
        let bmi_result = bmi::calculate(&BmiInput {
            weight_lbs,
            height_ft: height.decimal_feet().value(),
        })?;
        let vf_result = visceral_fat::calculate(&VisceralFatInput {
            sex: self.sex,
            age,
            waist_in,
            thigh_in,
            bmi: bmi_result.bmi,
        })?;

        let record = MeasurementRecord::new(
            name,
            self.sex,
            age,
            weight_lbs,
            height,
            waist_in,
            thigh_in,
            bmi_result.bmi,
            vf_result.visceral_fat_cm2,
        );
        Ok((
            record,
            Results {
                bmi: bmi_result,
                visceral_fat: vf_result,
            },
        ))
    }

    fn store(&mut self, record: &MeasurementRecord) {
        let stored = Store::open(&self.db_path).and_then(|mut store| store.append(record));
        match stored {
            Ok(id) => {
                debug!(id, path = %self.db_path.display(), "session stored");
                self.status = Some(format!("Data is stored in {}", self.db_path.display()));
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}

fn other_sex(sex: Sex) -> Sex {
    match sex {
        Sex::Male => Sex::Female,
        Sex::Female => Sex::Male,
    }
}

/// The form shows the human reason, not the structured error.
fn validation_message(error: &CalcError) -> String {
    match error {
        CalcError::InvalidInput { reason, .. } => reason.clone(),
        other => other.to_string(),
    }
}

/// One keystroke of a positive integer: digits, no leading zero.
fn positive_int_char(buffer: &str, ch: char) -> bool {
    ch.is_ascii_digit() && (ch != '0' || !buffer.is_empty())
}

/// One keystroke of a decimal number: digits, one dot, a digit before it.
fn decimal_char(buffer: &str, ch: char) -> bool {
    match ch {
        '0'..='9' => true,
        '.' => !buffer.is_empty() && !buffer.contains('.'),
        _ => false,
    }
}
