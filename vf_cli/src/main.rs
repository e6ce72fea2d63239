//! # VFCalc CLI Application
//!
//! Command line front end for the visceral fat calculator. Takes body
//! measurements in US customary units, prints both indices with their
//! classification bands, and can store the session or hand off to the
//! interactive form (`vf_tui`).

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use colored::Colorize;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use vf_core::calculations::bmi::{self, BmiInput, BmiResult};
use vf_core::calculations::visceral_fat::{self, VisceralFatInput, VisceralFatResult};
use vf_core::categories::ChartColor;
use vf_core::record::{MeasurementRecord, Sex};
use vf_core::store::{database_path, Store};
use vf_core::units::Height;
use vf_core::validate;
use vf_core::CalcResult;

/// Log file written in the working directory when --debug is set
const LOG_FILE: &str = ".log";

#[derive(Parser)]
#[command(name = "vf_cli")]
#[command(version, about = "Visceral fat and BMI calculator", long_about = None)]
struct Cli {
    /// User name (one word)
    #[arg(short, long, default_value = "Tony")]
    name: String,

    /// Calculate with the male equation (the default)
    #[arg(short, long, conflicts_with = "female")]
    male: bool,

    /// Calculate with the female equation
    #[arg(short, long)]
    female: bool,

    /// Age in whole years
    #[arg(short, long, default_value = "42")]
    age: String,

    /// Weight in lbs. (e.g. 190.0)
    #[arg(short = 'w', long, default_value = "190.0")]
    weight: String,

    /// Height in decimal feet (e.g. 6.1)
    #[arg(short = 'H', long, default_value = "6.1")]
    height: String,

    /// Waist circumference in inches (e.g. 36.0)
    #[arg(short = 'c', long, default_value = "36.0")]
    waist: String,

    /// Thigh circumference in inches (e.g. 24.5)
    #[arg(short = 't', long, default_value = "24.5")]
    thigh: String,

    /// Store the session in the database
    #[arg(short = 's', long)]
    store_data: bool,

    /// Enter measurements through the interactive form instead
    #[arg(short, long)]
    interactive: bool,

    /// Write debug logging to the .log file
    #[arg(short, long)]
    debug: bool,

    /// Database file (defaults to VF_DATABASE_PATH or vf_data.db)
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Print results as JSON instead of text
    #[arg(long)]
    json: bool,
}

/// Everything one session produces, for the JSON output mode
#[derive(Serialize)]
struct Report<'a> {
    record: &'a MeasurementRecord,
    bmi: &'a BmiResult,
    visceral_fat: &'a VisceralFatResult,
}

fn main() -> ExitCode {
    let args = Cli::parse();

    if let Err(e) = init_logging(args.debug) {
        eprintln!("Warning: could not open {LOG_FILE}: {e}");
    }

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{json}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> CalcResult<ExitCode> {
    let name = validate::parse_name(&args.name)?;
    let sex = sex_from_flags(args.male, args.female);
    let age = validate::parse_age(&args.age)?;
    let weight_lbs = validate::parse_measurement("weight_lbs", &args.weight)?;
    let height_ft = validate::parse_measurement("height_ft", &args.height)?;
    let waist_in = validate::parse_measurement("waist_in", &args.waist)?;
    let thigh_in = validate::parse_measurement("thigh_in", &args.thigh)?;

    debug!(name = %name, sex = %sex, age, "starting calculation");

    let bmi_result = bmi::calculate(&BmiInput {
        weight_lbs,
        height_ft,
    })?;
    let vf_result = visceral_fat::calculate(&VisceralFatInput {
        sex,
        age,
        waist_in,
        thigh_in,
        bmi: bmi_result.bmi,
    })?;

    let record = MeasurementRecord::new(
        name,
        sex,
        age,
        weight_lbs,
        Height::from_decimal_feet(height_ft),
        waist_in,
        thigh_in,
        bmi_result.bmi,
        vf_result.visceral_fat_cm2,
    );

    if args.json {
        let report = Report {
            record: &record,
            bmi: &bmi_result,
            visceral_fat: &vf_result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&record, &bmi_result, &vf_result);
    }

    // The interactive form takes over the session; nothing is stored on
    // this side of the hand-off.
    if args.interactive {
        println!();
        println!("***** Now using interactive form *****");
        println!();
        return Ok(launch_interactive(&args));
    }

    if args.store_data {
        let path = database_path(args.db.clone());
        let mut store = Store::open(&path)?;
        let id = store.append(&record)?;
        debug!(id, path = %path.display(), "session stored");
        println!("Data is stored in {}", path.display());
    }

    Ok(ExitCode::SUCCESS)
}

/// The female flag selects the female equation; otherwise the male
/// equation applies. Both flags together are rejected by the parser.
fn sex_from_flags(male: bool, female: bool) -> Sex {
    match (male, female) {
        (_, true) => Sex::Female,
        _ => Sex::Male,
    }
}

fn print_report(record: &MeasurementRecord, bmi: &BmiResult, vf: &VisceralFatResult) {
    println!("name = {}", record.name);
    println!("gender = {}", record.sex);
    println!("age = {}", record.age);
    println!("weight = {} lbs.", record.weight_lbs);
    println!("height = {} ft", record.height.decimal_feet().value());
    println!("waist = {} inches, {:.2} cm", record.waist_in, vf.waist_cm);
    println!("thigh = {} inches, {:.2} cm", record.thigh_in, vf.thigh_cm);
    println!(
        "bmi = {:.2} kg/m^2 - {}",
        bmi.bmi,
        paint(bmi.category.display_name(), bmi.category.color())
    );
    println!(
        "visceral fat = {:.2} cm^2 - {}",
        vf.visceral_fat_cm2,
        paint(vf.category.display_name(), vf.category.color())
    );
}

fn paint(text: &str, color: ChartColor) -> colored::ColoredString {
    let (r, g, b) = color.rgb();
    text.truecolor(r, g, b)
}

/// Run the interactive form, forwarding the flags it understands, and
/// report its exit status as our own.
fn launch_interactive(args: &Cli) -> ExitCode {
    let binary = std::env::current_exe()
        .ok()
        .and_then(|p| {
            p.parent()
                .map(|dir| dir.join(format!("vf_tui{}", std::env::consts::EXE_SUFFIX)))
        })
        .filter(|p| p.exists())
        .unwrap_or_else(|| PathBuf::from("vf_tui"));

    let mut cmd = std::process::Command::new(binary);
    if args.debug {
        cmd.arg("--debug");
    }
    if let Some(db) = &args.db {
        cmd.arg("--db").arg(db);
    }

    match cmd.status() {
        Ok(status) if status.success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: could not launch vf_tui: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(debug: bool) -> std::io::Result<()> {
    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(LOG_FILE)?;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("debug"))
            .with_ansi(false)
            .with_writer(Arc::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}
