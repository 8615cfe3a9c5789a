//! # Rebara CLI Application
//!
//! Batch front-end for the rc_core check engine. Reads a JSON array of
//! section inputs, runs every check, and prints the calculation sheet.
//!
//! ## Usage
//!
//! ```text
//! rc-check sections.json [--csv out.csv] [--json out.json]
//! rc-check                # runs the built-in demo section
//! ```

use std::fs;
use std::process::ExitCode;

use rc_core::checks::{check_all, CheckConfig, SectionInput, Stirrups};
use rc_core::materials::Materials;
use rc_core::report;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut input_path: Option<String> = None;
    let mut csv_path: Option<String> = None;
    let mut json_path: Option<String> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--csv" => match iter.next() {
                Some(path) => csv_path = Some(path.clone()),
                None => return usage_error("--csv requires a path"),
            },
            "--json" => match iter.next() {
                Some(path) => json_path = Some(path.clone()),
                None => return usage_error("--json requires a path"),
            },
            "--help" | "-h" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            path if input_path.is_none() => input_path = Some(path.to_string()),
            other => return usage_error(&format!("unexpected argument: {other}")),
        }
    }

    let sections = match &input_path {
        Some(path) => match load_sections(path) {
            Ok(sections) => sections,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => {
            println!("Rebara - RC Section Check");
            println!("=========================");
            println!();
            println!("No input file given. Running built-in demo section...");
            println!();
            demo_sections()
        }
    };

    let outcomes = check_all(&sections, &CheckConfig::default());
    print!("{}", report::render(&outcomes));

    if let Some(path) = csv_path {
        if let Err(e) = fs::write(&path, report::to_csv(&outcomes)) {
            eprintln!("Error writing {path}: {e}");
            return ExitCode::FAILURE;
        }
        println!("CSV written to {path}");
    }

    if let Some(path) = json_path {
        match serde_json::to_string_pretty(&outcomes) {
            Ok(json) => {
                if let Err(e) = fs::write(&path, json) {
                    eprintln!("Error writing {path}: {e}");
                    return ExitCode::FAILURE;
                }
                println!("JSON written to {path}");
            }
            Err(e) => {
                eprintln!("Error serializing results: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    // Exit non-zero when any section failed or errored, so the tool can
    // gate a CI-style workflow
    let all_pass = outcomes
        .iter()
        .all(|o| matches!(&o.result, Ok(r) if r.passes()));
    if all_pass {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn load_sections(path: &str) -> Result<Vec<SectionInput>, String> {
    let contents = fs::read_to_string(path).map_err(|e| format!("cannot read {path}: {e}"))?;
    serde_json::from_str(&contents).map_err(|e| format!("invalid JSON in {path}: {e}"))
}

/// A deck slab design point that exercises every check end to end.
fn demo_sections() -> Vec<SectionInput> {
    vec![SectionInput {
        label: "Demo slab longitudinal +".to_string(),
        b_mm: 1000.0,
        h_mm: Some(350.0),
        d_mm: 250.0,
        cover_mm: 100.0,
        materials: Materials {
            fck_mpa: 40.0,
            fy_mpa: 500.0,
            fvy_mpa: 400.0,
        },
        mu_knm: 242.015,
        vu_kn: 167.204,
        as_provided_mm2: Some(3096.8),
        stirrups: Some(Stirrups {
            av_mm2: 506.8,
            spacing_mm: 125.0,
        }),
        n_bars: Some(10),
    }]
}

fn print_usage() {
    println!("Usage: rc-check [sections.json] [--csv out.csv] [--json out.json]");
    println!();
    println!("  sections.json   JSON array of section inputs");
    println!("  --csv PATH      also write a flat CSV export");
    println!("  --json PATH     also write the raw results as JSON");
    println!();
    println!("Without arguments a built-in demo section is checked.");
}

fn usage_error(msg: &str) -> ExitCode {
    eprintln!("Error: {msg}");
    eprintln!();
    print_usage();
    ExitCode::FAILURE
}
