//! Command-line dispatcher. Thin layer over the library: every command
//! loads the reference store, calls the pure core, and prints JSON or
//! plain lines. Exit codes: 0 success, 1 failure, 2 usage.

use crate::catalog::{build_catalog, export_catalog_csv, search};
use crate::data::validate::validate_wmi_dataset;
use crate::data::{ReferenceData, RegistryStatus, DEFAULT_WMI_REGISTRY_PATH};
use crate::vin::{decode_vin, validate_vin};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Decode,
    Validate,
    Manufacturers,
    CheckData,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("decode") => Some(Command::Decode),
        Some("validate") => Some(Command::Validate),
        Some("manufacturers") => Some(Command::Manufacturers),
        Some("check-data") => Some(Command::CheckData),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Decode) => handle_decode(args),
        Some(Command::Validate) => handle_validate(args),
        Some(Command::Manufacturers) => handle_manufacturers(args),
        Some(Command::CheckData) => handle_check_data(args),
        None => {
            eprintln!("usage: vincheck <decode|validate|manufacturers|check-data>");
            2
        }
    }
}

fn handle_decode(args: &[String]) -> i32 {
    let Some(vin) = args.get(2) else {
        eprintln!("usage: vincheck decode <vin>");
        return 2;
    };

    if !validate_vin(vin) {
        eprintln!("invalid vin '{vin}': expected 17 characters, no I/O/Q");
        return 1;
    }

    let data = ReferenceData::load();
    if let RegistryStatus::Unavailable { reason } = data.status() {
        eprintln!("wmi registry unavailable: {reason}");
        return 1;
    }

    match decode_vin(vin, &data) {
        Ok(decoded) => match serde_json::to_string_pretty(&decoded) {
            Ok(payload) => {
                println!("{payload}");
                0
            }
            Err(err) => {
                eprintln!("failed to serialize decode result: {err}");
                1
            }
        },
        Err(err) => {
            eprintln!("decode failed: {err}");
            1
        }
    }
}

fn handle_validate(args: &[String]) -> i32 {
    let Some(vin) = args.get(2) else {
        eprintln!("usage: vincheck validate <vin>");
        return 2;
    };

    if validate_vin(vin) {
        println!("valid");
        0
    } else {
        println!("invalid");
        1
    }
}

fn handle_manufacturers(args: &[String]) -> i32 {
    // Optional positional query; `--csv <path>` switches to CSV export.
    let mut query = "";
    let mut csv_path: Option<&str> = None;
    let mut rest = args.iter().skip(2);
    while let Some(arg) = rest.next() {
        if arg == "--csv" {
            match rest.next() {
                Some(path) => csv_path = Some(path.as_str()),
                None => {
                    eprintln!("usage: vincheck manufacturers [query] [--csv <path>]");
                    return 2;
                }
            }
        } else {
            query = arg.as_str();
        }
    }

    let data = ReferenceData::load();
    if let RegistryStatus::Unavailable { reason } = data.status() {
        eprintln!("wmi registry unavailable: {reason}");
        return 1;
    }

    let catalog = build_catalog(data.wmi_entries());
    let filtered = search(query, &catalog);

    if let Some(path) = csv_path {
        return match export_catalog_csv(&filtered, path) {
            Ok(()) => {
                println!("catalog exported: manufacturers={}, path='{path}'", filtered.len());
                0
            }
            Err(err) => {
                eprintln!("catalog export failed: {err}");
                1
            }
        };
    }

    match serde_json::to_string_pretty(&filtered) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize catalog: {err}");
            1
        }
    }
}

fn handle_check_data(args: &[String]) -> i32 {
    let path = args
        .get(2)
        .map(String::as_str)
        .unwrap_or(DEFAULT_WMI_REGISTRY_PATH);

    match validate_wmi_dataset(path) {
        Ok(report) => {
            for diagnostic in &report.diagnostics {
                eprintln!("- {diagnostic}");
            }
            if report.has_errors() {
                eprintln!("validation failed: {path}");
                1
            } else {
                println!("validation passed: {path}");
                0
            }
        }
        Err(err) => {
            eprintln!("validation failed: {err}");
            1
        }
    }
}
