//! Registry dataset diagnostics for the `check-data` command. The loader
//! silently skips bad records; this pass reports what would be skipped or
//! shadowed so dataset authors can fix the source.

use std::fmt;
use std::fs;

use serde_json::Value;

use crate::vin::validate::VIN_ALPHABET;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }
}

/// Validate a registry dataset file (JSON array form). Returns Err only
/// when the file itself cannot be read or parsed.
pub fn validate_wmi_dataset(path: &str) -> Result<ValidationReport, String> {
    let raw = fs::read_to_string(path).map_err(|err| format!("unable to read '{path}': {err}"))?;
    let payload: Value = serde_json::from_str(&raw)
        .map_err(|err| format!("unable to parse json '{path}': {err}"))?;
    let records = payload
        .as_array()
        .ok_or_else(|| format!("'{path}': expected a top-level json array"))?;

    Ok(validate_records(records))
}

fn validate_records(records: &[Value]) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut seen_wmis: Vec<&str> = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let context = format!("record[{index}]");

        let Some(object) = record.as_object() else {
            report.push(ValidationSeverity::Error, context, "not a json object; skipped by loader");
            continue;
        };

        let mut fields = Vec::with_capacity(3);
        for field in ["WMI", "Name", "Country"] {
            match object.get(field).and_then(Value::as_str) {
                Some(value) => fields.push(value),
                None => {
                    report.push(
                        ValidationSeverity::Error,
                        context.clone(),
                        format!("missing or non-string field '{field}'; skipped by loader"),
                    );
                }
            }
        }
        if fields.len() != 3 {
            continue;
        }
        let (wmi, name, country) = (fields[0], fields[1], fields[2]);

        if wmi.is_empty() || wmi.chars().count() > 3 {
            report.push(
                ValidationSeverity::Error,
                context.clone(),
                format!("wmi '{wmi}' must be 1-3 characters"),
            );
        } else if !wmi.chars().all(|c| VIN_ALPHABET.contains(c)) {
            report.push(
                ValidationSeverity::Warning,
                context.clone(),
                format!("wmi '{wmi}' contains characters outside the vin alphabet"),
            );
        }

        if name.trim().is_empty() {
            report.push(ValidationSeverity::Warning, context.clone(), "empty manufacturer name");
        }
        if country.trim().is_empty() {
            report.push(ValidationSeverity::Warning, context.clone(), "empty country");
        }

        if seen_wmis.contains(&wmi) {
            report.push(
                ValidationSeverity::Warning,
                context,
                format!("duplicate wmi '{wmi}'; first occurrence wins at load time"),
            );
        } else {
            seen_wmis.push(wmi);
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::{validate_records, ValidationSeverity};

    fn records(raw: &str) -> Vec<serde_json::Value> {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn clean_dataset_produces_no_diagnostics() {
        let report = validate_records(&records(
            r#"[
                {"WMI": "WBA", "Name": "BMW AG", "Country": "Germany"},
                {"WMI": "1", "Name": "UNITED STATES GENERIC", "Country": "United States"}
            ]"#,
        ));
        assert!(report.diagnostics.is_empty());
        assert!(!report.has_errors());
    }

    #[test]
    fn missing_fields_are_errors() {
        let report = validate_records(&records(
            r#"[{"WMI": "WBA", "Name": "BMW AG"}, {"WMI": 5, "Name": "X", "Country": "Y"}]"#,
        ));
        assert!(report.has_errors());
        assert_eq!(
            report
                .diagnostics
                .iter()
                .filter(|d| d.severity == ValidationSeverity::Error)
                .count(),
            2
        );
    }

    #[test]
    fn oversized_wmi_is_an_error_and_duplicates_warn() {
        let report = validate_records(&records(
            r#"[
                {"WMI": "WBAX", "Name": "TOO LONG", "Country": "Germany"},
                {"WMI": "JTD", "Name": "TOYOTA MOTOR CORPORATION", "Country": "Japan"},
                {"WMI": "JTD", "Name": "DUPLICATE", "Country": "Japan"}
            ]"#,
        ));
        assert!(report.has_errors());
        assert!(report
            .diagnostics
            .iter()
            .any(|d| d.severity == ValidationSeverity::Warning && d.message.contains("duplicate")));
    }

    #[test]
    fn illegal_wmi_characters_warn() {
        let report = validate_records(&records(
            r#"[{"WMI": "IOQ", "Name": "BAD CHARS", "Country": "Nowhere"}]"#,
        ));
        assert!(!report.has_errors());
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].severity, ValidationSeverity::Warning);
    }
}
