//! WMI registry rows: code -> manufacturer + country. Loaded once from the
//! bundled dataset; records with missing fields are skipped, not fatal.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_WMI_REGISTRY_PATH: &str = "data/wmi_registry.json";

/// One row of the WMI registry. `wmi` is 1-3 characters; shorter codes act
/// as prefix fallbacks during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WmiEntry {
    #[serde(rename = "WMI")]
    pub wmi: String,
    #[serde(rename = "Name")]
    pub manufacturer: String,
    #[serde(rename = "Country")]
    pub country: String,
}

/// Why a registry dataset could not be loaded at all. Per-record problems
/// never surface here (bad records are dropped).
#[derive(Debug)]
pub enum RegistryLoadError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
}

impl fmt::Display for RegistryLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "unable to read registry: {err}"),
            Self::Json(err) => write!(f, "unable to parse registry json: {err}"),
            Self::Csv(err) => write!(f, "unable to parse registry csv: {err}"),
        }
    }
}

/// Load registry entries from a dataset file. `.csv` selects the CSV
/// reader; anything else is treated as the `wmi_database.json` array
/// format.
pub fn load_wmi_registry(path: impl AsRef<Path>) -> Result<Vec<WmiEntry>, RegistryLoadError> {
    let path = path.as_ref();
    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv")) {
        return load_wmi_registry_csv(path);
    }
    let raw = fs::read_to_string(path).map_err(RegistryLoadError::Io)?;
    parse_wmi_registry_json(&raw)
}

/// Parse the JSON array format: `[{"WMI": ..., "Name": ..., "Country": ...}]`.
/// Records missing any of the three string fields are skipped.
pub fn parse_wmi_registry_json(raw: &str) -> Result<Vec<WmiEntry>, RegistryLoadError> {
    let records: Vec<serde_json::Value> =
        serde_json::from_str(raw).map_err(RegistryLoadError::Json)?;
    Ok(records.iter().filter_map(entry_from_value).collect())
}

fn entry_from_value(value: &serde_json::Value) -> Option<WmiEntry> {
    let wmi = value.get("WMI")?.as_str()?;
    let manufacturer = value.get("Name")?.as_str()?;
    let country = value.get("Country")?.as_str()?;
    Some(WmiEntry {
        wmi: wmi.to_string(),
        manufacturer: manufacturer.to_string(),
        country: country.to_string(),
    })
}

fn load_wmi_registry_csv(path: &Path) -> Result<Vec<WmiEntry>, RegistryLoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(RegistryLoadError::Csv)?;
    let mut entries = Vec::new();
    for record in reader.deserialize::<WmiEntry>() {
        // Rows that fail to deserialize (short rows, missing columns) are
        // dropped, mirroring the JSON skip policy.
        if let Ok(entry) = record {
            entries.push(entry);
        }
    }
    Ok(entries)
}
