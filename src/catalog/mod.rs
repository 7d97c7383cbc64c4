//! Manufacturer catalog: the WMI registry aggregated to one entry per
//! manufacturer name, for browse/search use. Rebuilt from the registry on
//! demand; grouping is by the raw name, which is finer-grained than the
//! normalized key the decoder uses.

pub mod display;
pub mod export_csv;

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::data::WmiEntry;
use self::display::{display_name, logo_ref};

pub use self::export_csv::{export_catalog_csv, write_catalog_csv};

/// One manufacturer in the catalog: every country and WMI code seen for
/// its raw registry name, plus display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManufacturerEntry {
    pub name: String,
    pub display_name: String,
    /// Deduplicated and sorted.
    pub countries: Vec<String>,
    /// Registry order within the group; duplicates kept.
    pub wmi_codes: Vec<String>,
    pub logo: String,
}

/// Group registry rows by raw manufacturer name. Output order is
/// deterministic: sorted by display name, ties broken by raw name.
pub fn build_catalog(entries: &[WmiEntry]) -> Vec<ManufacturerEntry> {
    let mut groups: BTreeMap<&str, (BTreeSet<&str>, Vec<&str>)> = BTreeMap::new();
    for entry in entries {
        let group = groups.entry(entry.manufacturer.as_str()).or_default();
        group.0.insert(entry.country.as_str());
        group.1.push(entry.wmi.as_str());
    }

    let mut catalog: Vec<ManufacturerEntry> = groups
        .into_iter()
        .map(|(name, (countries, wmi_codes))| ManufacturerEntry {
            name: name.to_string(),
            display_name: display_name(name).to_string(),
            countries: countries.into_iter().map(str::to_string).collect(),
            wmi_codes: wmi_codes.into_iter().map(str::to_string).collect(),
            logo: logo_ref(name).to_string(),
        })
        .collect();

    catalog.sort_by(|a, b| {
        a.display_name
            .cmp(&b.display_name)
            .then_with(|| a.name.cmp(&b.name))
    });
    catalog
}

/// Case-insensitive substring search over display and raw names. An empty
/// query returns the whole catalog.
pub fn search(query: &str, catalog: &[ManufacturerEntry]) -> Vec<ManufacturerEntry> {
    if query.is_empty() {
        return catalog.to_vec();
    }
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|entry| {
            entry.display_name.to_lowercase().contains(&needle)
                || entry.name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
