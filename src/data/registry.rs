//! Startup-loaded reference data store. Load once, pass by `Arc` to the
//! decoder and catalog so nothing reloads per call. After construction the
//! store is read-only and safe to share across threads without locking.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::data::model::MODEL_CODES;
use crate::data::plant::PLANT_CODES;
use crate::data::wmi::{load_wmi_registry, WmiEntry, DEFAULT_WMI_REGISTRY_PATH};
use crate::data::year::year_for_code;

/// Whether the WMI registry dataset actually loaded. A degraded store keeps
/// working (every resolution misses) but callers can tell the database is
/// broken rather than the VIN being unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryStatus {
    Ready { entries: usize },
    Unavailable { reason: String },
}

impl RegistryStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

/// Read-only reference tables: WMI registry, year codes, plant/model maps.
#[derive(Debug)]
pub struct ReferenceData {
    entries: Vec<WmiEntry>,
    /// Exact WMI string -> index into `entries`. First occurrence wins when
    /// the dataset repeats a code.
    by_wmi: HashMap<String, usize>,
    plants: HashMap<&'static str, HashMap<char, &'static str>>,
    models: HashMap<&'static str, HashMap<&'static str, &'static str>>,
    status: RegistryStatus,
}

impl ReferenceData {
    /// Load the bundled registry dataset. Returns an `Arc` so the store can
    /// be shared across callers and threads.
    pub fn load() -> Arc<ReferenceData> {
        Self::load_from(DEFAULT_WMI_REGISTRY_PATH)
    }

    /// Load a registry dataset from an explicit path. A missing or
    /// unparseable file yields a degraded (empty, `Unavailable`) store
    /// rather than an error.
    pub fn load_from(path: impl AsRef<Path>) -> Arc<ReferenceData> {
        match load_wmi_registry(path) {
            Ok(entries) => Arc::new(Self::from_entries(entries)),
            Err(err) => Arc::new(Self::unavailable(err.to_string())),
        }
    }

    /// Build a store from already-loaded entries (tests, embedders).
    pub fn from_entries(entries: Vec<WmiEntry>) -> ReferenceData {
        let mut by_wmi = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            by_wmi.entry(entry.wmi.clone()).or_insert(index);
        }
        let status = RegistryStatus::Ready { entries: entries.len() };
        ReferenceData {
            entries,
            by_wmi,
            plants: build_plant_map(),
            models: build_model_map(),
            status,
        }
    }

    /// An empty store marked unavailable. Every WMI resolution misses.
    pub fn unavailable(reason: String) -> ReferenceData {
        ReferenceData {
            entries: Vec::new(),
            by_wmi: HashMap::new(),
            plants: build_plant_map(),
            models: build_model_map(),
            status: RegistryStatus::Unavailable { reason },
        }
    }

    pub fn status(&self) -> &RegistryStatus {
        &self.status
    }

    pub fn is_ready(&self) -> bool {
        self.status.is_ready()
    }

    /// All registry rows in dataset order (catalog building, brand listing).
    pub fn wmi_entries(&self) -> &[WmiEntry] {
        &self.entries
    }

    /// Resolve a WMI with progressive-prefix fallback: the full code first,
    /// then its 2-character prefix, then its 1-character prefix. First hit
    /// wins; nothing below one character.
    pub fn resolve_wmi(&self, wmi: &str) -> Option<&WmiEntry> {
        let chars: Vec<char> = wmi.chars().collect();
        for len in (1..=chars.len().min(3)).rev() {
            let prefix: String = chars[..len].iter().collect();
            if let Some(&index) = self.by_wmi.get(prefix.as_str()) {
                return Some(&self.entries[index]);
            }
        }
        None
    }

    /// Model year for a VIS position-10 code.
    pub fn year_for_code(&self, code: char) -> Option<i32> {
        year_for_code(code)
    }

    /// Plant name for a manufacturer key and plant code. Unknown key or
    /// code is "no data", not an error.
    pub fn plant_name(&self, manufacturer_key: &str, code: char) -> Option<&'static str> {
        self.plants.get(manufacturer_key)?.get(&code).copied()
    }

    /// Model name for a manufacturer key and 5-character VDS prefix.
    pub fn model_name(&self, manufacturer_key: &str, vds_prefix: &str) -> Option<&'static str> {
        self.models.get(manufacturer_key)?.get(vds_prefix).copied()
    }
}

fn build_plant_map() -> HashMap<&'static str, HashMap<char, &'static str>> {
    PLANT_CODES
        .iter()
        .map(|&(key, codes)| (key, codes.iter().copied().collect()))
        .collect()
}

fn build_model_map() -> HashMap<&'static str, HashMap<&'static str, &'static str>> {
    MODEL_CODES
        .iter()
        .map(|&(key, codes)| (key, codes.iter().copied().collect()))
        .collect()
}
