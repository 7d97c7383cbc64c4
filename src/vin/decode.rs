//! VIN decoding against a loaded [`ReferenceData`] store. Splits the VIN
//! into WMI/VDS/VIS fields, resolves the manufacturer with prefix
//! fallback, and fills in plant/model where the fixed tables have data.

use std::fmt;

use serde::Serialize;

use crate::data::{manufacturer_key, ReferenceData};
use crate::vin::validate::VIN_LENGTH;

/// Why a decode produced no result. Missing plant/model data is not a
/// failure; those surface as `None` fields on [`DecodedVin`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input is not 17 characters.
    InvalidFormat,
    /// The registry dataset never loaded; every VIN is undecodable until
    /// the data is fixed. Distinct from `UnknownWmi` so callers can tell
    /// "database broken" from "VIN unknown".
    RegistryUnavailable,
    /// No 3-, 2-, or 1-character WMI prefix matched the registry.
    UnknownWmi,
    /// Year code absent from the fixed table. The whole decode fails
    /// rather than returning a result with a fabricated year.
    UnknownYearCode(char),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat => write!(f, "vin must be exactly {VIN_LENGTH} characters"),
            Self::RegistryUnavailable => write!(f, "wmi registry dataset is unavailable"),
            Self::UnknownWmi => write!(f, "no manufacturer found for wmi prefix"),
            Self::UnknownYearCode(code) => write!(f, "unknown model-year code '{code}'"),
        }
    }
}

/// Successful decode. `engine` and `transmission` are reserved; the fixed
/// tables carry no data for them and they are always `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedVin {
    pub country: String,
    pub manufacturer: String,
    pub make: String,
    pub year: i32,
    pub plant: Option<String>,
    pub model: Option<String>,
    pub engine: Option<String>,
    pub transmission: Option<String>,
}

/// Decode a 17-character VIN. Pure over the store: the same VIN and the
/// same store always produce the same result.
///
/// Character-set legality is [`validate_vin`](crate::vin::validate_vin)'s
/// job; the decoder only requires the length and re-derives its substrings
/// from the upper-cased input.
pub fn decode_vin(vin: &str, data: &ReferenceData) -> Result<DecodedVin, DecodeError> {
    let upper = vin.to_uppercase();
    let chars: Vec<char> = upper.chars().collect();
    if chars.len() != VIN_LENGTH {
        return Err(DecodeError::InvalidFormat);
    }

    let wmi: String = chars[..3].iter().collect();
    let year_code = chars[9];
    let plant_code = chars[10];

    if !data.is_ready() {
        return Err(DecodeError::RegistryUnavailable);
    }

    let entry = data.resolve_wmi(&wmi).ok_or(DecodeError::UnknownWmi)?;
    let year = data
        .year_for_code(year_code)
        .ok_or(DecodeError::UnknownYearCode(year_code))?;

    let key = manufacturer_key(&entry.manufacturer);
    let plant = data.plant_name(&key, plant_code).map(str::to_string);
    let vds_prefix: String = chars[3..8].iter().collect();
    let model = data.model_name(&key, &vds_prefix).map(str::to_string);

    Ok(DecodedVin {
        country: entry.country.clone(),
        manufacturer: entry.manufacturer.clone(),
        make: entry.manufacturer.clone(),
        year,
        plant,
        model,
        engine: None,
        transmission: None,
    })
}
