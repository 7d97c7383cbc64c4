//! VIN validation and decoding.

pub mod decode;
pub mod validate;

pub use self::decode::{decode_vin, DecodeError, DecodedVin};
pub use self::validate::{validate_vin, VIN_ALPHABET, VIN_LENGTH};
