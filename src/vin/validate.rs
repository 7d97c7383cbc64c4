//! VIN format checking: length and character set only. Check-digit
//! arithmetic is deliberately not performed.

/// A post-1981 VIN is exactly 17 characters.
pub const VIN_LENGTH: usize = 17;

/// Legal VIN characters: digits plus uppercase letters excluding I, O, Q.
pub const VIN_ALPHABET: &str = "0123456789ABCDEFGHJKLMNPRSTUVWXYZ";

/// True when the input, upper-cased, is 17 characters drawn entirely from
/// the VIN alphabet. Pure; no check digit.
pub fn validate_vin(vin: &str) -> bool {
    let upper = vin.to_uppercase();
    if upper.chars().count() != VIN_LENGTH {
        return false;
    }
    upper.chars().all(|c| VIN_ALPHABET.contains(c))
}
