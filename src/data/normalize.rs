//! Manufacturer name normalization for plant/model lookup.
//!
//! Registry names are long legal names ("BMW AG", "TOYOTA MOTOR
//! CORPORATION"); the plant and model tables are keyed by short brand
//! names. Intentionally coarser than the raw registry name: the catalog
//! keeps the full name, only sub-table lookups go through this.

/// Brand substrings collapsed to a short key, tested in this order.
const BRAND_KEYS: &[&str] = &[
    "AUDI",
    "VOLKSWAGEN",
    "MERCEDES",
    "TOYOTA",
    "HONDA",
    "NISSAN",
    "BMW",
];

/// Corporate suffixes removed (every occurrence) from names that match no
/// brand key, in this order.
const CORPORATE_SUFFIXES: &[&str] = &[
    " AG",
    " MOTOR CO., LTD.",
    " MOTOR CORPORATION",
    " LLC",
    " SAS",
    " NV",
    " SPA",
    " AUTOMOBILES",
    " CORPORATION",
];

/// Normalize a raw registry manufacturer name to the short key used by the
/// plant/model tables. Idempotent: applying it to its own output is a no-op.
pub fn manufacturer_key(raw: &str) -> String {
    let upper = raw.to_uppercase();
    for brand in BRAND_KEYS {
        if upper.contains(brand) {
            return (*brand).to_string();
        }
    }
    let mut key = upper;
    for suffix in CORPORATE_SUFFIXES {
        key = key.replace(suffix, "");
    }
    key.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::manufacturer_key;

    #[test]
    fn brand_substrings_collapse_to_short_keys() {
        assert_eq!(manufacturer_key("BMW AG"), "BMW");
        assert_eq!(manufacturer_key("AUDI AG"), "AUDI");
        assert_eq!(manufacturer_key("Mercedes-Benz AG"), "MERCEDES");
        assert_eq!(manufacturer_key("TOYOTA MOTOR CORPORATION"), "TOYOTA");
        assert_eq!(manufacturer_key("honda motor co., ltd."), "HONDA");
        assert_eq!(manufacturer_key("Nissan Motor Co., Ltd."), "NISSAN");
        assert_eq!(manufacturer_key("VOLKSWAGEN AG"), "VOLKSWAGEN");
    }

    #[test]
    fn corporate_suffixes_are_stripped_for_other_names() {
        assert_eq!(manufacturer_key("GENERAL MOTORS LLC"), "GENERAL MOTORS");
        assert_eq!(manufacturer_key("RENAULT SAS"), "RENAULT");
        assert_eq!(manufacturer_key("KIA CORPORATION"), "KIA");
        assert_eq!(manufacturer_key("MAZDA MOTOR CORPORATION"), "MAZDA");
    }

    #[test]
    fn names_without_suffixes_pass_through_uppercased() {
        assert_eq!(manufacturer_key("Ferrari"), "FERRARI");
        assert_eq!(manufacturer_key("LAND ROVER"), "LAND ROVER");
    }

    #[test]
    fn idempotent_over_the_brand_key_set() {
        for key in ["AUDI", "VOLKSWAGEN", "MERCEDES", "TOYOTA", "HONDA", "NISSAN", "BMW"] {
            assert_eq!(manufacturer_key(&manufacturer_key(key)), manufacturer_key(key));
        }
    }
}
