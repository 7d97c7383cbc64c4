//! Static display-name and logo tables, keyed by the raw registry
//! manufacturer name. Names absent from these tables fall back to the raw
//! name and the generic logo.

/// Logo reference used when a manufacturer has no branded asset.
pub const GENERIC_LOGO_REF: &str = "logo_generic";

/// Raw registry name -> human display name.
const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("AUDI AG", "Audi"),
    ("TOYOTA MOTOR CORPORATION", "Toyota"),
    ("NISSAN MOTOR CO., LTD.", "Nissan"),
    ("HONDA MOTOR CO., LTD.", "Honda"),
    ("BMW AG", "BMW"),
    ("MERCEDES-BENZ AG", "Mercedes-Benz"),
    ("VOLKSWAGEN AG", "Volkswagen"),
    ("FORD MOTOR COMPANY", "Ford"),
    ("GENERAL MOTORS LLC", "General Motors"),
    ("HYUNDAI MOTOR COMPANY", "Hyundai"),
    ("KIA CORPORATION", "Kia"),
    ("RENAULT SAS", "Renault"),
    ("PEUGEOT", "Peugeot"),
    ("CITROEN", "Citroën"),
    ("OPEL", "Opel"),
    ("VOLVO", "Volvo"),
    ("MAZDA MOTOR CORPORATION", "Mazda"),
    ("SUBARU CORPORATION", "Subaru"),
    ("MITSUBISHI MOTORS CORPORATION", "Mitsubishi"),
    ("LEXUS", "Lexus"),
    ("INFINITI", "Infiniti"),
    ("ACURA", "Acura"),
    ("BUICK", "Buick"),
    ("CADILLAC", "Cadillac"),
    ("CHEVROLET", "Chevrolet"),
    ("CHRYSLER", "Chrysler"),
    ("DODGE", "Dodge"),
    ("JEEP", "Jeep"),
    ("RAM", "RAM"),
    ("GMC", "GMC"),
    ("PONTIAC", "Pontiac"),
    ("SATURN", "Saturn"),
    ("OLDSMOBILE", "Oldsmobile"),
    ("PLYMOUTH", "Plymouth"),
    ("FIAT", "Fiat"),
    ("ALFA ROMEO", "Alfa Romeo"),
    ("LANCIA", "Lancia"),
    ("MASERATI", "Maserati"),
    ("FERRARI", "Ferrari"),
    ("LAMBORGHINI", "Lamborghini"),
    ("PORSCHE", "Porsche"),
    ("BENTLEY", "Bentley"),
    ("ROLLS-ROYCE", "Rolls-Royce"),
    ("ASTON MARTIN", "Aston Martin"),
    ("JAGUAR", "Jaguar"),
    ("LAND ROVER", "Land Rover"),
    ("MINI", "Mini"),
    ("SMART", "Smart"),
    ("SEAT", "SEAT"),
    ("SKODA", "Škoda"),
    ("LADA", "Lada"),
    ("GAZ", "GAZ"),
    ("UAZ", "UAZ"),
    ("ZAZ", "ZAZ"),
    ("MOSKVICH", "Moskvich"),
    ("IZH", "IZH"),
    ("KAMAZ", "KAMAZ"),
    ("URAL", "Ural"),
    ("KRAZ", "KrAZ"),
    ("BELAZ", "BelAZ"),
    ("MAZ", "MAZ"),
    ("ZIL", "ZIL"),
];

/// Raw registry name -> branded logo asset reference. Everyone else gets
/// [`GENERIC_LOGO_REF`].
const LOGO_REFS: &[(&str, &str)] = &[
    ("AUDI AG", "logo_audi"),
    ("TOYOTA MOTOR CORPORATION", "logo_toyota"),
    ("NISSAN MOTOR CO., LTD.", "logo_nissan"),
    ("HONDA MOTOR CO., LTD.", "logo_honda"),
    ("BMW AG", "logo_bmw"),
    ("MERCEDES-BENZ AG", "logo_mercedes"),
    ("VOLKSWAGEN AG", "logo_vw"),
    ("FORD MOTOR COMPANY", "logo_ford"),
    ("GENERAL MOTORS LLC", "logo_gm"),
    ("HYUNDAI MOTOR COMPANY", "logo_hyundai"),
    ("KIA CORPORATION", "logo_kia"),
    ("RENAULT SAS", "logo_renault"),
];

/// Display name for a raw registry manufacturer name.
pub fn display_name(raw_name: &str) -> &str {
    DISPLAY_NAMES
        .iter()
        .find(|(name, _)| *name == raw_name)
        .map_or(raw_name, |&(_, display)| display)
}

/// Logo reference for a raw registry manufacturer name.
pub fn logo_ref(raw_name: &str) -> &'static str {
    LOGO_REFS
        .iter()
        .find(|(name, _)| *name == raw_name)
        .map_or(GENERIC_LOGO_REF, |&(_, logo)| logo)
}
