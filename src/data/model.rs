//! Model names keyed by the first five VDS characters, per manufacturer.
//! Only a handful of manufacturers carry model data; everyone else decodes
//! with the model field absent.

/// Manufacturer key -> (5-char VDS prefix -> model name).
pub const MODEL_CODES: &[(&str, &[(&str, &str)])] = &[
    (
        "TOYOTA",
        &[
            ("1HGBH", "Camry"),
            ("1HGBJ", "Corolla"),
            ("1HGCM", "Prius"),
            ("1HGCV", "RAV4"),
            ("1HGDJ", "Highlander"),
            ("1HGEM", "Sienna"),
            ("1HGFV", "Tacoma"),
            ("1HGGJ", "Tundra"),
            ("1HGKM", "4Runner"),
            ("1HGCJ", "Avalon"),
        ],
    ),
    (
        "HONDA",
        &[
            ("1HGBH", "Civic"),
            ("1HGBJ", "Accord"),
            ("1HGCM", "CR-V"),
            ("1HGCV", "Pilot"),
            ("1HGDJ", "Odyssey"),
            ("1HGEM", "Ridgeline"),
            ("1HGFV", "HR-V"),
            ("1HGGJ", "Passport"),
            ("1HGKM", "Insight"),
            ("1HGCJ", "Clarity"),
        ],
    ),
    (
        "NISSAN",
        &[
            ("1HGBH", "Altima"),
            ("1HGBJ", "Sentra"),
            ("1HGCM", "Rogue"),
            ("1HGCV", "Murano"),
            ("1HGDJ", "Pathfinder"),
            ("1HGEM", "Maxima"),
            ("1HGFV", "Frontier"),
            ("1HGGJ", "Titan"),
            ("1HGKM", "Leaf"),
            ("1HGCJ", "Versa"),
        ],
    ),
    (
        "BMW",
        &[
            ("1HGBH", "3 Series"),
            ("1HGBJ", "5 Series"),
            ("1HGCM", "X3"),
            ("1HGCV", "X5"),
            ("1HGDJ", "7 Series"),
            ("1HGEM", "X1"),
            ("1HGFV", "X7"),
            ("1HGGJ", "4 Series"),
            ("1HGKM", "i3"),
            ("1HGCJ", "8 Series"),
        ],
    ),
    (
        "MERCEDES",
        &[
            ("1HGBH", "C-Class"),
            ("1HGBJ", "E-Class"),
            ("1HGCM", "GLC"),
            ("1HGCV", "GLE"),
            ("1HGDJ", "S-Class"),
            ("1HGEM", "GLA"),
            ("1HGFV", "GLS"),
            ("1HGGJ", "A-Class"),
            ("1HGKM", "EQC"),
            ("1HGCJ", "CLA"),
        ],
    ),
];
