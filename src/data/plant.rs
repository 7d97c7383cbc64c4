//! Assembly-plant codes (VIS position 11) per manufacturer key. Fixed data
//! carried over from the published tables; manufacturers outside this set
//! simply have no plant information.

/// Manufacturer key -> (plant code -> plant name). Keys are the normalized
/// short names produced by [`crate::data::normalize::manufacturer_key`].
pub const PLANT_CODES: &[(&str, &[(char, &str)])] = &[
    (
        "TOYOTA",
        &[
            ('A', "Takaoka"),
            ('B', "Tsutsumi"),
            ('C', "Tahara"),
            ('D', "Motomachi"),
            ('E', "Kanto Auto Works"),
            ('F', "Fujimatsu"),
            ('G', "Tahara"),
            ('H', "Hino"),
            ('J', "Takaoka"),
            ('K', "Tsutsumi"),
            ('L', "Tahara"),
            ('M', "Motomachi"),
            ('N', "Kanto Auto Works"),
            ('P', "Fujimatsu"),
            ('R', "Tahara"),
            ('S', "Tsutsumi"),
            ('T', "Takaoka"),
            ('U', "Motomachi"),
            ('V', "Kanto Auto Works"),
            ('W', "Fujimatsu"),
            ('X', "Tahara"),
            ('Y', "Tsutsumi"),
            ('Z', "Takaoka"),
        ],
    ),
    (
        "HONDA",
        &[
            ('A', "Suzuka"),
            ('B', "Sayama"),
            ('C', "Yorii"),
            ('D', "Yokkaichi"),
            ('E', "Kumamoto"),
            ('F', "Saitama"),
            ('G', "Tochigi"),
            ('H', "Honda of America"),
            ('J', "Honda of Canada"),
            ('K', "Honda of UK"),
            ('L', "Honda of Brazil"),
            ('M', "Honda of Mexico"),
            ('N', "Honda of Thailand"),
            ('P', "Honda of India"),
            ('R', "Honda of Turkey"),
            ('S', "Honda of China"),
            ('T', "Honda of Indonesia"),
            ('U', "Honda of Malaysia"),
            ('V', "Honda of Vietnam"),
            ('W', "Honda of Pakistan"),
            ('X', "Honda of Argentina"),
            ('Y', "Honda of South Africa"),
            ('Z', "Honda of Australia"),
        ],
    ),
    (
        "NISSAN",
        &[
            ('A', "Oppama"),
            ('B', "Tochigi"),
            ('C', "Nissan Shatai"),
            ('D', "Kyushu"),
            ('E', "Smyrna"),
            ('F', "Aguascalientes"),
            ('G', "Sunderland"),
            ('H', "Rosslyn"),
            ('J', "Barcelona"),
            ('K', "Avila"),
            ('L', "Canton"),
            ('M', "Decherd"),
            ('N', "Nissan Motor"),
            ('P', "Nissan Diesel"),
            ('R', "Nissan Shatai"),
            ('S', "Nissan Motor"),
            ('T', "Nissan Diesel"),
            ('U', "Nissan Motor"),
            ('V', "Nissan Diesel"),
            ('W', "Nissan Motor"),
            ('X', "Nissan Diesel"),
            ('Y', "Nissan Motor"),
            ('Z', "Nissan Diesel"),
        ],
    ),
    (
        "BMW",
        &[
            ('A', "Munich"),
            ('B', "Dingolfing"),
            ('C', "Regensburg"),
            ('D', "Spartanburg"),
            ('E', "Leipzig"),
            ('F', "Oxford"),
            ('G', "Rosslyn"),
            ('H', "Chennai"),
            ('J', "Shenyang"),
            ('K', "Rayong"),
            ('L', "Jakarta"),
            ('M', "Kulim"),
            ('N', "Cairo"),
            ('P', "Pretoria"),
            ('R', "Bangkok"),
            ('S', "Chennai"),
            ('T', "Shenyang"),
            ('U', "Rayong"),
            ('V', "Jakarta"),
            ('W', "Kulim"),
            ('X', "Cairo"),
            ('Y', "Pretoria"),
            ('Z', "Bangkok"),
        ],
    ),
    (
        "MERCEDES",
        &[
            ('A', "Sindelfingen"),
            ('B', "Bremen"),
            ('C', "Rastatt"),
            ('D', "Tuscaloosa"),
            ('E', "East London"),
            ('F', "Pune"),
            ('G', "Beijing"),
            ('H', "Bangkok"),
            ('J', "Jakarta"),
            ('K', "Kuala Lumpur"),
            ('L', "Ho Chi Minh"),
            ('M', "Cairo"),
            ('N', "Istanbul"),
            ('P', "Buenos Aires"),
            ('R', "Sao Paulo"),
            ('S', "Mexico City"),
            ('T', "Bangkok"),
            ('U', "Jakarta"),
            ('V', "Kuala Lumpur"),
            ('W', "Ho Chi Minh"),
            ('X', "Cairo"),
            ('Y', "Istanbul"),
            ('Z', "Buenos Aires"),
        ],
    ),
    (
        "AUDI",
        &[
            ('D', "Ingolstadt"),
            ('N', "Neckarsulm"),
            ('V', "Bratislava"),
            ('Y', "Gyor"),
            ('1', "Brussels"),
        ],
    ),
    (
        "VOLKSWAGEN",
        &[
            ('W', "Wolfsburg"),
            ('M', "Mosel"),
            ('H', "Hannover"),
            ('P', "Poznan"),
            ('K', "Kaluga"),
            ('C', "Chattanooga"),
            ('3', "Puebla"),
            ('4', "Curitiba"),
            ('5', "Palmela"),
            ('6', "Uitenhage"),
            ('7', "Emden"),
            ('8', "Dresden"),
            ('9', "Osnabruck"),
        ],
    ),
];
