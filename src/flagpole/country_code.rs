use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::flagpole::flagpole_error::FlagpoleError;

/// ISO-3166-1 country codes. Variant names are the alpha-2 codes, so the
/// serde derives read and write them as plain alpha-2 strings.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum CountryCode {
    AD, AE, AF, AG, AI, AL, AM, AO, AQ, AR, AS, AT, AU,
    AW, AX, AZ, BA, BB, BD, BE, BF, BG, BH, BI, BJ, BL,
    BM, BN, BO, BQ, BR, BS, BT, BV, BW, BY, BZ, CA, CC,
    CD, CF, CG, CH, CI, CK, CL, CM, CN, CO, CR, CU, CV,
    CW, CX, CY, CZ, DE, DJ, DK, DM, DO, DZ, EC, EE, EG,
    EH, ER, ES, ET, FI, FJ, FK, FM, FO, FR, GA, GB, GD,
    GE, GF, GG, GH, GI, GL, GM, GN, GP, GQ, GR, GS, GT,
    GU, GW, GY, HK, HM, HN, HR, HT, HU, ID, IE, IL, IM,
    IN, IO, IQ, IR, IS, IT, JE, JM, JO, JP, KE, KG, KH,
    KI, KM, KN, KP, KR, KW, KY, KZ, LA, LB, LC, LI, LK,
    LR, LS, LT, LU, LV, LY, MA, MC, MD, ME, MF, MG, MH,
    MK, ML, MM, MN, MO, MP, MQ, MR, MS, MT, MU, MV, MW,
    MX, MY, MZ, NA, NC, NE, NF, NG, NI, NL, NO, NP, NR,
    NU, NZ, OM, PA, PE, PF, PG, PH, PK, PL, PM, PN, PR,
    PS, PT, PW, PY, QA, RE, RO, RS, RU, RW, SA, SB, SC,
    SD, SE, SG, SH, SI, SJ, SK, SL, SM, SN, SO, SR, SS,
    ST, SV, SX, SY, SZ, TC, TD, TF, TG, TH, TJ, TK, TL,
    TM, TN, TO, TR, TT, TV, TW, TZ, UA, UG, UM, US, UY,
    UZ, VA, VC, VE, VG, VI, VN, VU, WF, WS, YE, YT, ZA,
    ZM, ZW,
}

/// One row per assigned code, in alpha-2 order. The position of each row
/// matches its variant's discriminant, which is what the accessors rely on.
static ENTRIES: [(CountryCode, &str, &str, &str); 249] = [
    (CountryCode::AD, "AD", "AND", "Andorra"),
    (CountryCode::AE, "AE", "ARE", "United Arab Emirates"),
    (CountryCode::AF, "AF", "AFG", "Afghanistan"),
    (CountryCode::AG, "AG", "ATG", "Antigua and Barbuda"),
    (CountryCode::AI, "AI", "AIA", "Anguilla"),
    (CountryCode::AL, "AL", "ALB", "Albania"),
    (CountryCode::AM, "AM", "ARM", "Armenia"),
    (CountryCode::AO, "AO", "AGO", "Angola"),
    (CountryCode::AQ, "AQ", "ATA", "Antarctica"),
    (CountryCode::AR, "AR", "ARG", "Argentina"),
    (CountryCode::AS, "AS", "ASM", "American Samoa"),
    (CountryCode::AT, "AT", "AUT", "Austria"),
    (CountryCode::AU, "AU", "AUS", "Australia"),
    (CountryCode::AW, "AW", "ABW", "Aruba"),
    (CountryCode::AX, "AX", "ALA", "Åland Islands"),
    (CountryCode::AZ, "AZ", "AZE", "Azerbaijan"),
    (CountryCode::BA, "BA", "BIH", "Bosnia and Herzegovina"),
    (CountryCode::BB, "BB", "BRB", "Barbados"),
    (CountryCode::BD, "BD", "BGD", "Bangladesh"),
    (CountryCode::BE, "BE", "BEL", "Belgium"),
    (CountryCode::BF, "BF", "BFA", "Burkina Faso"),
    (CountryCode::BG, "BG", "BGR", "Bulgaria"),
    (CountryCode::BH, "BH", "BHR", "Bahrain"),
    (CountryCode::BI, "BI", "BDI", "Burundi"),
    (CountryCode::BJ, "BJ", "BEN", "Benin"),
    (CountryCode::BL, "BL", "BLM", "Saint Barthélemy"),
    (CountryCode::BM, "BM", "BMU", "Bermuda"),
    (CountryCode::BN, "BN", "BRN", "Brunei Darussalam"),
    (CountryCode::BO, "BO", "BOL", "Bolivia, Plurinational State of"),
    (CountryCode::BQ, "BQ", "BES", "Bonaire, Sint Eustatius and Saba"),
    (CountryCode::BR, "BR", "BRA", "Brazil"),
    (CountryCode::BS, "BS", "BHS", "Bahamas"),
    (CountryCode::BT, "BT", "BTN", "Bhutan"),
    (CountryCode::BV, "BV", "BVT", "Bouvet Island"),
    (CountryCode::BW, "BW", "BWA", "Botswana"),
    (CountryCode::BY, "BY", "BLR", "Belarus"),
    (CountryCode::BZ, "BZ", "BLZ", "Belize"),
    (CountryCode::CA, "CA", "CAN", "Canada"),
    (CountryCode::CC, "CC", "CCK", "Cocos (Keeling) Islands"),
    (CountryCode::CD, "CD", "COD", "Congo, The Democratic Republic of the"),
    (CountryCode::CF, "CF", "CAF", "Central African Republic"),
    (CountryCode::CG, "CG", "COG", "Congo"),
    (CountryCode::CH, "CH", "CHE", "Switzerland"),
    (CountryCode::CI, "CI", "CIV", "Côte d'Ivoire"),
    (CountryCode::CK, "CK", "COK", "Cook Islands"),
    (CountryCode::CL, "CL", "CHL", "Chile"),
    (CountryCode::CM, "CM", "CMR", "Cameroon"),
    (CountryCode::CN, "CN", "CHN", "China"),
    (CountryCode::CO, "CO", "COL", "Colombia"),
    (CountryCode::CR, "CR", "CRI", "Costa Rica"),
    (CountryCode::CU, "CU", "CUB", "Cuba"),
    (CountryCode::CV, "CV", "CPV", "Cabo Verde"),
    (CountryCode::CW, "CW", "CUW", "Curaçao"),
    (CountryCode::CX, "CX", "CXR", "Christmas Island"),
    (CountryCode::CY, "CY", "CYP", "Cyprus"),
    (CountryCode::CZ, "CZ", "CZE", "Czechia"),
    (CountryCode::DE, "DE", "DEU", "Germany"),
    (CountryCode::DJ, "DJ", "DJI", "Djibouti"),
    (CountryCode::DK, "DK", "DNK", "Denmark"),
    (CountryCode::DM, "DM", "DMA", "Dominica"),
    (CountryCode::DO, "DO", "DOM", "Dominican Republic"),
    (CountryCode::DZ, "DZ", "DZA", "Algeria"),
    (CountryCode::EC, "EC", "ECU", "Ecuador"),
    (CountryCode::EE, "EE", "EST", "Estonia"),
    (CountryCode::EG, "EG", "EGY", "Egypt"),
    (CountryCode::EH, "EH", "ESH", "Western Sahara"),
    (CountryCode::ER, "ER", "ERI", "Eritrea"),
    (CountryCode::ES, "ES", "ESP", "Spain"),
    (CountryCode::ET, "ET", "ETH", "Ethiopia"),
    (CountryCode::FI, "FI", "FIN", "Finland"),
    (CountryCode::FJ, "FJ", "FJI", "Fiji"),
    (CountryCode::FK, "FK", "FLK", "Falkland Islands (Malvinas)"),
    (CountryCode::FM, "FM", "FSM", "Micronesia, Federated States of"),
    (CountryCode::FO, "FO", "FRO", "Faroe Islands"),
    (CountryCode::FR, "FR", "FRA", "France"),
    (CountryCode::GA, "GA", "GAB", "Gabon"),
    (CountryCode::GB, "GB", "GBR", "United Kingdom"),
    (CountryCode::GD, "GD", "GRD", "Grenada"),
    (CountryCode::GE, "GE", "GEO", "Georgia"),
    (CountryCode::GF, "GF", "GUF", "French Guiana"),
    (CountryCode::GG, "GG", "GGY", "Guernsey"),
    (CountryCode::GH, "GH", "GHA", "Ghana"),
    (CountryCode::GI, "GI", "GIB", "Gibraltar"),
    (CountryCode::GL, "GL", "GRL", "Greenland"),
    (CountryCode::GM, "GM", "GMB", "Gambia"),
    (CountryCode::GN, "GN", "GIN", "Guinea"),
    (CountryCode::GP, "GP", "GLP", "Guadeloupe"),
    (CountryCode::GQ, "GQ", "GNQ", "Equatorial Guinea"),
    (CountryCode::GR, "GR", "GRC", "Greece"),
    (CountryCode::GS, "GS", "SGS", "South Georgia and the South Sandwich Islands"),
    (CountryCode::GT, "GT", "GTM", "Guatemala"),
    (CountryCode::GU, "GU", "GUM", "Guam"),
    (CountryCode::GW, "GW", "GNB", "Guinea-Bissau"),
    (CountryCode::GY, "GY", "GUY", "Guyana"),
    (CountryCode::HK, "HK", "HKG", "Hong Kong"),
    (CountryCode::HM, "HM", "HMD", "Heard Island and McDonald Islands"),
    (CountryCode::HN, "HN", "HND", "Honduras"),
    (CountryCode::HR, "HR", "HRV", "Croatia"),
    (CountryCode::HT, "HT", "HTI", "Haiti"),
    (CountryCode::HU, "HU", "HUN", "Hungary"),
    (CountryCode::ID, "ID", "IDN", "Indonesia"),
    (CountryCode::IE, "IE", "IRL", "Ireland"),
    (CountryCode::IL, "IL", "ISR", "Israel"),
    (CountryCode::IM, "IM", "IMN", "Isle of Man"),
    (CountryCode::IN, "IN", "IND", "India"),
    (CountryCode::IO, "IO", "IOT", "British Indian Ocean Territory"),
    (CountryCode::IQ, "IQ", "IRQ", "Iraq"),
    (CountryCode::IR, "IR", "IRN", "Iran, Islamic Republic of"),
    (CountryCode::IS, "IS", "ISL", "Iceland"),
    (CountryCode::IT, "IT", "ITA", "Italy"),
    (CountryCode::JE, "JE", "JEY", "Jersey"),
    (CountryCode::JM, "JM", "JAM", "Jamaica"),
    (CountryCode::JO, "JO", "JOR", "Jordan"),
    (CountryCode::JP, "JP", "JPN", "Japan"),
    (CountryCode::KE, "KE", "KEN", "Kenya"),
    (CountryCode::KG, "KG", "KGZ", "Kyrgyzstan"),
    (CountryCode::KH, "KH", "KHM", "Cambodia"),
    (CountryCode::KI, "KI", "KIR", "Kiribati"),
    (CountryCode::KM, "KM", "COM", "Comoros"),
    (CountryCode::KN, "KN", "KNA", "Saint Kitts and Nevis"),
    (CountryCode::KP, "KP", "PRK", "Korea, Democratic People's Republic of"),
    (CountryCode::KR, "KR", "KOR", "Korea, Republic of"),
    (CountryCode::KW, "KW", "KWT", "Kuwait"),
    (CountryCode::KY, "KY", "CYM", "Cayman Islands"),
    (CountryCode::KZ, "KZ", "KAZ", "Kazakhstan"),
    (CountryCode::LA, "LA", "LAO", "Lao People's Democratic Republic"),
    (CountryCode::LB, "LB", "LBN", "Lebanon"),
    (CountryCode::LC, "LC", "LCA", "Saint Lucia"),
    (CountryCode::LI, "LI", "LIE", "Liechtenstein"),
    (CountryCode::LK, "LK", "LKA", "Sri Lanka"),
    (CountryCode::LR, "LR", "LBR", "Liberia"),
    (CountryCode::LS, "LS", "LSO", "Lesotho"),
    (CountryCode::LT, "LT", "LTU", "Lithuania"),
    (CountryCode::LU, "LU", "LUX", "Luxembourg"),
    (CountryCode::LV, "LV", "LVA", "Latvia"),
    (CountryCode::LY, "LY", "LBY", "Libya"),
    (CountryCode::MA, "MA", "MAR", "Morocco"),
    (CountryCode::MC, "MC", "MCO", "Monaco"),
    (CountryCode::MD, "MD", "MDA", "Moldova, Republic of"),
    (CountryCode::ME, "ME", "MNE", "Montenegro"),
    (CountryCode::MF, "MF", "MAF", "Saint Martin (French part)"),
    (CountryCode::MG, "MG", "MDG", "Madagascar"),
    (CountryCode::MH, "MH", "MHL", "Marshall Islands"),
    (CountryCode::MK, "MK", "MKD", "North Macedonia"),
    (CountryCode::ML, "ML", "MLI", "Mali"),
    (CountryCode::MM, "MM", "MMR", "Myanmar"),
    (CountryCode::MN, "MN", "MNG", "Mongolia"),
    (CountryCode::MO, "MO", "MAC", "Macao"),
    (CountryCode::MP, "MP", "MNP", "Northern Mariana Islands"),
    (CountryCode::MQ, "MQ", "MTQ", "Martinique"),
    (CountryCode::MR, "MR", "MRT", "Mauritania"),
    (CountryCode::MS, "MS", "MSR", "Montserrat"),
    (CountryCode::MT, "MT", "MLT", "Malta"),
    (CountryCode::MU, "MU", "MUS", "Mauritius"),
    (CountryCode::MV, "MV", "MDV", "Maldives"),
    (CountryCode::MW, "MW", "MWI", "Malawi"),
    (CountryCode::MX, "MX", "MEX", "Mexico"),
    (CountryCode::MY, "MY", "MYS", "Malaysia"),
    (CountryCode::MZ, "MZ", "MOZ", "Mozambique"),
    (CountryCode::NA, "NA", "NAM", "Namibia"),
    (CountryCode::NC, "NC", "NCL", "New Caledonia"),
    (CountryCode::NE, "NE", "NER", "Niger"),
    (CountryCode::NF, "NF", "NFK", "Norfolk Island"),
    (CountryCode::NG, "NG", "NGA", "Nigeria"),
    (CountryCode::NI, "NI", "NIC", "Nicaragua"),
    (CountryCode::NL, "NL", "NLD", "Netherlands"),
    (CountryCode::NO, "NO", "NOR", "Norway"),
    (CountryCode::NP, "NP", "NPL", "Nepal"),
    (CountryCode::NR, "NR", "NRU", "Nauru"),
    (CountryCode::NU, "NU", "NIU", "Niue"),
    (CountryCode::NZ, "NZ", "NZL", "New Zealand"),
    (CountryCode::OM, "OM", "OMN", "Oman"),
    (CountryCode::PA, "PA", "PAN", "Panama"),
    (CountryCode::PE, "PE", "PER", "Peru"),
    (CountryCode::PF, "PF", "PYF", "French Polynesia"),
    (CountryCode::PG, "PG", "PNG", "Papua New Guinea"),
    (CountryCode::PH, "PH", "PHL", "Philippines"),
    (CountryCode::PK, "PK", "PAK", "Pakistan"),
    (CountryCode::PL, "PL", "POL", "Poland"),
    (CountryCode::PM, "PM", "SPM", "Saint Pierre and Miquelon"),
    (CountryCode::PN, "PN", "PCN", "Pitcairn"),
    (CountryCode::PR, "PR", "PRI", "Puerto Rico"),
    (CountryCode::PS, "PS", "PSE", "Palestine, State of"),
    (CountryCode::PT, "PT", "PRT", "Portugal"),
    (CountryCode::PW, "PW", "PLW", "Palau"),
    (CountryCode::PY, "PY", "PRY", "Paraguay"),
    (CountryCode::QA, "QA", "QAT", "Qatar"),
    (CountryCode::RE, "RE", "REU", "Réunion"),
    (CountryCode::RO, "RO", "ROU", "Romania"),
    (CountryCode::RS, "RS", "SRB", "Serbia"),
    (CountryCode::RU, "RU", "RUS", "Russian Federation"),
    (CountryCode::RW, "RW", "RWA", "Rwanda"),
    (CountryCode::SA, "SA", "SAU", "Saudi Arabia"),
    (CountryCode::SB, "SB", "SLB", "Solomon Islands"),
    (CountryCode::SC, "SC", "SYC", "Seychelles"),
    (CountryCode::SD, "SD", "SDN", "Sudan"),
    (CountryCode::SE, "SE", "SWE", "Sweden"),
    (CountryCode::SG, "SG", "SGP", "Singapore"),
    (CountryCode::SH, "SH", "SHN", "Saint Helena, Ascension and Tristan da Cunha"),
    (CountryCode::SI, "SI", "SVN", "Slovenia"),
    (CountryCode::SJ, "SJ", "SJM", "Svalbard and Jan Mayen"),
    (CountryCode::SK, "SK", "SVK", "Slovakia"),
    (CountryCode::SL, "SL", "SLE", "Sierra Leone"),
    (CountryCode::SM, "SM", "SMR", "San Marino"),
    (CountryCode::SN, "SN", "SEN", "Senegal"),
    (CountryCode::SO, "SO", "SOM", "Somalia"),
    (CountryCode::SR, "SR", "SUR", "Suriname"),
    (CountryCode::SS, "SS", "SSD", "South Sudan"),
    (CountryCode::ST, "ST", "STP", "Sao Tome and Principe"),
    (CountryCode::SV, "SV", "SLV", "El Salvador"),
    (CountryCode::SX, "SX", "SXM", "Sint Maarten (Dutch part)"),
    (CountryCode::SY, "SY", "SYR", "Syrian Arab Republic"),
    (CountryCode::SZ, "SZ", "SWZ", "Eswatini"),
    (CountryCode::TC, "TC", "TCA", "Turks and Caicos Islands"),
    (CountryCode::TD, "TD", "TCD", "Chad"),
    (CountryCode::TF, "TF", "ATF", "French Southern Territories"),
    (CountryCode::TG, "TG", "TGO", "Togo"),
    (CountryCode::TH, "TH", "THA", "Thailand"),
    (CountryCode::TJ, "TJ", "TJK", "Tajikistan"),
    (CountryCode::TK, "TK", "TKL", "Tokelau"),
    (CountryCode::TL, "TL", "TLS", "Timor-Leste"),
    (CountryCode::TM, "TM", "TKM", "Turkmenistan"),
    (CountryCode::TN, "TN", "TUN", "Tunisia"),
    (CountryCode::TO, "TO", "TON", "Tonga"),
    (CountryCode::TR, "TR", "TUR", "Türkiye"),
    (CountryCode::TT, "TT", "TTO", "Trinidad and Tobago"),
    (CountryCode::TV, "TV", "TUV", "Tuvalu"),
    (CountryCode::TW, "TW", "TWN", "Taiwan, Province of China"),
    (CountryCode::TZ, "TZ", "TZA", "Tanzania, United Republic of"),
    (CountryCode::UA, "UA", "UKR", "Ukraine"),
    (CountryCode::UG, "UG", "UGA", "Uganda"),
    (CountryCode::UM, "UM", "UMI", "United States Minor Outlying Islands"),
    (CountryCode::US, "US", "USA", "United States"),
    (CountryCode::UY, "UY", "URY", "Uruguay"),
    (CountryCode::UZ, "UZ", "UZB", "Uzbekistan"),
    (CountryCode::VA, "VA", "VAT", "Holy See (Vatican City State)"),
    (CountryCode::VC, "VC", "VCT", "Saint Vincent and the Grenadines"),
    (CountryCode::VE, "VE", "VEN", "Venezuela, Bolivarian Republic of"),
    (CountryCode::VG, "VG", "VGB", "Virgin Islands, British"),
    (CountryCode::VI, "VI", "VIR", "Virgin Islands, U.S."),
    (CountryCode::VN, "VN", "VNM", "Viet Nam"),
    (CountryCode::VU, "VU", "VUT", "Vanuatu"),
    (CountryCode::WF, "WF", "WLF", "Wallis and Futuna"),
    (CountryCode::WS, "WS", "WSM", "Samoa"),
    (CountryCode::YE, "YE", "YEM", "Yemen"),
    (CountryCode::YT, "YT", "MYT", "Mayotte"),
    (CountryCode::ZA, "ZA", "ZAF", "South Africa"),
    (CountryCode::ZM, "ZM", "ZMB", "Zambia"),
    (CountryCode::ZW, "ZW", "ZWE", "Zimbabwe"),
];

lazy_static! {
    static ref CODE_INDEX: HashMap<&'static str, CountryCode> = {
        let mut index = HashMap::new();
        for (code, alpha2, alpha3, _) in ENTRIES.iter() {
            index.insert(*alpha2, *code);
            index.insert(*alpha3, *code);
        }
        index
    };
}

impl CountryCode {
    pub fn alpha2(&self) -> &'static str {
        ENTRIES[*self as usize].1
    }

    pub fn alpha3(&self) -> &'static str {
        ENTRIES[*self as usize].2
    }

    /// The ISO short English name, e.g. "United States".
    pub fn name(&self) -> &'static str {
        ENTRIES[*self as usize].3
    }

    /// Looks up a country by its alpha-2 or alpha-3 code, ignoring case.
    pub fn from_code(code: &str) -> Option<CountryCode> {
        CODE_INDEX.get(code.to_uppercase().as_str()).copied()
    }

    /// Returns every country whose full name matches the given regex, in
    /// alpha-2 order. A pattern that fails to compile matches nothing.
    pub fn find_by_name(pattern: &str) -> Vec<CountryCode> {
        let re = match Regex::new(pattern) {
            Ok(re) => re,
            Err(_) => return vec![],
        };

        ENTRIES
            .iter()
            .filter(|(_, _, _, name)| re.is_match(name))
            .map(|(code, _, _, _)| *code)
            .collect()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.alpha2())
    }
}

impl FromStr for CountryCode {
    type Err = FlagpoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| FlagpoleError::InvalidCountryCode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_alpha2_and_alpha3_codes() {
        assert_eq!(CountryCode::from_code("US"), Some(CountryCode::US));
        assert_eq!(CountryCode::from_code("USA"), Some(CountryCode::US));
        assert_eq!(CountryCode::from_code("GB"), Some(CountryCode::GB));
        assert_eq!(CountryCode::from_code("GBR"), Some(CountryCode::GB));
        assert_eq!(CountryCode::from_code("XX"), None);
    }

    #[test]
    fn code_lookup_ignores_case() {
        assert_eq!(CountryCode::from_code("us"), Some(CountryCode::US));
        assert_eq!(CountryCode::from_code("nzl"), Some(CountryCode::NZ));
    }

    #[test]
    fn accessors_agree_with_the_table() {
        assert_eq!(CountryCode::US.alpha2(), "US");
        assert_eq!(CountryCode::US.alpha3(), "USA");
        assert_eq!(CountryCode::US.name(), "United States");
        assert_eq!(CountryCode::DE.name(), "Germany");
    }

    #[test]
    fn every_entry_round_trips_through_from_code() {
        for (code, alpha2, alpha3, _) in ENTRIES.iter() {
            assert_eq!(CountryCode::from_code(alpha2), Some(*code));
            assert_eq!(CountryCode::from_code(alpha3), Some(*code));
        }
    }

    #[test]
    fn find_by_name_returns_matches_in_table_order() {
        let matches = CountryCode::find_by_name("^United.*");
        assert_eq!(
            matches,
            vec![
                CountryCode::AE,
                CountryCode::GB,
                CountryCode::UM,
                CountryCode::US
            ]
        );
    }

    #[test]
    fn find_by_name_with_a_bad_pattern_matches_nothing() {
        assert!(CountryCode::find_by_name("^(United.*").is_empty());
    }

    #[test]
    fn from_str_rejects_names() {
        assert_eq!("fr".parse::<CountryCode>(), Ok(CountryCode::FR));
        assert!("France".parse::<CountryCode>().is_err());
    }

    #[test]
    fn serializes_as_the_alpha2_code() {
        assert_eq!(serde_json::to_string(&CountryCode::JP).unwrap(), "\"JP\"");
        let parsed: CountryCode = serde_json::from_str("\"JP\"").unwrap();
        assert_eq!(parsed, CountryCode::JP);
    }
}
