use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A supported proxy region, plus the `Other` fallback for names nothing
/// recognizes.
///
/// Serializes as the bare code string ("HK", "OTHER") so it can sit directly
/// in node lists and routing configs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    HK,
    TW,
    JP,
    KR,
    US,
    SG,
    GB,
    DE,
    FR,
    NL,
    CA,
    AU,
    PH,
    IN,
    RU,
    TR,
    TH,
    Other,
}

/// Error returned when a string is not a canonical region code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized region code {0:?}")]
pub struct ParseRegionError(String);

impl Region {
    /// Every supported region in rule priority order, excluding `Other`.
    pub const ALL: [Region; 17] = [
        Region::HK,
        Region::TW,
        Region::JP,
        Region::KR,
        Region::US,
        Region::SG,
        Region::GB,
        Region::DE,
        Region::FR,
        Region::NL,
        Region::CA,
        Region::AU,
        Region::PH,
        Region::IN,
        Region::RU,
        Region::TR,
        Region::TH,
    ];

    /// Canonical region code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::HK => "HK",
            Region::TW => "TW",
            Region::JP => "JP",
            Region::KR => "KR",
            Region::US => "US",
            Region::SG => "SG",
            Region::GB => "GB",
            Region::DE => "DE",
            Region::FR => "FR",
            Region::NL => "NL",
            Region::CA => "CA",
            Region::AU => "AU",
            Region::PH => "PH",
            Region::IN => "IN",
            Region::RU => "RU",
            Region::TR => "TR",
            Region::TH => "TH",
            Region::Other => "OTHER",
        }
    }

    /// Flag emoji for display. `Other` has none.
    pub fn flag(&self) -> Option<&'static str> {
        match self {
            Region::HK => Some("🇭🇰"),
            Region::TW => Some("🇹🇼"),
            Region::JP => Some("🇯🇵"),
            Region::KR => Some("🇰🇷"),
            Region::US => Some("🇺🇸"),
            Region::SG => Some("🇸🇬"),
            Region::GB => Some("🇬🇧"),
            Region::DE => Some("🇩🇪"),
            Region::FR => Some("🇫🇷"),
            Region::NL => Some("🇳🇱"),
            Region::CA => Some("🇨🇦"),
            Region::AU => Some("🇦🇺"),
            Region::PH => Some("🇵🇭"),
            Region::IN => Some("🇮🇳"),
            Region::RU => Some("🇷🇺"),
            Region::TR => Some("🇹🇷"),
            Region::TH => Some("🇹🇭"),
            Region::Other => None,
        }
    }

    /// English display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::HK => "Hong Kong",
            Region::TW => "Taiwan",
            Region::JP => "Japan",
            Region::KR => "South Korea",
            Region::US => "United States",
            Region::SG => "Singapore",
            Region::GB => "United Kingdom",
            Region::DE => "Germany",
            Region::FR => "France",
            Region::NL => "Netherlands",
            Region::CA => "Canada",
            Region::AU => "Australia",
            Region::PH => "Philippines",
            Region::IN => "India",
            Region::RU => "Russia",
            Region::TR => "Turkey",
            Region::TH => "Thailand",
            Region::Other => "Other",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = ParseRegionError;

    /// Parses a canonical code, ignoring ASCII case and surrounding
    /// whitespace. Node-name aliases like "UK" or "USA" are the classifier's
    /// business and are rejected here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HK" => Ok(Region::HK),
            "TW" => Ok(Region::TW),
            "JP" => Ok(Region::JP),
            "KR" => Ok(Region::KR),
            "US" => Ok(Region::US),
            "SG" => Ok(Region::SG),
            "GB" => Ok(Region::GB),
            "DE" => Ok(Region::DE),
            "FR" => Ok(Region::FR),
            "NL" => Ok(Region::NL),
            "CA" => Ok(Region::CA),
            "AU" => Ok(Region::AU),
            "PH" => Ok(Region::PH),
            "IN" => Ok(Region::IN),
            "RU" => Ok(Region::RU),
            "TR" => Ok(Region::TR),
            "TH" => Ok(Region::TH),
            "OTHER" => Ok(Region::Other),
            _ => Err(ParseRegionError(s.to_string())),
        }
    }
}
