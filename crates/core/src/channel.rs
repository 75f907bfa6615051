//! Sale channels and item locations.
//!
//! A channel doubles as the venue a sale happened on and as an inventory
//! marker for "currently listed on". The set is fixed; channel sets are
//! persisted as a comma-delimited label string.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// One marketplace or sale medium.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Ebay,
    Subito,
    Vinted,
    Wallapop,
    FbMarketplace,
    /// Direct, in-person handover.
    Hand,
}

impl Platform {
    /// Every platform, in the fixed display order used for glyph strings.
    pub const ALL: [Platform; 6] = [
        Platform::Ebay,
        Platform::Subito,
        Platform::Vinted,
        Platform::Wallapop,
        Platform::FbMarketplace,
        Platform::Hand,
    ];

    /// Stable wire label, used in stored channel strings and platform fields.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Ebay => "eBay",
            Platform::Subito => "Subito",
            Platform::Vinted => "Vinted",
            Platform::Wallapop => "Wallapop",
            Platform::FbMarketplace => "FB Marketplace",
            Platform::Hand => "A Mano",
        }
    }

    /// Display glyph for dashboards.
    pub fn glyph(&self) -> &'static str {
        match self {
            Platform::Ebay => "\u{1F7E1}",
            Platform::Subito => "\u{1F534}",
            Platform::Vinted => "\u{1F7E2}",
            Platform::Wallapop => "\u{26AA}",
            Platform::FbMarketplace => "\u{1F535}",
            Platform::Hand => "\u{1F91D}",
        }
    }
}

impl core::fmt::Display for Platform {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Platform {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Platform::ALL
            .iter()
            .copied()
            .find(|p| p.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| LedgerError::validation(format!("unknown platform '{trimmed}'")))
    }
}

/// Encode a channel set as the stored comma-delimited label string.
pub fn encode_channels(channels: &[Platform]) -> String {
    channels
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(",")
}

/// Decode a stored channel string; empty segments are skipped.
pub fn decode_channels(raw: &str) -> Result<Vec<Platform>, LedgerError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Platform::from_str)
        .collect()
}

/// Where an in-stock item physically sits: the warehouse or with a named
/// holder (a team member keeping it at home).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Location {
    Warehouse,
    Holder(String),
}

impl Location {
    pub const WAREHOUSE_LABEL: &'static str = "warehouse";
}

impl From<String> for Location {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case(Self::WAREHOUSE_LABEL) {
            Location::Warehouse
        } else {
            Location::Holder(value.trim().to_string())
        }
    }
}

impl From<Location> for String {
    fn from(value: Location) -> Self {
        value.to_string()
    }
}

impl core::fmt::Display for Location {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Location::Warehouse => f.write_str(Self::WAREHOUSE_LABEL),
            Location::Holder(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for platform in Platform::ALL {
            assert_eq!(platform.label().parse::<Platform>().unwrap(), platform);
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("ebay".parse::<Platform>().unwrap(), Platform::Ebay);
        assert_eq!("fb marketplace".parse::<Platform>().unwrap(), Platform::FbMarketplace);
    }

    #[test]
    fn unknown_platform_is_rejected() {
        let err = "Etsy".parse::<Platform>().unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
    }

    #[test]
    fn channel_set_round_trips() {
        let channels = vec![Platform::Ebay, Platform::Vinted, Platform::Hand];
        let raw = encode_channels(&channels);
        assert_eq!(raw, "eBay,Vinted,A Mano");
        assert_eq!(decode_channels(&raw).unwrap(), channels);
    }

    #[test]
    fn empty_channel_string_decodes_to_empty_set() {
        assert!(decode_channels("").unwrap().is_empty());
    }

    #[test]
    fn location_parses_warehouse_and_holders() {
        assert_eq!(Location::from("Warehouse".to_string()), Location::Warehouse);
        assert_eq!(
            Location::from("Matteo".to_string()),
            Location::Holder("Matteo".to_string())
        );
    }
}
