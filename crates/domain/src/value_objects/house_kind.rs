//! House kinds and their default capacities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::Area;

/// The closed set of house variants.
///
/// Variants share every behavior; only the default capacity and the label
/// used as the describe header differ.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HouseKind {
    /// Plain house (capacity 100)
    #[default]
    House,
    /// Single family house (capacity 200)
    SingleFamily,
    /// Town house (capacity 100)
    TownHouse,
    /// Apartment (capacity 80)
    Apartment,
}

impl HouseKind {
    /// All kinds, in declaration order.
    pub const ALL: [HouseKind; 4] = [
        HouseKind::House,
        HouseKind::SingleFamily,
        HouseKind::TownHouse,
        HouseKind::Apartment,
    ];

    /// Capacity used when the caller does not supply one.
    pub fn default_capacity(&self) -> Area {
        match self {
            Self::House => Area::new(100.0),
            Self::SingleFamily => Area::new(200.0),
            Self::TownHouse => Area::new(100.0),
            Self::Apartment => Area::new(80.0),
        }
    }

    /// Header label used when describing a house of this kind.
    pub fn label(&self) -> &'static str {
        match self {
            Self::House => "House",
            Self::SingleFamily => "SingleFamilyHouse",
            Self::TownHouse => "TownHouse",
            Self::Apartment => "Apartment",
        }
    }

    /// Snake case key, matching the serde representation.
    pub fn key(&self) -> &'static str {
        match self {
            Self::House => "house",
            Self::SingleFamily => "single_family",
            Self::TownHouse => "town_house",
            Self::Apartment => "apartment",
        }
    }
}

impl fmt::Display for HouseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HouseKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.key().eq_ignore_ascii_case(wanted) || kind.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| DomainError::parse(format!("Unknown house kind: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacities() {
        assert_eq!(HouseKind::House.default_capacity(), Area::new(100.0));
        assert_eq!(HouseKind::SingleFamily.default_capacity(), Area::new(200.0));
        assert_eq!(HouseKind::TownHouse.default_capacity(), Area::new(100.0));
        assert_eq!(HouseKind::Apartment.default_capacity(), Area::new(80.0));
    }

    #[test]
    fn default_kind_is_plain_house() {
        assert_eq!(HouseKind::default(), HouseKind::House);
    }

    #[test]
    fn parses_keys_and_labels() {
        assert_eq!("town_house".parse::<HouseKind>().unwrap(), HouseKind::TownHouse);
        assert_eq!(
            "SingleFamilyHouse".parse::<HouseKind>().unwrap(),
            HouseKind::SingleFamily
        );
        assert_eq!(" APARTMENT ".parse::<HouseKind>().unwrap(), HouseKind::Apartment);
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = "castle".parse::<HouseKind>().unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
        assert!(err.to_string().contains("castle"));
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&HouseKind::SingleFamily).unwrap();
        assert_eq!(json, "\"single_family\"");
        let kind: HouseKind = serde_json::from_str("\"town_house\"").unwrap();
        assert_eq!(kind, HouseKind::TownHouse);
    }
}
