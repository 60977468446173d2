//! Rarity tiers shared by characters and artifacts.

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Six ordered rarity tiers.
///
/// Unknown rarity names fall back to [`Rarity::Common`] through
/// [`Rarity::parse_or_common`]; deserialization goes through the same path.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", from = "String"))]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

impl Rarity {
    /// All tiers from lowest to highest.
    pub const ALL: [Rarity; 6] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythic,
    ];

    /// Final stat multiplier applied during generation.
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Common => 1.0,
            Self::Uncommon => 1.2,
            Self::Rare => 1.5,
            Self::Epic => 1.8,
            Self::Legendary => 2.3,
            Self::Mythic => 3.0,
        }
    }

    /// Maximum number of skills a freshly generated character keeps.
    pub const fn max_modules(self) -> usize {
        match self {
            Self::Common | Self::Uncommon => 3,
            Self::Rare | Self::Epic => 4,
            Self::Legendary | Self::Mythic => 5,
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Uncommon => "Uncommon",
            Self::Rare => "Rare",
            Self::Epic => "Epic",
            Self::Legendary => "Legendary",
            Self::Mythic => "Mythic",
        }
    }

    /// Display color as a hex string.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Common => "#b0bec5",
            Self::Uncommon => "#81c784",
            Self::Rare => "#64b5f6",
            Self::Epic => "#ba68c8",
            Self::Legendary => "#ffd54f",
            Self::Mythic => "#ff8a65",
        }
    }

    /// Parses a rarity name, falling back to `Common` for unknown input.
    pub fn parse_or_common(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl From<String> for Rarity {
    fn from(name: String) -> Self {
        Self::parse_or_common(&name)
    }
}

/// Samples a tier from a cumulative probability table.
///
/// Tiers are visited in ascending order; the first whose running total
/// reaches `roll` wins. If the table sums below `roll`, `Common` is returned.
pub fn roll_rarity(table: &[(Rarity, f64)], roll: f64) -> Rarity {
    let mut cumulative = 0.0;
    for &(rarity, chance) in table {
        cumulative += chance;
        if roll <= cumulative {
            return rarity;
        }
    }
    Rarity::Common
}
