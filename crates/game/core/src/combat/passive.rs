//! Always-on special-ability passives evaluated after every attack action.

/// Passive behavior attached to a special ability id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Passive {
    /// 20% chance to heal 10% of max hp.
    Spotlight,
    /// Loses 10% of max hp per attack once the battle is past turn 4.
    CaffeineCrash,
    /// 10% chance to flag a gold bonus for the next reward.
    DiamondHands,
}

impl Passive {
    pub const SPOTLIGHT_CHANCE: f64 = 0.2;
    pub const SPOTLIGHT_HEAL_PERCENT: i32 = 10;
    pub const CAFFEINE_TURN_THRESHOLD: u32 = 4;
    pub const CAFFEINE_DAMAGE_PERCENT: i32 = 10;
    pub const DIAMOND_HANDS_CHANCE: f64 = 0.1;

    /// Passive granted by a special ability id, if any.
    pub fn from_ability_id(id: &str) -> Option<Self> {
        match id {
            "social_media_star" => Some(Self::Spotlight),
            "coffee_addict" => Some(Self::CaffeineCrash),
            "crypto_hodler" => Some(Self::DiamondHands),
            _ => None,
        }
    }
}
