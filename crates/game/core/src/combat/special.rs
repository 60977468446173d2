//! Special-ability branches.
//!
//! A unit's special attack is chosen from keywords in its special ability's
//! name, checked in a fixed order: fire, frost, holy, meme. Anything else
//! resolves as an empowered strike.

use crate::stats::{Modifier, StatBlock, StatKind, percent_of};

/// Resolved special-attack branch of a combatant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialKind {
    /// x1.3 damage and a burn.
    Fire,
    /// x0.8 damage and a slow.
    Frost,
    /// Heals for 120% of attack instead of striking.
    Holy,
    /// x0.7 damage and an attack debuff.
    Meme,
    /// x1.5 damage.
    #[default]
    Empowered,
}

const FIRE_KEYWORDS: &[&str] = &["fire", "flame"];
const FROST_KEYWORDS: &[&str] = &["ice", "frost"];
const HOLY_KEYWORDS: &[&str] = &["heal", "holy"];
const MEME_KEYWORDS: &[&str] = &["meme", "social"];

pub const BURN: &str = "Burn";
pub const FROZEN: &str = "Frozen";
pub const MENTAL_DAMAGE: &str = "Mental Damage";

impl SpecialKind {
    /// Classifies a special ability by name (case-insensitive substring match).
    pub fn classify(ability_name: &str) -> Self {
        let name = ability_name.to_lowercase();
        let matches = |keywords: &[&str]| keywords.iter().any(|k| name.contains(k));

        if matches(FIRE_KEYWORDS) {
            Self::Fire
        } else if matches(FROST_KEYWORDS) {
            Self::Frost
        } else if matches(HOLY_KEYWORDS) {
            Self::Holy
        } else if matches(MEME_KEYWORDS) {
            Self::Meme
        } else {
            Self::Empowered
        }
    }

    /// Multiplier on the regular attack damage; `None` for the heal branch.
    pub const fn damage_factor(self) -> Option<f64> {
        match self {
            Self::Fire => Some(1.3),
            Self::Frost => Some(0.8),
            Self::Holy => None,
            Self::Meme => Some(0.7),
            Self::Empowered => Some(1.5),
        }
    }

    /// Debuff the branch leaves on its target, scaled from the target's stats.
    pub fn debuff(self, target: &StatBlock) -> Option<Modifier> {
        match self {
            Self::Fire => {
                Some(Modifier::new(BURN, StatKind::Hp, percent_of(target.hp, 5), 3).over_time())
            }
            Self::Frost => Some(Modifier::new(
                FROZEN,
                StatKind::Spd,
                percent_of(target.spd, 30),
                2,
            )),
            Self::Meme => Some(Modifier::new(
                MENTAL_DAMAGE,
                StatKind::Atk,
                percent_of(target.atk, 20),
                2,
            )),
            Self::Holy | Self::Empowered => None,
        }
    }

    /// Heal amount of the holy branch: `floor(atk * 1.2)`.
    pub fn heal_amount(caster: &StatBlock) -> i32 {
        percent_of(caster.atk, 120)
    }

    /// Damage flavor used in battle log messages.
    pub const fn flavor(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Frost => "frost",
            Self::Holy => "holy",
            Self::Meme => "psychic",
            Self::Empowered => "empowered",
        }
    }
}
