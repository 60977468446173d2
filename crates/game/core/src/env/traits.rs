//! Trait-module records and the oracle that serves them.
//!
//! A character is assembled from one module of each dimension:
//!
//! | Dimension        | Contribution                          |
//! |------------------|---------------------------------------|
//! | Race             | additive stat bonus, abilities        |
//! | Class            | multiplicative stat factors, skills   |
//! | Attribute        | multiplicative stat distribution      |
//! | Special ability  | effect text, skills, combat passives  |
//! | Combat style     | in-battle decision strategy           |
//!
//! Catalog implementations live in `arena-content`; the core only depends on
//! [`TraitOracle`].

use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::stats::{StatBlock, StatFactors};

/// Race module: flat bonuses added to the level curve.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaceModule {
    pub id: String,
    pub name: String,
    pub description: String,
    pub stat_bonus: StatBlock,
    pub abilities: Vec<String>,
}

/// Class module: per-stat multipliers and the skill kit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassModule {
    pub id: String,
    pub name: String,
    pub description: String,
    pub stat_multiplier: StatFactors,
    pub skills: Vec<String>,
}

/// Attribute module: how the stat budget is distributed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeModule {
    pub id: String,
    pub name: String,
    pub description: String,
    pub stat_distribution: StatFactors,
}

/// Special ability module.
///
/// The ability's name selects its special-attack branch in battle and its id
/// selects any always-on passive.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialAbilityModule {
    pub id: String,
    pub name: String,
    pub description: String,
    pub effects: Vec<String>,
    pub skills: Vec<String>,
}

/// Combat style identifier. Each style maps to one battle strategy.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CombatStyle {
    /// Targets the opponent with the lowest hp ratio.
    Aggressive,
    #[default]
    Defensive,
    Support,
    /// Targets the opponent with the lowest defense.
    Tactical,
    Berserk,
    /// Occasionally acts at random, sometimes on itself.
    Trolling,
    /// Occasionally skips its turn to bank attack.
    Afk,
    /// Player side only: occasionally buys an attack boost.
    PayToWin,
    /// Occasionally coaches an ally instead of fighting.
    BackseatGaming,
    /// Lashes out when low and can enrage on heavy hits.
    Ragequit,
}

/// Combat style module: flavor text for a [`CombatStyle`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStyleModule {
    pub style: CombatStyle,
    pub name: String,
    pub description: String,
    pub behavior: String,
    pub effects: Vec<String>,
}

/// Word lists used for name synthesis.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NameTables {
    pub hero_prefixes: Vec<String>,
    pub hero_roots: Vec<String>,
    pub hero_suffixes: Vec<String>,
    pub monster_types: Vec<String>,
    pub monster_ranks: Vec<String>,
}

/// Read-only catalog of trait modules.
///
/// Implementations must be immutable after construction; generation treats
/// the slices as fixed for the lifetime of the process.
pub trait TraitOracle: Send + Sync {
    fn races(&self) -> &[RaceModule];

    fn classes(&self) -> &[ClassModule];

    fn attributes(&self) -> &[AttributeModule];

    fn special_abilities(&self) -> &[SpecialAbilityModule];

    fn combat_styles(&self) -> &[CombatStyleModule];

    fn names(&self) -> &NameTables;

    /// Looks up a race by id.
    fn race(&self, id: &str) -> Option<&RaceModule> {
        self.races().iter().find(|m| m.id == id)
    }

    /// Looks up a class by id.
    fn class(&self, id: &str) -> Option<&ClassModule> {
        self.classes().iter().find(|m| m.id == id)
    }

    /// Looks up a special ability by id.
    fn special_ability(&self, id: &str) -> Option<&SpecialAbilityModule> {
        self.special_abilities().iter().find(|m| m.id == id)
    }

    /// Looks up the flavor module of a combat style.
    fn combat_style(&self, style: CombatStyle) -> Option<&CombatStyleModule> {
        self.combat_styles().iter().find(|m| m.style == style)
    }
}
