//! Battle-scoped view of a character.

use std::collections::BTreeMap;

use strum::{AsRefStr, Display};

use crate::combat::{Passive, SpecialKind};
use crate::state::Character;
use crate::stats::{ModifierSet, StatBlock};

/// Cooldown key of the special ability.
pub const SPECIAL_COOLDOWN: &str = "special";

/// Battle side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Team {
    Player,
    Enemy,
}

impl Team {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }
}

/// Address of a combatant inside a battle: side plus roster index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitRef {
    pub team: Team,
    pub index: usize,
}

impl UnitRef {
    pub const fn new(team: Team, index: usize) -> Self {
        Self { team, index }
    }

    pub const fn player(index: usize) -> Self {
        Self::new(Team::Player, index)
    }

    pub const fn enemy(index: usize) -> Self {
        Self::new(Team::Enemy, index)
    }
}

/// A character taking part in a battle.
///
/// `current_hp` always stays within `[0, stats.hp]`; mutate it only through
/// [`Combatant::take_damage`] and [`Combatant::heal`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub character: Character,
    current_hp: i32,
    pub team: Team,
    pub buffs: ModifierSet,
    pub debuffs: ModifierSet,
    pub cooldowns: BTreeMap<String, u32>,
    pub action_timer: i32,
    pub special: SpecialKind,
    pub passive: Option<Passive>,
}

impl Combatant {
    /// Enters a character into battle at full health.
    pub fn new(character: Character, team: Team) -> Self {
        let special = SpecialKind::classify(&character.special_ability.name);
        let passive = Passive::from_ability_id(&character.special_ability.id);
        Self {
            current_hp: character.stats.hp.max(0),
            character,
            team,
            buffs: ModifierSet::new(),
            debuffs: ModifierSet::new(),
            cooldowns: BTreeMap::new(),
            action_timer: 0,
            special,
            passive,
        }
    }

    pub fn name(&self) -> &str {
        &self.character.name
    }

    pub fn stats(&self) -> &StatBlock {
        &self.character.stats
    }

    pub fn max_hp(&self) -> i32 {
        self.character.stats.hp.max(0)
    }

    pub fn current_hp(&self) -> i32 {
        self.current_hp
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Current hp as a fraction of max hp (0 when max hp is 0).
    pub fn hp_ratio(&self) -> f64 {
        let max = self.max_hp();
        if max == 0 {
            return 0.0;
        }
        f64::from(self.current_hp) / f64::from(max)
    }

    /// Subtracts damage, clamped at zero. Returns the hp actually lost.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let before = self.current_hp;
        self.current_hp = self.current_hp.saturating_sub(amount.max(0)).max(0);
        before - self.current_hp
    }

    /// Adds health, clamped at max hp. Returns the hp actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.current_hp;
        self.current_hp = self.current_hp.saturating_add(amount.max(0)).min(self.max_hp());
        self.current_hp - before
    }

    /// True if the unit knows at least one skill.
    pub fn has_special(&self) -> bool {
        !self.character.skills.is_empty()
    }

    pub fn cooldown(&self, name: &str) -> u32 {
        self.cooldowns.get(name).copied().unwrap_or(0)
    }

    pub fn set_cooldown(&mut self, name: &str, turns: u32) {
        self.cooldowns.insert(name.to_string(), turns);
    }

    /// Decrements every running cooldown, floored at zero.
    pub fn tick_cooldowns(&mut self) {
        for remaining in self.cooldowns.values_mut() {
            *remaining = remaining.saturating_sub(1);
        }
    }
}
