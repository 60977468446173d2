//! Characters: generated heroes and enemies.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::env::CombatStyle;
use crate::rarity::Rarity;
use crate::stats::{StatBlock, derive_power};

/// Bounded, ordered skill list.
pub type Skills = ArrayVec<String, { BattleConfig::MAX_SKILLS }>;

/// Minimum purchase price of a hero.
pub const MIN_HERO_COST: u32 = 5;

/// Reference to the trait module a character was built from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraitRef {
    pub id: String,
    pub name: String,
}

impl TraitRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A hero or an enemy.
///
/// `power` and `cost` are derived from `stats`; call
/// [`Character::refresh_derived`] after changing stats.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub name: String,
    pub level: u32,
    pub rarity: Rarity,
    pub race: TraitRef,
    pub class: TraitRef,
    pub attribute: TraitRef,
    pub special_ability: TraitRef,
    pub combat_style: CombatStyle,
    pub combat_style_name: String,
    pub description: String,
    pub stats: StatBlock,
    pub skills: Skills,
    /// Flavor lines from the special ability and combat style.
    pub effects: Vec<String>,
    /// One-sentence summary of the module combination.
    pub unique_traits: String,
    pub power: u32,
    /// Purchase price; zero for enemies.
    pub cost: u32,
    pub is_hero: bool,
}

impl Character {
    /// Creates a bare character with the given stats and no trait modules.
    ///
    /// Generated characters come from
    /// [`generate_character`](crate::generation::generate_character); this
    /// constructor serves hand-built rosters.
    pub fn new(name: impl Into<String>, level: u32, stats: StatBlock, is_hero: bool) -> Self {
        let mut character = Self {
            name: name.into(),
            level: level.clamp(1, BattleConfig::MAX_LEVEL),
            rarity: Rarity::Common,
            race: TraitRef::default(),
            class: TraitRef::default(),
            attribute: TraitRef::default(),
            special_ability: TraitRef::default(),
            combat_style: CombatStyle::default(),
            combat_style_name: String::new(),
            description: String::new(),
            stats,
            skills: Skills::new(),
            effects: Vec::new(),
            unique_traits: String::new(),
            power: 0,
            cost: 0,
            is_hero,
        };
        character.refresh_derived();
        character
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    #[must_use]
    pub fn with_combat_style(mut self, style: CombatStyle) -> Self {
        self.combat_style = style;
        self.combat_style_name = style.to_string();
        self
    }

    #[must_use]
    pub fn with_special_ability(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.special_ability = TraitRef::new(id, name);
        self
    }

    #[must_use]
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for skill in skills {
            self.learn_skill(skill);
        }
        self
    }

    /// Adds a skill unless already known. When the list is full the oldest
    /// skill is evicted. Returns true if the skill was added.
    pub fn learn_skill(&mut self, skill: impl Into<String>) -> bool {
        let skill = skill.into();
        if self.skills.contains(&skill) {
            return false;
        }
        if self.skills.is_full() {
            self.skills.remove(0);
        }
        self.skills.push(skill);
        true
    }

    /// Recomputes power and cost from the current stats.
    pub fn refresh_derived(&mut self) {
        self.power = derive_power(&self.stats);
        self.cost = hero_cost(self.power, self.is_hero);
    }

    pub fn rarity_name(&self) -> &'static str {
        self.rarity.display_name()
    }

    pub fn rarity_color(&self) -> &'static str {
        self.rarity.color()
    }
}

/// Purchase price for a power rating: `max(5, floor(power / 10))` for heroes.
pub fn hero_cost(power: u32, is_hero: bool) -> u32 {
    if is_hero {
        (power / 10).max(MIN_HERO_COST)
    } else {
        0
    }
}

/// Sum of power ratings.
pub fn total_power(characters: &[Character]) -> u32 {
    characters.iter().map(|c| c.power).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Character {
        Character::new("Nova", 1, StatBlock::new(100, 20, 10, 10, 5), true)
    }

    #[test]
    fn derived_values_follow_stats() {
        let mut hero = sample();
        // 10 + 40 + 15 + 20 + 5
        assert_eq!(hero.power, 90);
        assert_eq!(hero.cost, 9);

        hero.stats.atk += 100;
        hero.refresh_derived();
        assert_eq!(hero.power, 290);
        assert_eq!(hero.cost, 29);
    }

    #[test]
    fn enemies_cost_nothing_and_heroes_at_least_five() {
        assert_eq!(hero_cost(10, true), 5);
        assert_eq!(hero_cost(500, false), 0);
    }

    #[test]
    fn learn_skill_deduplicates_and_evicts_oldest() {
        let mut hero = sample().with_skills(["a", "b", "c", "d", "e"]);
        assert!(!hero.learn_skill("c"));
        assert!(hero.learn_skill("f"));
        let names: Vec<&str> = hero.skills.iter().map(String::as_str).collect();
        assert_eq!(names, ["b", "c", "d", "e", "f"]);
    }

    #[test]
    fn total_power_sums_roster() {
        let roster = [sample(), sample()];
        assert_eq!(total_power(&roster), 180);
    }
}
