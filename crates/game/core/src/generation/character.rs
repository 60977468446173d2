//! Character composition from trait modules.

use crate::config::BattleConfig;
use crate::env::{AttributeModule, ClassModule, RaceModule, RngOracle, TraitOracle};
use crate::generation::GenerationError;
use crate::generation::names::{hero_name, monster_name};
use crate::rarity::Rarity;
use crate::state::{Character, Skills, TraitRef};
use crate::stats::{StatBlock, Stats};

/// Per-stat base value at level 1 and growth per level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatCurve {
    pub base: f64,
    pub per_level: f64,
}

/// Level curves: hp 100+10, atk 20+2, def 10+1, spd 10+0.5, crit 5+0.3.
pub const LEVEL_CURVES: Stats<StatCurve> = Stats {
    hp: StatCurve {
        base: 100.0,
        per_level: 10.0,
    },
    atk: StatCurve {
        base: 20.0,
        per_level: 2.0,
    },
    def: StatCurve {
        base: 10.0,
        per_level: 1.0,
    },
    spd: StatCurve {
        base: 10.0,
        per_level: 0.5,
    },
    crit: StatCurve {
        base: 5.0,
        per_level: 0.3,
    },
};

/// Unrounded base stats for a level.
pub fn level_curve(level: u32) -> Stats<f64> {
    let steps = f64::from(level.max(1) - 1);
    LEVEL_CURVES.map(|_, curve| curve.base + steps * curve.per_level)
}

/// Composes the final stat block.
///
/// # Order
///
/// ```text
/// curve(level) + race bonus → × class → × attribute → × rarity → round
/// ```
///
/// Rounding happens once, at the end. Results below zero are clamped to 0.
pub fn compose_stats(
    level: u32,
    race: &RaceModule,
    class: &ClassModule,
    attribute: &AttributeModule,
    rarity: Rarity,
) -> StatBlock {
    let multiplier = rarity.multiplier();
    level_curve(level)
        .zip_with(race.stat_bonus.to_f64(), |base, bonus| base + bonus)
        .zip_with(class.stat_multiplier, |value, factor| value * factor)
        .zip_with(attribute.stat_distribution, |value, factor| value * factor)
        .map(|_, value| ((value * multiplier).round() as i32).max(0))
}

fn draw<'a, T>(
    modules: &'a [T],
    dimension: &'static str,
    rng: &mut (impl RngOracle + ?Sized),
) -> Result<&'a T, GenerationError> {
    if modules.is_empty() {
        return Err(GenerationError::EmptyCatalog { dimension });
    }
    Ok(&modules[rng.index(modules.len())])
}

/// Generates one character.
///
/// # Arguments
///
/// * `catalog` - Trait modules to draw from
/// * `level` - Requested level, clamped to 1..=100
/// * `rarity` - Rarity tier; scales stats and caps the skill count
/// * `is_hero` - Heroes get hero names and a purchase cost
/// * `rng` - Source of every draw
///
/// # Errors
///
/// [`GenerationError::EmptyCatalog`] if any dimension has no modules.
pub fn generate_character(
    catalog: &(impl TraitOracle + ?Sized),
    level: u32,
    rarity: Rarity,
    is_hero: bool,
    rng: &mut (impl RngOracle + ?Sized),
) -> Result<Character, GenerationError> {
    let level = level.clamp(1, BattleConfig::MAX_LEVEL);

    let race = draw(catalog.races(), "race", rng)?;
    let class = draw(catalog.classes(), "class", rng)?;
    let attribute = draw(catalog.attributes(), "attribute", rng)?;
    let special = draw(catalog.special_abilities(), "special ability", rng)?;
    let style = draw(catalog.combat_styles(), "combat style", rng)?;

    let stats = compose_stats(level, race, class, attribute, rarity);

    let mut skills = Skills::new();
    let pool = race
        .abilities
        .iter()
        .chain(class.skills.iter().take(2))
        .chain(special.skills.iter().take(1));
    for skill in pool.take(rarity.max_modules()) {
        if !skills.contains(skill) && !skills.is_full() {
            skills.push(skill.clone());
        }
    }

    let name = if is_hero {
        hero_name(catalog.names(), rng)
    } else {
        monster_name(catalog.names(), rng)
    };

    let mut character = Character {
        name,
        level,
        rarity,
        race: TraitRef::new(&race.id, &race.name),
        class: TraitRef::new(&class.id, &class.name),
        attribute: TraitRef::new(&attribute.id, &attribute.name),
        special_ability: TraitRef::new(&special.id, &special.name),
        combat_style: style.style,
        combat_style_name: style.name.clone(),
        description: format!("{} {}", race.description, class.description),
        stats,
        skills,
        effects: special
            .effects
            .iter()
            .chain(style.effects.iter())
            .cloned()
            .collect(),
        unique_traits: format!(
            "{} {}, {} build, gifted with {}, fights in a {} style.",
            race.name, class.name, attribute.name, special.name, style.name
        ),
        power: 0,
        cost: 0,
        is_hero,
    };
    character.refresh_derived();

    tracing::debug!(
        name = %character.name,
        level,
        rarity = %rarity,
        power = character.power,
        "generated character"
    );

    Ok(character)
}
