//! Hero fusion: merging a sacrificed character into a base hero.

use crate::config::BattleConfig;
use crate::env::RngOracle;
use crate::state::Character;
use crate::stats::{StatKind, percent_of};

/// Share of each sacrificed stat inherited by the base hero (percent).
pub const INHERITED_STAT_PERCENT: i32 = 20;
/// Chance to learn one of the sacrifice's skills.
pub const SKILL_INHERIT_CHANCE: f64 = 0.3;

/// Upgrades `base` by consuming `sacrifice`.
///
/// - level += ceil(sacrifice.level / 3), capped at 100
/// - each stat += floor(sacrifice.stat * 0.2)
/// - power and cost are recomputed
/// - 30% chance to learn a random sacrifice skill not already known; the
///   oldest skill is evicted past five
pub fn upgrade_hero(
    base: &Character,
    sacrifice: Character,
    rng: &mut (impl RngOracle + ?Sized),
) -> Character {
    let mut upgraded = base.clone();

    upgraded.level = (base.level + sacrifice.level.div_ceil(3)).min(BattleConfig::MAX_LEVEL);

    for kind in StatKind::ALL {
        let gain = percent_of(sacrifice.stats.get(kind).max(0), INHERITED_STAT_PERCENT);
        let stat = upgraded.stats.get_mut(kind);
        *stat = stat.saturating_add(gain);
    }
    upgraded.refresh_derived();

    if rng.chance(SKILL_INHERIT_CHANCE) && !sacrifice.skills.is_empty() {
        let skill = &sacrifice.skills[rng.index(sacrifice.skills.len())];
        if upgraded.learn_skill(skill.clone()) {
            tracing::debug!(hero = %upgraded.name, skill = %skill, "inherited skill");
        }
    }

    tracing::debug!(
        hero = %upgraded.name,
        consumed = %sacrifice.name,
        level = upgraded.level,
        power = upgraded.power,
        "upgraded hero"
    );

    upgraded
}
