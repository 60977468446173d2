//! Hero shop and enemy roster generation.
//!
//! Both rosters sample each slot's rarity from a cumulative probability table
//! and jitter the slot level around the requested one.

use crate::env::{RngOracle, TraitOracle};
use crate::generation::{GenerationError, generate_character};
use crate::rarity::{Rarity, roll_rarity};
use crate::state::Character;

/// Default shop size.
pub const DEFAULT_SHOP_SIZE: usize = 5;
/// Default enemy count on a regular stage.
pub const DEFAULT_ENEMY_COUNT: usize = 3;
/// Every tenth level is a boss level.
pub const BOSS_INTERVAL: u32 = 10;

/// Probability table over rarity tiers, lowest first.
pub type RarityTable = [(Rarity, f64); 6];

/// Hero shop rarity odds for a level.
///
/// Above level 10 the common share shrinks and every higher tier grows,
/// each adjustment capped.
pub fn hero_rarity_table(level: u32) -> RarityTable {
    let mut table = [
        (Rarity::Common, 0.4),
        (Rarity::Uncommon, 0.3),
        (Rarity::Rare, 0.15),
        (Rarity::Epic, 0.1),
        (Rarity::Legendary, 0.04),
        (Rarity::Mythic, 0.01),
    ];
    if level > 10 {
        let level = f64::from(level);
        table[0].1 -= (level * 0.02).min(0.3);
        table[1].1 += (level * 0.005).min(0.1);
        table[2].1 += (level * 0.005).min(0.1);
        table[3].1 += (level * 0.003).min(0.05);
        table[4].1 += (level * 0.002).min(0.03);
        table[5].1 += (level * 0.001).min(0.02);
    }
    table
}

/// Enemy rarity odds; boss levels use a steeper table.
pub fn enemy_rarity_table(boss: bool) -> RarityTable {
    if boss {
        [
            (Rarity::Common, 0.1),
            (Rarity::Uncommon, 0.2),
            (Rarity::Rare, 0.3),
            (Rarity::Epic, 0.3),
            (Rarity::Legendary, 0.09),
            (Rarity::Mythic, 0.01),
        ]
    } else {
        [
            (Rarity::Common, 0.5),
            (Rarity::Uncommon, 0.3),
            (Rarity::Rare, 0.15),
            (Rarity::Epic, 0.04),
            (Rarity::Legendary, 0.01),
            (Rarity::Mythic, 0.0),
        ]
    }
}

pub fn is_boss_level(level: u32) -> bool {
    level > 0 && level % BOSS_INTERVAL == 0
}

/// Rarity forced onto the first enemy of a boss level.
pub fn boss_rarity(level: u32) -> Rarity {
    if level >= 50 {
        Rarity::Mythic
    } else if level >= 30 {
        Rarity::Legendary
    } else {
        Rarity::Epic
    }
}

/// `max(1, floor(level * (low + roll * spread)))`.
fn jitter_level(level: u32, low: f64, spread: f64, rng: &mut (impl RngOracle + ?Sized)) -> u32 {
    let scaled = f64::from(level) * (low + rng.unit() * spread);
    (scaled.floor() as u32).max(1)
}

/// Generates `count` heroes for the shop at `level`.
///
/// Each slot's level is `floor(level * U(0.8, 1.2))`, at least 1.
pub fn generate_hero_shop(
    catalog: &(impl TraitOracle + ?Sized),
    level: u32,
    count: usize,
    rng: &mut (impl RngOracle + ?Sized),
) -> Result<Vec<Character>, GenerationError> {
    let table = hero_rarity_table(level);
    let mut heroes = Vec::with_capacity(count);
    for _ in 0..count {
        let rarity = roll_rarity(&table, rng.unit());
        let hero_level = jitter_level(level, 0.8, 0.4, rng);
        heroes.push(generate_character(catalog, hero_level, rarity, true, rng)?);
    }
    tracing::debug!(level, count = heroes.len(), "generated hero shop");
    Ok(heroes)
}

/// Generates the enemy roster for `level`.
///
/// Boss levels field one enemy fewer (at least one, unless `count` is 0) and
/// force the first slot's rarity with [`boss_rarity`]. Each slot's level is
/// `floor(level * U(0.9, 1.2))`, at least 1.
pub fn generate_enemies(
    catalog: &(impl TraitOracle + ?Sized),
    level: u32,
    count: usize,
    rng: &mut (impl RngOracle + ?Sized),
) -> Result<Vec<Character>, GenerationError> {
    let boss = is_boss_level(level);
    let table = enemy_rarity_table(boss);
    let count = if boss && count > 0 {
        count.saturating_sub(1).max(1)
    } else {
        count
    };

    let mut enemies = Vec::with_capacity(count);
    for slot in 0..count {
        let mut rarity = roll_rarity(&table, rng.unit());
        if boss && slot == 0 {
            rarity = boss_rarity(level);
        }
        let enemy_level = jitter_level(level, 0.9, 0.3, rng);
        enemies.push(generate_character(catalog, enemy_level, rarity, false, rng)?);
    }
    tracing::debug!(level, boss, count = enemies.len(), "generated enemies");
    Ok(enemies)
}
