//! Procedural character generation.
//!
//! Characters combine one module from each trait dimension (see
//! [`crate::env::traits`]), scaled by level and rarity. All randomness comes
//! from the injected [`RngOracle`](crate::env::RngOracle); the same seed and
//! catalog always reproduce the same roster.

pub mod character;
pub mod errors;
pub mod names;
pub mod roster;
pub mod upgrade;

pub use character::{LEVEL_CURVES, StatCurve, compose_stats, generate_character, level_curve};
pub use errors::GenerationError;
pub use names::{hero_name, monster_name};
pub use roster::{
    BOSS_INTERVAL, DEFAULT_ENEMY_COUNT, DEFAULT_SHOP_SIZE, RarityTable, boss_rarity,
    enemy_rarity_table, generate_enemies, generate_hero_shop, hero_rarity_table, is_boss_level,
};
pub use upgrade::upgrade_hero;
