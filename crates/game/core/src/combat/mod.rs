//! Combat resolution formulas.
//!
//! Pure functions and lookup types used by the battle engine. Nothing here
//! touches the battle log or the RNG; the engine owns sequencing.
//!
//! # Core Functions
//!
//! - `calculate_damage`: mitigation curve plus buff/debuff adjustments
//! - `apply_critical`: critical strike multiplier
//! - `SpecialKind::classify`: special-attack branch from an ability name
//! - `Passive::from_ability_id`: always-on passive from an ability id

pub mod damage;
pub mod passive;
pub mod special;

pub use damage::{apply_critical, calculate_damage, crit_chance, scale_damage};
pub use passive::Passive;
pub use special::SpecialKind;
