//! Damage calculation.

use crate::state::Combatant;
use crate::stats::{StatKind, floor_scaled};

/// Damage multiplier of a critical hit.
pub const CRIT_MULTIPLIER: f64 = 1.5;

/// Defense constant of the mitigation curve.
pub const MITIGATION_CONSTANT: f64 = 100.0;

/// Calculate damage from an attack.
///
/// # Formula
///
/// ```text
/// base    = atk * (1 - def / (def + 100))
/// boosted = base + sum(attacker atk buffs)
/// for each defender def debuff:
///     boosted *= 1 + debuff / def
/// final   = max(1, floor(boosted))
/// ```
///
/// Base stats are used on both sides; defense buffs do not enter the curve.
/// A defender with zero defense is treated as having one for the debuff
/// amplification.
pub fn calculate_damage(attacker: &Combatant, defender: &Combatant) -> i32 {
    let atk = f64::from(attacker.stats().atk.max(0));
    let def = f64::from(defender.stats().def.max(0));

    let mut damage = atk * (1.0 - def / (def + MITIGATION_CONSTANT));
    damage += f64::from(attacker.buffs.total(StatKind::Atk));

    let divisor = def.max(1.0);
    for debuff in defender.debuffs.for_stat(StatKind::Def) {
        damage *= 1.0 + f64::from(debuff.value) / divisor;
    }

    floor_scaled(damage).max(1)
}

/// Critical strike: `floor(damage * 1.5)`.
pub fn apply_critical(damage: i32) -> i32 {
    floor_scaled(f64::from(damage) * CRIT_MULTIPLIER)
}

/// Scales a resolved damage value by a special-ability factor, floored, minimum 1.
pub fn scale_damage(damage: i32, factor: f64) -> i32 {
    floor_scaled(f64::from(damage) * factor).max(1)
}

/// Crit probability for a crit stat (percent).
pub fn crit_chance(crit: i32) -> f64 {
    f64::from(crit) / 100.0
}
