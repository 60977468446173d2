//! Stat arithmetic shared by generation, artifacts, upgrades and combat.
//!
//! Every consumer that needs a power rating calls [`derive_power`]; there is
//! exactly one formula.

use super::block::StatBlock;

/// Slack absorbed when flooring products of decimal fractions, so that
/// `100 * 1.15` floors to 115 rather than 114.
const FLOOR_TOLERANCE: f64 = 1e-9;

/// Floors a scaled stat or damage value to an integer.
pub fn floor_scaled(value: f64) -> i32 {
    (value + FLOOR_TOLERANCE).floor() as i32
}

/// Percentage modification: `floor(stat * (1 + value))`.
///
/// `value` is a fraction (`0.15` = +15%, `-0.05` = -5%).
pub fn apply_percent(stat: i32, value: f64) -> i32 {
    floor_scaled(f64::from(stat) * (1.0 + value))
}

/// Flat modification: `stat + value`.
pub fn apply_flat(stat: i32, value: i32) -> i32 {
    stat.saturating_add(value)
}

/// `floor(value * percent / 100)` for integer stats.
///
/// Used wherever a stat-derived amount is truncated (DoT ticks, heals,
/// upgrade inheritance).
pub fn percent_of(value: i32, percent: i32) -> i32 {
    (i64::from(value) * i64::from(percent)).div_euclid(100) as i32
}

/// Power rating: `floor(hp/10 + atk*2 + def*1.5 + spd*2 + crit)`, never negative.
pub fn derive_power(stats: &StatBlock) -> u32 {
    let raw = f64::from(stats.hp) / 10.0
        + f64::from(stats.atk) * 2.0
        + f64::from(stats.def) * 1.5
        + f64::from(stats.spd) * 2.0
        + f64::from(stats.crit);
    raw.floor().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_floors_after_multiplying() {
        assert_eq!(apply_percent(100, 0.15), 115);
        assert_eq!(apply_percent(33, 0.1), 36);
        assert_eq!(apply_percent(20, -0.05), 19);
        assert_eq!(apply_percent(0, 0.5), 0);
        assert_eq!(apply_percent(200, 0.15), 230);
        assert_eq!(apply_percent(100, 0.12), 112);
    }

    #[test]
    fn flat_adds() {
        assert_eq!(apply_flat(5, 8), 13);
        assert_eq!(apply_flat(5, -10), -5);
    }

    #[test]
    fn percent_of_truncates() {
        assert_eq!(percent_of(95, 5), 4);
        assert_eq!(percent_of(150, 10), 15);
        assert_eq!(percent_of(9, 20), 1);
    }

    #[test]
    fn power_matches_reference_values() {
        // 11 + 44 + 16.5 + 22 + 5 = 98.5
        let stats = StatBlock::new(110, 22, 11, 11, 5);
        assert_eq!(derive_power(&stats), 98);

        let odd = StatBlock::new(105, 21, 11, 10, 5);
        // 10.5 + 42 + 16.5 + 20 + 5 = 94
        assert_eq!(derive_power(&odd), 94);
    }
}
