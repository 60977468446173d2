//! Rarity-weighted artifact offers.

use crate::env::{Artifact, ArtifactOracle, RngOracle};
use crate::rarity::Rarity;

/// Default number of artifacts offered after a battle.
pub const DEFAULT_CHOICE_COUNT: usize = 3;

/// Base selection weight of a rarity tier.
pub const fn rarity_weight(rarity: Rarity) -> f64 {
    match rarity {
        Rarity::Common => 100.0,
        Rarity::Uncommon => 60.0,
        Rarity::Rare => 30.0,
        Rarity::Epic => 15.0,
        Rarity::Legendary => 5.0,
        Rarity::Mythic => 1.0,
    }
}

/// Selection weights for a level.
///
/// Above level 10, rare and higher tiers are scaled by `min(4, level / 10)`.
pub fn rarity_weights(level: u32) -> [(Rarity, f64); 6] {
    let factor = if level > 10 {
        (f64::from(level) / 10.0).min(4.0)
    } else {
        1.0
    };
    Rarity::ALL.map(|rarity| {
        let weight = rarity_weight(rarity);
        if rarity >= Rarity::Rare {
            (rarity, weight * factor)
        } else {
            (rarity, weight)
        }
    })
}

fn roll_weighted(weights: &[(Rarity, f64)], roll: f64) -> Rarity {
    let mut accumulated = 0.0;
    for &(rarity, weight) in weights {
        accumulated += weight;
        if roll <= accumulated {
            return rarity;
        }
    }
    Rarity::Common
}

/// Offers up to `count` distinct artifacts not in `owned`.
///
/// For each pick a rarity is rolled against the weight table and a uniform
/// artifact of that rarity is taken from the remaining pool. When the pool
/// has none of that rarity, a uniform pick from the whole pool is used.
/// Picked artifacts leave the pool, so an offer never repeats an id.
pub fn generate_choices(
    catalog: &(impl ArtifactOracle + ?Sized),
    level: u32,
    count: usize,
    owned: &[impl AsRef<str>],
    rng: &mut (impl RngOracle + ?Sized),
) -> Vec<Artifact> {
    let weights = rarity_weights(level);
    let total: f64 = weights.iter().map(|(_, weight)| weight).sum();

    let mut pool: Vec<&Artifact> = catalog
        .artifacts()
        .iter()
        .filter(|artifact| !owned.iter().any(|id| id.as_ref() == artifact.id))
        .collect();

    let mut choices = Vec::with_capacity(count.min(pool.len()));
    while choices.len() < count && !pool.is_empty() {
        let rarity = roll_weighted(&weights, rng.unit() * total);
        let candidates: Vec<usize> = pool
            .iter()
            .enumerate()
            .filter(|(_, artifact)| artifact.rarity == rarity)
            .map(|(index, _)| index)
            .collect();

        let index = if candidates.is_empty() {
            rng.index(pool.len())
        } else {
            candidates[rng.index(candidates.len())]
        };
        choices.push(pool.remove(index).clone());
    }

    tracing::debug!(
        level,
        offered = choices.len(),
        ids = ?choices.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(),
        "generated artifact choices"
    );
    choices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_scale_only_rare_and_above() {
        let base = rarity_weights(5);
        assert_eq!(base[0], (Rarity::Common, 100.0));
        assert_eq!(base[2], (Rarity::Rare, 30.0));

        let scaled = rarity_weights(25);
        assert_eq!(scaled[0], (Rarity::Common, 100.0));
        assert_eq!(scaled[1], (Rarity::Uncommon, 60.0));
        assert_eq!(scaled[2], (Rarity::Rare, 75.0));
        assert_eq!(scaled[5], (Rarity::Mythic, 2.5));
    }

    #[test]
    fn level_factor_is_capped_at_four() {
        let weights = rarity_weights(100);
        assert_eq!(weights[3], (Rarity::Epic, 60.0));
    }

    #[test]
    fn weighted_roll_walks_the_table() {
        let weights = rarity_weights(1);
        assert_eq!(roll_weighted(&weights, 0.0), Rarity::Common);
        assert_eq!(roll_weighted(&weights, 100.0), Rarity::Common);
        assert_eq!(roll_weighted(&weights, 100.5), Rarity::Uncommon);
        assert_eq!(roll_weighted(&weights, 210.5), Rarity::Mythic);
    }
}
