//! Applying owned artifacts to the hero roster and run state.

use crate::artifact::check_synergies;
use crate::env::{Artifact, ArtifactEffect, ArtifactOracle, Synergy};
use crate::state::{Character, RunState};
use crate::stats::{StatBlock, apply_flat, apply_percent, floor_scaled};

/// Result of [`apply_effects`].
#[derive(Clone, Debug, PartialEq)]
pub struct AppliedArtifacts {
    pub heroes: Vec<Character>,
    pub state: RunState,
    /// Synergies unlocked by the artifact set.
    pub synergies: Vec<Synergy>,
}

/// Applies a percent or flat stat effect. Other variants are ignored.
///
/// A percent effect on a zero stat is skipped.
fn apply_direct(stats: &mut StatBlock, effect: &ArtifactEffect) {
    match effect {
        ArtifactEffect::HeroStatPercent { stat, value } => {
            let current = stats.get(*stat);
            if current != 0 {
                stats.set(*stat, apply_percent(current, *value));
            }
        }
        ArtifactEffect::HeroStatFlat { stat, value } => {
            stats.set(*stat, apply_flat(stats.get(*stat), *value));
        }
        _ => {}
    }
}

/// Applies one artifact's stat effects to a stat block.
pub fn apply_stat_effect(stats: &mut StatBlock, effect: &ArtifactEffect) {
    match effect {
        ArtifactEffect::HeroStatPercent { .. } | ArtifactEffect::HeroStatFlat { .. } => {
            apply_direct(stats, effect)
        }
        ArtifactEffect::Multi { effects } => {
            for child in effects {
                apply_direct(stats, child);
            }
        }
        ArtifactEffect::Unknown => {
            tracing::warn!("skipping artifact with unknown effect");
        }
        ArtifactEffect::RegenPercent { .. }
        | ArtifactEffect::OnAttack { .. }
        | ArtifactEffect::OnHit { .. }
        | ArtifactEffect::OnDeath { .. }
        | ArtifactEffect::OnKill { .. }
        | ArtifactEffect::BattleStart { .. }
        | ArtifactEffect::BattleEnd { .. }
        | ArtifactEffect::ShopModifier { .. }
        | ArtifactEffect::ExpBonus { .. }
        | ArtifactEffect::GoldBonus { .. }
        | ArtifactEffect::TeamSize { .. }
        | ArtifactEffect::DamageTypeBonus { .. } => {}
    }
}

/// Applies artifacts to every hero and to the run state.
///
/// Per hero, artifacts are applied in the given order and power/cost are
/// recomputed afterwards. Shop modifiers rescale the refresh cost
/// (`max(1, floor(cost * (1 + modifier)))`) and accumulate the hero price
/// modifier. Trigger effects are left to battle hooks.
///
/// Shop modifiers compound: each one rescales the refresh cost left by the
/// previous one, so two -50% contracts take a cost of 10 to 5, then 2.
///
/// The inputs are not modified.
pub fn apply_effects(
    heroes: &[Character],
    artifacts: &[Artifact],
    state: &RunState,
    catalog: &(impl ArtifactOracle + ?Sized),
) -> AppliedArtifacts {
    let heroes = heroes
        .iter()
        .map(|hero| {
            let mut hero = hero.clone();
            for artifact in artifacts {
                apply_stat_effect(&mut hero.stats, &artifact.effect);
            }
            hero.refresh_derived();
            hero
        })
        .collect();

    let mut state = state.clone();
    for artifact in artifacts {
        if let ArtifactEffect::ShopModifier {
            refresh_cost_modifier,
            hero_cost_modifier,
        } = artifact.effect
        {
            let scaled = f64::from(state.shop_refresh_cost) * (1.0 + refresh_cost_modifier);
            state.shop_refresh_cost = floor_scaled(scaled).max(1) as u32;
            state.hero_cost_modifier += hero_cost_modifier;
        }
    }

    let ids: Vec<&str> = artifacts.iter().map(|a| a.id.as_str()).collect();
    let synergies: Vec<Synergy> = check_synergies(catalog, &ids)
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(
        artifacts = artifacts.len(),
        synergies = synergies.len(),
        shop_refresh_cost = state.shop_refresh_cost,
        "applied artifact effects"
    );

    AppliedArtifacts {
        heroes,
        state,
        synergies,
    }
}
