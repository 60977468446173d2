//! Artifact and synergy records plus the oracle that serves them.
//!
//! Artifact effects form a closed set of tagged variants. Stat-affecting
//! variants are applied between battles by
//! [`apply_effects`](crate::artifact::apply_effects); trigger variants
//! declare the battle event they subscribe to through
//! [`ArtifactEffect::trigger`] and are realized by battle hooks.

use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::rarity::Rarity;
use crate::stats::StatKind;

/// Broad artifact category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ArtifactKind {
    /// Always-on bonus.
    Passive,
    /// Needs to be triggered.
    Active,
    /// Fires when a battle condition is met.
    Conditional,
    /// Changes game rules.
    Transformative,
    /// Affects meta progression.
    Meta,
}

/// Battle lifecycle points an effect can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TriggerKind {
    OnAttack,
    OnHit,
    OnDeath,
    OnKill,
    BattleStart,
    BattleEnd,
}

/// Team-size comparison used by conditional artifacts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TeamSizeCondition {
    LessThan,
    GreaterThan,
    Equals,
}

impl TeamSizeCondition {
    pub fn holds(self, team_size: usize, threshold: u32) -> bool {
        let threshold = threshold as usize;
        match self {
            Self::LessThan => team_size < threshold,
            Self::GreaterThan => team_size > threshold,
            Self::Equals => team_size == threshold,
        }
    }
}

/// A chance-gated triggered effect.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectProc {
    pub chance: f64,
    pub effect: TriggeredEffect,
}

/// Payload of a triggered artifact effect.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum TriggeredEffect {
    /// Heal a fraction of damage dealt.
    Lifesteal { value: f64 },
    /// Return to a fraction of max hp.
    Revive { health_percent: f64 },
    /// Reflect a fraction of damage taken.
    ReflectDamage { value: f64 },
    Stun { duration: u32 },
    ExtraTurn,
    RandomStatChange,
    CopySkill,
    /// Damage multiplier on the proc.
    CriticalModifier { value: f64 },
    /// Self damage as a fraction of max hp.
    SelfDamage { value: f64 },
    RandomGold { chance: f64, bonus: f64, penalty: f64 },
    AllStatsPercent { value: f64 },
    HealPercent { value: f64 },
    /// Applies to every enemy stat.
    EnemyStatPercent { value: f64 },
    /// Unrecognized payload; inert.
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

/// Artifact effect variants.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum ArtifactEffect {
    /// `stat = floor(stat * (1 + value))`.
    HeroStatPercent { stat: StatKind, value: f64 },
    /// `stat += value`.
    HeroStatFlat { stat: StatKind, value: i32 },
    RegenPercent { value: f64 },
    /// Several effects applied in order.
    Multi { effects: Vec<ArtifactEffect> },
    OnAttack { procs: Vec<EffectProc> },
    OnHit { chance: f64, effect: TriggeredEffect },
    OnDeath { uses: u32, effect: TriggeredEffect },
    OnKill { effect: TriggeredEffect },
    BattleStart {
        #[cfg_attr(feature = "serde", serde(default))]
        chance: Option<f64>,
        effect: TriggeredEffect,
    },
    BattleEnd { effect: TriggeredEffect },
    /// Shop refresh and hero purchase price modifiers (fractions).
    ShopModifier {
        refresh_cost_modifier: f64,
        hero_cost_modifier: f64,
    },
    ExpBonus { value: f64 },
    GoldBonus { value: f64 },
    TeamSize {
        condition: TeamSizeCondition,
        value: u32,
        effect: TriggeredEffect,
    },
    DamageTypeBonus { damage_type: String, value: f64 },
    /// Unrecognized effect tag; inert everywhere.
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

impl ArtifactEffect {
    /// Battle event this effect subscribes to, if any.
    pub fn trigger(&self) -> Option<TriggerKind> {
        match self {
            Self::OnAttack { .. } => Some(TriggerKind::OnAttack),
            Self::OnHit { .. } => Some(TriggerKind::OnHit),
            Self::OnDeath { .. } => Some(TriggerKind::OnDeath),
            Self::OnKill { .. } => Some(TriggerKind::OnKill),
            Self::BattleStart { .. } | Self::TeamSize { .. } => Some(TriggerKind::BattleStart),
            Self::BattleEnd { .. } => Some(TriggerKind::BattleEnd),
            Self::HeroStatPercent { .. }
            | Self::HeroStatFlat { .. }
            | Self::RegenPercent { .. }
            | Self::Multi { .. }
            | Self::ShopModifier { .. }
            | Self::ExpBonus { .. }
            | Self::GoldBonus { .. }
            | Self::DamageTypeBonus { .. }
            | Self::Unknown => None,
        }
    }

    /// True when the effect changes hero stats between battles.
    pub fn is_stat_effect(&self) -> bool {
        match self {
            Self::HeroStatPercent { .. } | Self::HeroStatFlat { .. } => true,
            Self::Multi { effects } => effects.iter().any(Self::is_stat_effect),
            _ => false,
        }
    }
}

/// A collectible artifact.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Artifact {
    pub id: String,
    pub name: String,
    pub description: String,
    pub kind: ArtifactKind,
    pub rarity: Rarity,
    pub effect: ArtifactEffect,
    pub flavor: String,
}

/// A bonus unlocked by owning every artifact in `required`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Synergy {
    pub id: String,
    pub name: String,
    pub description: String,
    pub required: Vec<String>,
    pub effect: ArtifactEffect,
}

/// Read-only artifact and synergy catalog.
pub trait ArtifactOracle: Send + Sync {
    fn artifacts(&self) -> &[Artifact];

    fn synergies(&self) -> &[Synergy];

    /// Looks up an artifact by id.
    fn artifact(&self, id: &str) -> Option<&Artifact> {
        self.artifacts().iter().find(|a| a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_variants_declare_their_event() {
        let effect = ArtifactEffect::OnDeath {
            uses: 1,
            effect: TriggeredEffect::Revive {
                health_percent: 0.5,
            },
        };
        assert_eq!(effect.trigger(), Some(TriggerKind::OnDeath));

        let stat = ArtifactEffect::HeroStatFlat {
            stat: StatKind::Crit,
            value: 8,
        };
        assert_eq!(stat.trigger(), None);
        assert!(stat.is_stat_effect());
    }

    #[test]
    fn multi_is_a_stat_effect_when_any_child_is() {
        let effect = ArtifactEffect::Multi {
            effects: vec![
                ArtifactEffect::RegenPercent { value: 0.02 },
                ArtifactEffect::HeroStatPercent {
                    stat: StatKind::Hp,
                    value: 0.3,
                },
            ],
        };
        assert!(effect.is_stat_effect());
        assert!(!ArtifactEffect::GoldBonus { value: 0.25 }.is_stat_effect());
    }

    #[test]
    fn team_size_condition_compares() {
        assert!(TeamSizeCondition::LessThan.holds(2, 3));
        assert!(!TeamSizeCondition::LessThan.holds(3, 3));
        assert!(TeamSizeCondition::Equals.holds(3, 3));
    }
}
