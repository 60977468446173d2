//! Battle hooks that react to lifecycle events.
//!
//! The engine queues a [`BattleEvent`] for every notable state change during a
//! step and hands them to the registered hooks once the step has resolved.
//! Hooks are the attachment point for trigger-based artifact behaviors; each
//! hook declares the [`TriggerKind`]s it listens to, mirroring
//! [`ArtifactEffect::trigger`](crate::env::ArtifactEffect::trigger).

use std::sync::Arc;

use crate::engine::ActionKind;
use crate::env::{RngOracle, TriggerKind};
use crate::state::{BattleState, Combatant, LogCategory, Outcome, Team, UnitRef};

/// Something that happened during a battle step.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    BattleStarted,
    ActionResolved {
        actor: UnitRef,
        action: ActionKind,
        target: Option<UnitRef>,
    },
    /// `source` is `None` for damage over time and self-inflicted effects.
    DamageDealt {
        source: Option<UnitRef>,
        target: UnitRef,
        amount: i32,
        critical: bool,
    },
    UnitDowned {
        unit: UnitRef,
        by: Option<UnitRef>,
    },
    BattleEnded {
        outcome: Outcome,
    },
}

impl BattleEvent {
    /// Trigger kinds satisfied by this event.
    pub fn triggers(&self) -> &'static [TriggerKind] {
        match self {
            Self::BattleStarted => &[TriggerKind::BattleStart],
            Self::ActionResolved {
                action: ActionKind::Attack,
                ..
            } => &[TriggerKind::OnAttack],
            Self::ActionResolved { .. } => &[],
            Self::DamageDealt { .. } => &[TriggerKind::OnHit],
            Self::UnitDowned { by: Some(_), .. } => &[TriggerKind::OnDeath, TriggerKind::OnKill],
            Self::UnitDowned { by: None, .. } => &[TriggerKind::OnDeath],
            Self::BattleEnded { .. } => &[TriggerKind::BattleEnd],
        }
    }
}

/// Mutable view of the battle handed to hooks.
///
/// Hooks may change combatants and append log entries. They cannot emit new
/// events.
pub struct HookContext<'a> {
    pub players: &'a mut [Combatant],
    pub enemies: &'a mut [Combatant],
    pub state: &'a mut BattleState,
    pub rng: &'a mut dyn RngOracle,
}

impl HookContext<'_> {
    pub fn unit(&self, unit: UnitRef) -> Option<&Combatant> {
        match unit.team {
            Team::Player => self.players.get(unit.index),
            Team::Enemy => self.enemies.get(unit.index),
        }
    }

    pub fn unit_mut(&mut self, unit: UnitRef) -> Option<&mut Combatant> {
        match unit.team {
            Team::Player => self.players.get_mut(unit.index),
            Team::Enemy => self.enemies.get_mut(unit.index),
        }
    }

    pub fn record(&mut self, message: impl Into<String>, category: LogCategory) {
        self.state.record(message, category);
    }
}

/// A hook that is applied after a battle step emits events.
///
/// Hooks are executed in priority order (lower priority values execute first).
pub trait BattleHook: Send + Sync {
    /// Name used in traces.
    fn name(&self) -> &str;

    /// Returns the priority of this hook. Lower values execute first.
    fn priority(&self) -> i32 {
        0
    }

    /// Trigger kinds this hook subscribes to.
    fn triggers(&self) -> &[TriggerKind];

    /// Determines whether this hook should run for the event.
    fn should_trigger(&self, event: &BattleEvent) -> bool {
        let subscribed = self.triggers();
        event.triggers().iter().any(|kind| subscribed.contains(kind))
    }

    /// Applies the hook's effects.
    fn apply(&self, event: &BattleEvent, ctx: &mut HookContext<'_>);
}

/// Shared, priority-sorted hook list.
pub type HookSet = Arc<[Arc<dyn BattleHook>]>;

/// Collects hooks into a [`HookSet`] sorted by priority.
pub fn hook_set(hooks: impl IntoIterator<Item = Arc<dyn BattleHook>>) -> HookSet {
    let mut hooks: Vec<Arc<dyn BattleHook>> = hooks.into_iter().collect();
    hooks.sort_by_key(|h| h.priority());
    hooks.into()
}
