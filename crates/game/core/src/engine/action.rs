//! Action resolution: attacks, defending, specials and passive triggers.

use crate::combat::{
    Passive, SpecialKind, apply_critical, calculate_damage, crit_chance, scale_damage,
};
use crate::env::{CombatStyle, RngOracle};
use crate::state::{LogCategory, SPECIAL_COOLDOWN, UnitRef};
use crate::stats::{Modifier, StatKind, percent_of};

use super::style::{RAGE, StyleContext, strategy};
use super::{ActionKind, BattleEngine, BattleEvent};

pub const DEFENSIVE_STANCE: &str = "Defensive Stance";
/// Defense bonus of the defend action (percent of def).
pub const DEFEND_PERCENT: i32 = 50;
/// A single hit of at least this share of max hp (percent) can enrage.
pub const HEAVY_HIT_PERCENT: i64 = 20;
pub const HEAVY_HIT_RAGE_CHANCE: f64 = 0.5;

const FALLBACK_SKILL: &str = "Special Ability";

impl<R: RngOracle> BattleEngine<R> {
    /// Lets `actor` choose and resolve one action.
    pub(super) fn execute_action(&mut self, actor: UnitRef) {
        self.state.active_fighter = Some(actor);

        let decision = {
            let ctx = StyleContext::new(actor, &self.players, &self.enemies);
            if ctx.opponents.is_empty() {
                return;
            }
            let style = ctx.unit.character.combat_style;
            strategy(style)(&ctx, &mut self.rng)
        };

        if let Some((message, category)) = decision.announcement {
            self.state.record(message, category);
        }
        for (unit, modifier) in decision.grants {
            self.unit_mut(unit).buffs.upsert(modifier);
        }

        match (decision.action, decision.target) {
            (ActionKind::Attack, Some(target)) => self.perform_attack(actor, target),
            (ActionKind::Defend, _) => self.perform_defend(actor),
            (ActionKind::Special, Some(target)) => self.perform_special(actor, target),
            (ActionKind::Attack | ActionKind::Special, None)
            | (ActionKind::Support | ActionKind::Skip, _) => {}
        }

        tracing::trace!(
            actor = self.unit(actor).name(),
            action = %decision.action,
            "action resolved"
        );
        self.emit(BattleEvent::ActionResolved {
            actor,
            action: decision.action,
            target: decision.target,
        });
    }

    fn perform_attack(&mut self, attacker: UnitRef, target: UnitRef) {
        let mut damage = calculate_damage(self.unit(attacker), self.unit(target));
        let crit = crit_chance(self.unit(attacker).stats().crit);
        let critical = self.rng.chance(crit);

        let (attacker_name, target_name) = self.names(attacker, target);
        if critical {
            damage = apply_critical(damage);
            self.state.record(
                format!("{attacker_name} lands a critical hit on {target_name} for {damage} damage!"),
                LogCategory::Critical,
            );
        } else {
            self.state.record(
                format!("{attacker_name} attacks {target_name} for {damage} damage."),
                LogCategory::Damage,
            );
        }

        self.apply_damage(Some(attacker), target, damage, critical);
        self.check_passives(attacker);
    }

    fn perform_defend(&mut self, unit: UnitRef) {
        let bonus = percent_of(self.unit(unit).stats().def, DEFEND_PERCENT);
        self.unit_mut(unit)
            .buffs
            .upsert(Modifier::new(DEFENSIVE_STANCE, StatKind::Def, bonus, 2));
        let message = format!(
            "{} takes a defensive stance, defense +{bonus}!",
            self.unit(unit).name()
        );
        self.state.record(message, LogCategory::Defend);
    }

    fn perform_special(&mut self, caster: UnitRef, target: UnitRef) {
        let known = self.unit(caster).character.skills.len();
        let skill = if known == 0 {
            FALLBACK_SKILL.to_string()
        } else {
            let index = self.rng.index(known);
            self.unit(caster).character.skills[index].clone()
        };
        let kind = self.unit(caster).special;

        match kind.damage_factor() {
            Some(factor) => {
                let base = calculate_damage(self.unit(caster), self.unit(target));
                let damage = scale_damage(base, factor);
                let (caster_name, target_name) = self.names(caster, target);
                self.state.record(
                    format!(
                        "{caster_name} uses {skill} on {target_name}, dealing {damage} {} damage!",
                        kind.flavor()
                    ),
                    LogCategory::Special,
                );
                self.apply_damage(Some(caster), target, damage, false);

                if let Some(debuff) = kind.debuff(self.unit(target).stats()) {
                    self.unit_mut(target).debuffs.upsert(debuff);
                }
            }
            None => {
                let amount = SpecialKind::heal_amount(self.unit(caster).stats());
                // enemies are never healed; the caster takes the heal instead
                let recipient = if target.team == caster.team {
                    target
                } else {
                    caster
                };
                let (caster_name, recipient_name) = self.names(caster, recipient);
                self.state.record(
                    format!("{caster_name} uses {skill}, restoring {amount} HP to {recipient_name}!"),
                    LogCategory::Heal,
                );
                self.apply_heal(recipient, amount);
            }
        }

        let cooldown = self.config.special_cooldown;
        self.unit_mut(caster).set_cooldown(SPECIAL_COOLDOWN, cooldown);
    }

    /// Deals damage to `target` and runs the reactions to it.
    ///
    /// Logs a death when the hit downs the unit. A surviving ragequit unit
    /// hit for at least a fifth of its max hp may fly into a rage.
    pub(super) fn apply_damage(
        &mut self,
        source: Option<UnitRef>,
        target: UnitRef,
        amount: i32,
        critical: bool,
    ) -> i32 {
        let unit = self.unit_mut(target);
        let was_alive = unit.is_alive();
        let applied = unit.take_damage(amount);
        let downed = was_alive && !unit.is_alive();

        self.emit(BattleEvent::DamageDealt {
            source,
            target,
            amount: applied,
            critical,
        });

        if downed {
            let message = format!("{} has fallen!", self.unit(target).name());
            self.state.record(message, LogCategory::Death);
            tracing::debug!(unit = self.unit(target).name(), "unit downed");
            self.emit(BattleEvent::UnitDowned {
                unit: target,
                by: source,
            });
            return applied;
        }

        let unit = self.unit(target);
        let heavy_hit = i64::from(amount) * 100 >= i64::from(unit.max_hp()) * HEAVY_HIT_PERCENT;
        let can_rage = unit.is_alive()
            && unit.character.combat_style == CombatStyle::Ragequit
            && heavy_hit;
        if can_rage && self.rng.chance(HEAVY_HIT_RAGE_CHANCE) {
            let unit = self.unit(target);
            let message = format!("{} flies into a rage after the heavy blow!", unit.name());
            let rage = Modifier::new(RAGE, StatKind::Atk, unit.stats().atk, 2);
            self.state.record(message, LogCategory::Special);
            self.unit_mut(target).buffs.upsert(rage);
        }
        applied
    }

    /// Heals `target`, clamped at max hp. Returns the hp restored.
    pub(super) fn apply_heal(&mut self, target: UnitRef, amount: i32) -> i32 {
        self.unit_mut(target).heal(amount)
    }

    /// Special-ability passives, evaluated after each attack action.
    fn check_passives(&mut self, attacker: UnitRef) {
        let Some(passive) = self.unit(attacker).passive else {
            return;
        };
        let max_hp = self.unit(attacker).max_hp();
        let name = self.unit(attacker).name().to_string();

        match passive {
            Passive::Spotlight => {
                if self.rng.chance(Passive::SPOTLIGHT_CHANCE) {
                    let amount = percent_of(max_hp, Passive::SPOTLIGHT_HEAL_PERCENT);
                    self.apply_heal(attacker, amount);
                    self.state.record(
                        format!("{name} basks in the spotlight and recovers {amount} HP!"),
                        LogCategory::Effect,
                    );
                }
            }
            Passive::CaffeineCrash => {
                if self.state.turn > Passive::CAFFEINE_TURN_THRESHOLD {
                    let amount = percent_of(max_hp, Passive::CAFFEINE_DAMAGE_PERCENT);
                    self.state.record(
                        format!("{name} crashes from too much caffeine and loses {amount} HP!"),
                        LogCategory::Effect,
                    );
                    self.apply_damage(None, attacker, amount, false);
                }
            }
            Passive::DiamondHands => {
                if self.rng.chance(Passive::DIAMOND_HANDS_CHANCE) {
                    self.state.record(
                        format!("{name}'s diamond hands hold strong: bonus gold next battle!"),
                        LogCategory::Effect,
                    );
                }
            }
        }
    }

    fn names(&self, a: UnitRef, b: UnitRef) -> (String, String) {
        (
            self.unit(a).name().to_string(),
            self.unit(b).name().to_string(),
        )
    }
}
