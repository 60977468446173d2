use crate::env::RngOracle;
use crate::state::{LogCategory, UnitRef};

use super::BattleEngine;

/// Turn scheduling and per-step upkeep for BattleEngine.
impl<R: RngOracle> BattleEngine<R> {
    /// Living unit with the smallest action timer, with that timer.
    ///
    /// Ties go to the first unit in scan order (players, then enemies, each by
    /// roster index).
    pub(super) fn next_in_line(&self) -> Option<(UnitRef, i32)> {
        self.unit_refs()
            .filter(|&unit| self.unit(unit).is_alive())
            .map(|unit| (unit, self.unit(unit).action_timer))
            .min_by_key(|&(_, timer)| timer)
    }

    /// Moves the shared clock forward by `elapsed` for every living unit.
    pub(super) fn advance_timers(&mut self, elapsed: i32) {
        for unit in self
            .players
            .iter_mut()
            .chain(self.enemies.iter_mut())
            .filter(|u| u.is_alive())
        {
            unit.action_timer -= elapsed;
        }
    }

    /// Starts a new turn once no living unit is ready to act.
    pub(super) fn check_turn_rollover(&mut self) {
        let all_waiting = self
            .players
            .iter()
            .chain(self.enemies.iter())
            .filter(|u| u.is_alive())
            .all(|u| u.action_timer > 0);
        if all_waiting {
            self.state.turn += 1;
            let message = format!("Turn {} begins", self.state.turn);
            self.state.record(message, LogCategory::Turn);
        }
    }

    /// Applies over-time effects, then decrements and purges modifiers.
    ///
    /// Downed units are skipped. Over-time buffs heal, over-time debuffs deal
    /// damage through the regular damage path.
    pub(super) fn tick_modifiers(&mut self) {
        let units: Vec<UnitRef> = self.unit_refs().collect();
        for unit in units {
            if !self.unit(unit).is_alive() {
                continue;
            }

            for (name, value) in self.unit(unit).buffs.over_time() {
                let healed = self.apply_heal(unit, value);
                let message = format!("{} recovers {healed} HP from {name}.", self.unit(unit).name());
                self.state.record(message, LogCategory::Heal);
            }
            self.unit_mut(unit).buffs.tick();

            for (name, value) in self.unit(unit).debuffs.over_time() {
                let message = format!("{} suffers {value} damage from {name}.", self.unit(unit).name());
                self.state.record(message, LogCategory::Dot);
                self.apply_damage(None, unit, value, false);
            }
            let expired = self.unit_mut(unit).debuffs.tick();
            if !expired.is_empty() {
                tracing::trace!(unit = self.unit(unit).name(), ?expired, "debuffs expired");
            }
        }
    }

    /// Decrements cooldowns of living units.
    pub(super) fn tick_cooldowns(&mut self) {
        for unit in self
            .players
            .iter_mut()
            .chain(self.enemies.iter_mut())
            .filter(|u| u.is_alive())
        {
            unit.tick_cooldowns();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::BattleConfig;
    use crate::engine::BattleEngine;
    use crate::env::ScriptedRng;
    use crate::state::{Character, LogCategory, UnitRef};
    use crate::stats::{Modifier, StatBlock, StatKind};

    fn character(name: &str, spd: i32) -> Character {
        Character::new(name, 1, StatBlock::new(100, 10, 10, spd, 0), true)
    }

    fn engine(players: Vec<Character>, enemies: Vec<Character>) -> BattleEngine<ScriptedRng> {
        BattleEngine::new(players, enemies, BattleConfig::default(), ScriptedRng::new(vec![0.5]))
            .unwrap()
    }

    #[test]
    fn players_win_timer_ties() {
        let mut engine = engine(
            vec![character("p0", 20), character("p1", 30)],
            vec![character("e0", 30)],
        );
        engine.start_battle();
        assert_eq!(engine.next_in_line(), Some((UnitRef::player(1), 70)));
    }

    #[test]
    fn downed_units_are_not_scheduled() {
        let mut engine = engine(
            vec![character("p0", 90), character("p1", 20)],
            vec![character("e0", 10)],
        );
        engine.start_battle();
        engine.unit_mut(UnitRef::player(0)).take_damage(100);
        assert_eq!(engine.next_in_line(), Some((UnitRef::player(1), 80)));
    }

    #[test]
    fn clock_advances_living_units_only() {
        let mut engine = engine(
            vec![character("p0", 20), character("p1", 50)],
            vec![character("e0", 40)],
        );
        engine.start_battle();
        engine.unit_mut(UnitRef::player(0)).take_damage(100);
        engine.advance_timers(50);
        assert_eq!(engine.unit(UnitRef::player(0)).action_timer, 80);
        assert_eq!(engine.unit(UnitRef::player(1)).action_timer, 0);
        assert_eq!(engine.unit(UnitRef::enemy(0)).action_timer, 10);
    }

    #[test]
    fn burn_ticks_then_expires() {
        let mut engine = engine(vec![character("p0", 10)], vec![character("e0", 10)]);
        engine.start_battle();
        let burn = Modifier::new("Burn", StatKind::Hp, 5, 2).over_time();
        engine.unit_mut(UnitRef::enemy(0)).debuffs.upsert(burn);

        engine.tick_modifiers();
        assert_eq!(engine.unit(UnitRef::enemy(0)).current_hp(), 95);
        engine.tick_modifiers();
        assert_eq!(engine.unit(UnitRef::enemy(0)).current_hp(), 90);
        assert!(engine.unit(UnitRef::enemy(0)).debuffs.is_empty());
        engine.tick_modifiers();
        assert_eq!(engine.unit(UnitRef::enemy(0)).current_hp(), 90);
    }

    #[test]
    fn over_time_buffs_heal_up_to_max() {
        let mut engine = engine(vec![character("p0", 10)], vec![character("e0", 10)]);
        engine.start_battle();
        engine.unit_mut(UnitRef::player(0)).take_damage(3);
        let regen = Modifier::new("Regen", StatKind::Hp, 10, 1).over_time();
        engine.unit_mut(UnitRef::player(0)).buffs.upsert(regen);

        engine.tick_modifiers();
        assert_eq!(engine.unit(UnitRef::player(0)).current_hp(), 100);
        assert!(engine.unit(UnitRef::player(0)).buffs.is_empty());
    }

    #[test]
    fn turn_rolls_over_once_everyone_has_acted() {
        let mut engine = engine(vec![character("p0", 50)], vec![character("e0", 50)]);
        engine.start_battle();

        // clock advance, then p0 acts, then e0 acts
        engine.update();
        assert_eq!(engine.state().turn, 1);
        engine.update();
        assert_eq!(engine.state().turn, 1);
        assert_eq!(engine.unit(UnitRef::player(0)).action_timer, 50);
        engine.update();
        assert_eq!(engine.state().turn, 2);
        assert_eq!(engine.unit(UnitRef::enemy(0)).action_timer, 50);

        let rollovers: Vec<_> = engine
            .state()
            .log
            .iter()
            .filter(|e| e.category == LogCategory::Turn)
            .collect();
        assert_eq!(rollovers.len(), 1);
        assert_eq!(rollovers[0].message, "Turn 2 begins");
        assert_eq!(rollovers[0].turn, 2);
    }

    #[test]
    fn fast_units_reset_to_the_minimum_interval() {
        let mut engine = engine(vec![character("p0", 95)], vec![character("e0", 10)]);
        engine.start_battle();
        assert_eq!(engine.unit(UnitRef::player(0)).action_timer, 5);

        engine.update();
        assert_eq!(engine.unit(UnitRef::player(0)).action_timer, 0);
        assert_eq!(engine.unit(UnitRef::enemy(0)).action_timer, 85);
        engine.update();
        assert_eq!(engine.unit(UnitRef::player(0)).action_timer, 10);
    }

    #[test]
    fn speed_above_the_ceiling_starts_ready() {
        let mut engine = engine(vec![character("p0", 130)], vec![character("e0", 10)]);
        engine.start_battle();
        assert_eq!(engine.next_in_line(), Some((UnitRef::player(0), 0)));
    }
}
