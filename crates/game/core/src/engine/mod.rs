//! Battle state machine.
//!
//! The [`BattleEngine`] owns both rosters as [`Combatant`]s and advances the
//! battle one [`update`](BattleEngine::update) at a time. A step either
//! resolves the action of the unit whose timer reached zero or moves the
//! shared clock forward. Modifiers and cooldowns then tick for living units.
//!
//! Lifecycle: not started → active → terminal. Once an outcome is set the
//! engine never mutates again.

mod action;
mod auto;
mod errors;
mod hook;
mod style;
mod turns;

pub use action::{DEFEND_PERCENT, DEFENSIVE_STANCE};
pub use auto::auto_battle;
pub use errors::BattleError;
pub use hook::{BattleEvent, BattleHook, HookContext, HookSet, hook_set};
pub use style::{
    AFK_ENERGY, ActionKind, PAID_BOOST, RAGE, StyleContext, StyleDecision, StyleStrategy,
    TACTICAL_COACHING, select_action, select_target, standard, strategy,
};

use std::sync::Arc;

use crate::config::BattleConfig;
use crate::env::{PcgRng, RngOracle};
use crate::state::{
    BattleState, Character, Combatant, LogCategory, LogEntry, Outcome, Team, UnitRef,
};

/// Summary handed back to the orchestration layer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleResult {
    pub victory: bool,
    pub turns: u32,
    pub log: Vec<LogEntry>,
    /// Living player units.
    pub remaining_heroes: usize,
    /// Downed enemy units.
    pub killed_enemies: usize,
}

/// Runs a single battle between two rosters.
pub struct BattleEngine<R: RngOracle = PcgRng> {
    players: Vec<Combatant>,
    enemies: Vec<Combatant>,
    state: BattleState,
    config: BattleConfig,
    rng: R,
    hooks: HookSet,
    pending: Vec<BattleEvent>,
}

impl<R: RngOracle> BattleEngine<R> {
    /// Snapshots both rosters into combatants at full health.
    ///
    /// An empty player roster is rejected. An empty enemy roster is accepted
    /// and ends in victory on the first update.
    pub fn new(
        players: impl IntoIterator<Item = Character>,
        enemies: impl IntoIterator<Item = Character>,
        config: BattleConfig,
        rng: R,
    ) -> Result<Self, BattleError> {
        let players: Vec<Combatant> = players
            .into_iter()
            .map(|c| Combatant::new(c, Team::Player))
            .collect();
        if players.is_empty() {
            return Err(BattleError::invalid_roster("player roster is empty"));
        }
        let enemies = enemies
            .into_iter()
            .map(|c| Combatant::new(c, Team::Enemy))
            .collect();

        Ok(Self {
            players,
            enemies,
            state: BattleState::new(&config),
            config,
            rng,
            hooks: hook_set([]),
            pending: Vec::new(),
        })
    }

    /// Registers hooks, replacing any previous set.
    pub fn with_hooks(mut self, hooks: impl IntoIterator<Item = Arc<dyn BattleHook>>) -> Self {
        self.hooks = hook_set(hooks);
        self
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn players(&self) -> &[Combatant] {
        &self.players
    }

    pub fn enemies(&self) -> &[Combatant] {
        &self.enemies
    }

    pub fn unit(&self, unit: UnitRef) -> &Combatant {
        &self.roster(unit.team)[unit.index]
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Activates the battle and seeds every action timer from speed.
    ///
    /// Has no effect once the battle has started.
    pub fn start_battle(&mut self) {
        if self.state.is_active || self.state.is_terminal() {
            return;
        }
        self.state.is_active = true;
        self.state.turn = 1;
        self.state.log.clear();

        let config = self.config;
        for unit in self.players.iter_mut().chain(self.enemies.iter_mut()) {
            unit.action_timer = config.initial_timer(unit.stats().spd);
        }

        self.state.record("The battle begins!", LogCategory::Info);
        tracing::info!(
            players = self.players.len(),
            enemies = self.enemies.len(),
            "battle started"
        );
        self.emit(BattleEvent::BattleStarted);
        self.dispatch_events();
    }

    /// Advances the battle by one step and returns the outcome, if any.
    ///
    /// Calling this before [`start_battle`](Self::start_battle) or after the
    /// battle ended does nothing.
    pub fn update(&mut self) -> Option<Outcome> {
        if self.state.is_terminal() || !self.state.is_active {
            return self.state.outcome;
        }
        self.step();
        self.dispatch_events();
        self.state.outcome
    }

    /// Ends the battle with `outcome` if it has not ended yet.
    pub fn force_outcome(&mut self, outcome: Outcome, message: impl Into<String>) {
        if self.state.is_terminal() {
            return;
        }
        self.state.record(message, LogCategory::System);
        self.finish(outcome);
        self.dispatch_events();
    }

    /// Steps until a terminal state or `config.max_steps` updates have
    /// elapsed.
    ///
    /// A battle that is still undecided afterwards is forced to defeat.
    pub fn run(&mut self) -> BattleResult {
        let max_steps = self.config.max_steps;
        self.start_battle();
        let mut steps = 0;
        while !self.state.is_terminal() && steps < max_steps {
            self.update();
            steps += 1;
        }
        if !self.state.is_terminal() {
            tracing::debug!(steps, "battle hit the step limit");
            self.force_outcome(
                Outcome::Defeat,
                format!("The battle drags on past {max_steps} steps and is called off. Defeat!"),
            );
        }
        self.result()
    }

    pub fn result(&self) -> BattleResult {
        BattleResult {
            victory: self.state.outcome == Some(Outcome::Victory),
            turns: self.state.turn,
            log: self.state.log.to_vec(),
            remaining_heroes: self.players.iter().filter(|u| u.is_alive()).count(),
            killed_enemies: self.enemies.iter().filter(|u| !u.is_alive()).count(),
        }
    }

    fn step(&mut self) {
        if self.players.iter().all(|u| !u.is_alive()) {
            self.state
                .record("Your party has been wiped out. Defeat!", LogCategory::Defeat);
            self.finish(Outcome::Defeat);
            return;
        }
        if self.enemies.iter().all(|u| !u.is_alive()) {
            self.state
                .record("All enemies defeated. Victory!", LogCategory::Victory);
            self.finish(Outcome::Victory);
            return;
        }

        if let Some((actor, timer)) = self.next_in_line() {
            if timer <= 0 {
                self.execute_action(actor);
                let spd = self.unit(actor).stats().spd;
                self.unit_mut(actor).action_timer = self.config.reset_timer(spd);
                self.check_turn_rollover();
            } else {
                self.advance_timers(timer);
            }
        }

        self.tick_modifiers();
        self.tick_cooldowns();
    }

    fn finish(&mut self, outcome: Outcome) {
        self.state.outcome = Some(outcome);
        self.state.is_active = false;
        self.state.active_fighter = None;
        tracing::info!(%outcome, turns = self.state.turn, "battle ended");
        self.emit(BattleEvent::BattleEnded { outcome });
    }

    fn roster(&self, team: Team) -> &[Combatant] {
        match team {
            Team::Player => &self.players,
            Team::Enemy => &self.enemies,
        }
    }

    fn unit_mut(&mut self, unit: UnitRef) -> &mut Combatant {
        match unit.team {
            Team::Player => &mut self.players[unit.index],
            Team::Enemy => &mut self.enemies[unit.index],
        }
    }

    /// Every unit in scan order: players first, then enemies.
    fn unit_refs(&self) -> impl Iterator<Item = UnitRef> + use<R> {
        let players = (0..self.players.len()).map(UnitRef::player);
        let enemies = (0..self.enemies.len()).map(UnitRef::enemy);
        players.chain(enemies)
    }

    fn emit(&mut self, event: BattleEvent) {
        if !self.hooks.is_empty() {
            self.pending.push(event);
        }
    }

    fn dispatch_events(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let events = std::mem::take(&mut self.pending);
        let hooks = Arc::clone(&self.hooks);
        for event in &events {
            for hook in hooks.iter().filter(|h| h.should_trigger(event)) {
                tracing::trace!(hook = hook.name(), ?event, "running battle hook");
                let mut ctx = HookContext {
                    players: &mut self.players,
                    enemies: &mut self.enemies,
                    state: &mut self.state,
                    rng: &mut self.rng,
                };
                hook.apply(event, &mut ctx);
            }
        }
    }
}
