//! Action and target selection per combat style.
//!
//! Every [`CombatStyle`] maps to a [`StyleStrategy`]: a plain function from a
//! read-only [`StyleContext`] to a [`StyleDecision`]. Quirky styles roll their
//! override first and fall back to [`standard`] selection otherwise. The
//! engine applies the decision: announcement, then granted buffs, then the
//! action itself.

use strum::{AsRefStr, Display};

use crate::env::{CombatStyle, RngOracle};
use crate::state::{Combatant, LogCategory, SPECIAL_COOLDOWN, Team, UnitRef};
use crate::stats::{Modifier, StatKind};

/// What a unit does on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActionKind {
    Attack,
    Defend,
    Special,
    /// Buffs an ally; no further resolution.
    Support,
    /// Turn passes without an action.
    Skip,
}

pub const LOW_HP_RATIO: f64 = 0.3;
pub const LOW_HP_DEFEND_CHANCE: f64 = 0.6;
pub const SPECIAL_CHANCE: f64 = 0.4;

pub const TROLL_CHANCE: f64 = 0.3;
pub const TROLL_MISHAP_CHANCE: f64 = 0.1;
pub const AFK_CHANCE: f64 = 0.25;
pub const PAID_BOOST_CHANCE: f64 = 0.1;
pub const COACHING_CHANCE: f64 = 0.4;
pub const RAGE_HP_RATIO: f64 = 0.5;
pub const RAGE_CHANCE: f64 = 0.5;

pub const AFK_ENERGY: &str = "AFK Energy";
pub const PAID_BOOST: &str = "Paid Boost";
pub const TACTICAL_COACHING: &str = "Tactical Coaching";
pub const RAGE: &str = "Rage";

/// Read-only view of the acting unit and its surroundings.
pub struct StyleContext<'a> {
    pub actor: UnitRef,
    pub unit: &'a Combatant,
    /// Living opponents in roster order.
    pub opponents: Vec<(UnitRef, &'a Combatant)>,
    /// Living allies in roster order, excluding the actor.
    pub allies: Vec<(UnitRef, &'a Combatant)>,
}

impl<'a> StyleContext<'a> {
    pub fn new(actor: UnitRef, players: &'a [Combatant], enemies: &'a [Combatant]) -> Self {
        let (own, other) = match actor.team {
            Team::Player => (players, enemies),
            Team::Enemy => (enemies, players),
        };
        let living = |team: Team, roster: &'a [Combatant]| {
            roster
                .iter()
                .enumerate()
                .filter(|(_, unit)| unit.is_alive())
                .map(move |(index, unit)| (UnitRef::new(team, index), unit))
        };

        Self {
            actor,
            unit: &own[actor.index],
            opponents: living(actor.team.opponent(), other).collect(),
            allies: living(actor.team, own)
                .filter(|(unit_ref, _)| *unit_ref != actor)
                .collect(),
        }
    }
}

/// Outcome of action selection.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleDecision {
    pub action: ActionKind,
    pub target: Option<UnitRef>,
    /// Modifiers granted before the action resolves.
    pub grants: Vec<(UnitRef, Modifier)>,
    /// Log line emitted before anything else.
    pub announcement: Option<(String, LogCategory)>,
}

impl StyleDecision {
    pub fn new(action: ActionKind, target: Option<UnitRef>) -> Self {
        Self {
            action,
            target,
            grants: Vec::new(),
            announcement: None,
        }
    }

    fn grant(mut self, unit: UnitRef, modifier: Modifier) -> Self {
        self.grants.push((unit, modifier));
        self
    }

    fn announce(mut self, message: String, category: LogCategory) -> Self {
        self.announcement = Some((message, category));
        self
    }
}

/// Selection function of a combat style.
pub type StyleStrategy = fn(&StyleContext<'_>, &mut dyn RngOracle) -> StyleDecision;

/// Looks up the strategy of a combat style.
pub fn strategy(style: CombatStyle) -> StyleStrategy {
    match style {
        CombatStyle::Trolling => trolling,
        CombatStyle::Afk => afk,
        CombatStyle::PayToWin => pay_to_win,
        CombatStyle::BackseatGaming => backseat_gaming,
        CombatStyle::Ragequit => ragequit,
        CombatStyle::Aggressive
        | CombatStyle::Defensive
        | CombatStyle::Support
        | CombatStyle::Tactical
        | CombatStyle::Berserk => standard,
    }
}

/// Picks an action from the unit's condition.
///
/// Below 30% hp there is a 60% chance to defend. Otherwise a unit with skills
/// and no special cooldown uses its special 40% of the time. Everything else
/// attacks.
pub fn select_action(unit: &Combatant, rng: &mut (impl RngOracle + ?Sized)) -> ActionKind {
    if unit.hp_ratio() < LOW_HP_RATIO && rng.chance(LOW_HP_DEFEND_CHANCE) {
        return ActionKind::Defend;
    }
    if unit.has_special() && unit.cooldown(SPECIAL_COOLDOWN) == 0 && rng.chance(SPECIAL_CHANCE) {
        return ActionKind::Special;
    }
    ActionKind::Attack
}

/// Picks a target among living opponents.
///
/// Aggressive units focus the lowest hp ratio, tactical units the lowest
/// defense (first in roster order on ties). Everyone else picks at random.
pub fn select_target(
    unit: &Combatant,
    opponents: &[(UnitRef, &Combatant)],
    rng: &mut (impl RngOracle + ?Sized),
) -> Option<UnitRef> {
    if opponents.is_empty() {
        return None;
    }
    match unit.character.combat_style {
        CombatStyle::Aggressive => opponents
            .iter()
            .min_by(|(_, a), (_, b)| a.hp_ratio().total_cmp(&b.hp_ratio()))
            .map(|(target, _)| *target),
        CombatStyle::Tactical => opponents
            .iter()
            .min_by_key(|(_, target)| target.stats().def)
            .map(|(target, _)| *target),
        _ => Some(opponents[rng.index(opponents.len())].0),
    }
}

fn random_opponent(ctx: &StyleContext<'_>, rng: &mut dyn RngOracle) -> Option<UnitRef> {
    if ctx.opponents.is_empty() {
        return None;
    }
    Some(ctx.opponents[rng.index(ctx.opponents.len())].0)
}

fn percent_of_atk(unit: &Combatant, share: f64) -> i32 {
    (f64::from(unit.stats().atk) * share).round() as i32
}

/// Default selection: [`select_action`] then [`select_target`].
pub fn standard(ctx: &StyleContext<'_>, rng: &mut dyn RngOracle) -> StyleDecision {
    let action = select_action(ctx.unit, rng);
    let target = select_target(ctx.unit, &ctx.opponents, rng);
    StyleDecision::new(action, target)
}

fn trolling(ctx: &StyleContext<'_>, rng: &mut dyn RngOracle) -> StyleDecision {
    if !rng.chance(TROLL_CHANCE) {
        return standard(ctx, rng);
    }

    const ACTIONS: [ActionKind; 3] = [ActionKind::Attack, ActionKind::Defend, ActionKind::Special];
    let action = ACTIONS[rng.index(ACTIONS.len())];

    if rng.chance(TROLL_MISHAP_CHANCE) {
        StyleDecision::new(action, Some(ctx.actor)).announce(
            format!("{} tries to show off and hurts themselves!", ctx.unit.name()),
            LogCategory::Special,
        )
    } else {
        StyleDecision::new(action, random_opponent(ctx, rng))
    }
}

fn afk(ctx: &StyleContext<'_>, rng: &mut dyn RngOracle) -> StyleDecision {
    if !rng.chance(AFK_CHANCE) {
        return standard(ctx, rng);
    }
    let energy = Modifier::new(AFK_ENERGY, StatKind::Atk, ctx.unit.stats().atk, 1);
    StyleDecision::new(ActionKind::Skip, None)
        .grant(ctx.actor, energy)
        .announce(
            format!("{} seems to be AFK and skips the turn.", ctx.unit.name()),
            LogCategory::Special,
        )
}

fn pay_to_win(ctx: &StyleContext<'_>, rng: &mut dyn RngOracle) -> StyleDecision {
    if ctx.unit.team != Team::Player {
        return standard(ctx, rng);
    }

    let boosted = rng.chance(PAID_BOOST_CHANCE);
    let target = select_target(ctx.unit, &ctx.opponents, rng);
    let decision = StyleDecision::new(ActionKind::Attack, target);
    if !boosted {
        return decision;
    }
    let boost = Modifier::new(PAID_BOOST, StatKind::Atk, percent_of_atk(ctx.unit, 0.3), 2);
    decision.grant(ctx.actor, boost).announce(
        format!("{} pays to win and powers up!", ctx.unit.name()),
        LogCategory::Special,
    )
}

fn backseat_gaming(ctx: &StyleContext<'_>, rng: &mut dyn RngOracle) -> StyleDecision {
    if !ctx.allies.is_empty() && rng.chance(COACHING_CHANCE) {
        let (ally_ref, ally) = ctx.allies[rng.index(ctx.allies.len())];
        let value = percent_of_atk(ally, 0.15);
        let coaching = Modifier::new(TACTICAL_COACHING, StatKind::Atk, value, 3);
        return StyleDecision::new(ActionKind::Support, Some(ally_ref))
            .grant(ally_ref, coaching)
            .announce(
                format!("{} coaches {} to fight harder!", ctx.unit.name(), ally.name()),
                LogCategory::Buff,
            );
    }
    let target = select_target(ctx.unit, &ctx.opponents, rng);
    StyleDecision::new(ActionKind::Attack, target)
}

fn ragequit(ctx: &StyleContext<'_>, rng: &mut dyn RngOracle) -> StyleDecision {
    if ctx.unit.hp_ratio() >= RAGE_HP_RATIO || !rng.chance(RAGE_CHANCE) {
        return standard(ctx, rng);
    }
    let target = select_target(ctx.unit, &ctx.opponents, rng);
    let rage = Modifier::new(RAGE, StatKind::Atk, ctx.unit.stats().atk, 2);
    StyleDecision::new(ActionKind::Attack, target)
        .grant(ctx.actor, rage)
        .announce(
            format!("{} rages! Attack doubled!", ctx.unit.name()),
            LogCategory::Special,
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;
    use crate::state::Character;
    use crate::stats::StatBlock;

    fn unit(name: &str, style: CombatStyle, team: Team, atk: i32, def: i32) -> Combatant {
        let stats = StatBlock::new(100, atk, def, 10, 0);
        let character = Character::new(name, 1, stats, team == Team::Player).with_combat_style(style);
        Combatant::new(character, team)
    }

    fn foe() -> Combatant {
        unit("foe", CombatStyle::Defensive, Team::Enemy, 20, 10)
    }

    fn decide(style: CombatStyle, ctx: &StyleContext<'_>, rolls: &[f64]) -> StyleDecision {
        strategy(style)(ctx, &mut ScriptedRng::new(rolls.to_vec()))
    }

    #[test]
    fn low_hp_units_defend() {
        let mut wounded = unit("wounded", CombatStyle::Defensive, Team::Player, 20, 10);
        wounded.take_damage(80);
        let mut rng = ScriptedRng::new(vec![0.5, 0.7]);
        assert_eq!(select_action(&wounded, &mut rng), ActionKind::Defend);
        assert_eq!(select_action(&wounded, &mut rng), ActionKind::Attack);
    }

    #[test]
    fn special_needs_skills_and_no_cooldown() {
        let stats = StatBlock::new(100, 20, 10, 10, 0);
        let character = Character::new("caster", 1, stats, true).with_skills(["Fireball"]);
        let mut caster = Combatant::new(character, Team::Player);
        let mut rng = ScriptedRng::new(vec![0.1]);
        assert_eq!(select_action(&caster, &mut rng), ActionKind::Special);

        caster.set_cooldown(crate::state::SPECIAL_COOLDOWN, 2);
        assert_eq!(select_action(&caster, &mut rng), ActionKind::Attack);

        let plain = unit("plain", CombatStyle::Defensive, Team::Player, 20, 10);
        assert_eq!(select_action(&plain, &mut rng), ActionKind::Attack);
    }

    #[test]
    fn aggressive_and_tactical_targeting() {
        let armored = unit("armored", CombatStyle::Defensive, Team::Enemy, 20, 50);
        let mut bruised = unit("bruised", CombatStyle::Defensive, Team::Enemy, 20, 30);
        bruised.take_damage(60);
        let soft = unit("soft", CombatStyle::Defensive, Team::Enemy, 20, 5);
        let opponents = [
            (UnitRef::enemy(0), &armored),
            (UnitRef::enemy(1), &bruised),
            (UnitRef::enemy(2), &soft),
        ];

        let aggressive = unit("a", CombatStyle::Aggressive, Team::Player, 20, 10);
        let tactical = unit("t", CombatStyle::Tactical, Team::Player, 20, 10);
        let mut rng = ScriptedRng::new(vec![0.0]);
        assert_eq!(
            select_target(&aggressive, &opponents, &mut rng),
            Some(UnitRef::enemy(1))
        );
        assert_eq!(
            select_target(&tactical, &opponents, &mut rng),
            Some(UnitRef::enemy(2))
        );
    }

    #[test]
    fn afk_skips_and_charges_up() {
        let players = [unit("idler", CombatStyle::Afk, Team::Player, 24, 10)];
        let enemies = [foe()];
        let ctx = StyleContext::new(UnitRef::player(0), &players, &enemies);

        let decision = decide(CombatStyle::Afk, &ctx, &[0.1]);
        assert_eq!(decision.action, ActionKind::Skip);
        let (who, buff) = &decision.grants[0];
        assert_eq!(*who, UnitRef::player(0));
        assert_eq!((buff.name.as_str(), buff.value, buff.duration), (AFK_ENERGY, 24, 1));
    }

    #[test]
    fn pay_to_win_only_works_for_players() {
        let players = [unit("hero", CombatStyle::Defensive, Team::Player, 20, 10)];
        let enemies = [unit("whale", CombatStyle::PayToWin, Team::Enemy, 20, 10)];
        let ctx = StyleContext::new(UnitRef::enemy(0), &players, &enemies);
        let decision = decide(CombatStyle::PayToWin, &ctx, &[0.05]);
        assert_eq!(decision.action, ActionKind::Attack);
        assert!(decision.grants.is_empty());

        let players = [unit("whale", CombatStyle::PayToWin, Team::Player, 25, 10)];
        let enemies = [foe()];
        let ctx = StyleContext::new(UnitRef::player(0), &players, &enemies);
        let decision = decide(CombatStyle::PayToWin, &ctx, &[0.05]);
        assert_eq!(decision.target, Some(UnitRef::enemy(0)));
        assert_eq!(decision.grants[0].1.value, 8);
        assert_eq!(decision.grants[0].1.duration, 2);
    }

    #[test]
    fn backseat_gamer_coaches_other_allies() {
        let players = [
            unit("coach", CombatStyle::BackseatGaming, Team::Player, 20, 10),
            unit("pupil", CombatStyle::Defensive, Team::Player, 40, 10),
        ];
        let enemies = [foe()];
        let ctx = StyleContext::new(UnitRef::player(0), &players, &enemies);
        assert_eq!(ctx.allies.len(), 1);

        let decision = decide(CombatStyle::BackseatGaming, &ctx, &[0.1, 0.0]);
        assert_eq!(decision.action, ActionKind::Support);
        let (who, buff) = &decision.grants[0];
        assert_eq!(*who, UnitRef::player(1));
        assert_eq!(
            (buff.name.as_str(), buff.value, buff.duration),
            (TACTICAL_COACHING, 6, 3)
        );
    }

    #[test]
    fn lone_backseat_gamer_attacks() {
        let players = [unit("coach", CombatStyle::BackseatGaming, Team::Player, 20, 10)];
        let enemies = [foe()];
        let ctx = StyleContext::new(UnitRef::player(0), &players, &enemies);
        let decision = decide(CombatStyle::BackseatGaming, &ctx, &[0.0]);
        assert_eq!(decision.action, ActionKind::Attack);
        assert_eq!(decision.target, Some(UnitRef::enemy(0)));
    }

    #[test]
    fn ragequit_needs_low_hp() {
        let mut players = [unit("hothead", CombatStyle::Ragequit, Team::Player, 30, 10)];
        let enemies = [foe()];
        {
            let ctx = StyleContext::new(UnitRef::player(0), &players, &enemies);
            assert!(decide(CombatStyle::Ragequit, &ctx, &[0.0]).grants.is_empty());
        }

        players[0].take_damage(60);
        let ctx = StyleContext::new(UnitRef::player(0), &players, &enemies);
        let decision = decide(CombatStyle::Ragequit, &ctx, &[0.2, 0.0]);
        assert_eq!(decision.action, ActionKind::Attack);
        assert_eq!(decision.grants[0].1.name, RAGE);
        assert_eq!(decision.grants[0].1.value, 30);
    }

    #[test]
    fn trolls_can_hit_themselves() {
        let players = [unit("troll", CombatStyle::Trolling, Team::Player, 20, 10)];
        let enemies = [foe()];
        let ctx = StyleContext::new(UnitRef::player(0), &players, &enemies);
        // troll roll, action index 0 (attack), mishap roll
        let decision = decide(CombatStyle::Trolling, &ctx, &[0.1, 0.0, 0.05]);
        assert_eq!(decision.action, ActionKind::Attack);
        assert_eq!(decision.target, Some(UnitRef::player(0)));
        assert!(decision.announcement.is_some());
    }
}
