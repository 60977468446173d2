use std::sync::Arc;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use arena_content::TraitCatalog;
use arena_core::{
    BattleConfig, BattleEngine, BattleError, BattleEvent, BattleHook, Character, HookContext,
    LogCategory, Outcome, PcgRng, ScriptedRng, StatBlock, TriggerKind, auto_battle,
    generate_enemies, generate_hero_shop,
};

fn fighter(name: &str, hp: i32, atk: i32, spd: i32) -> Character {
    Character::new(name, 1, StatBlock::new(hp, atk, 0, spd, 0), true)
}

fn generated_rosters(seed: u64, level: u32) -> (Vec<Character>, Vec<Character>) {
    let catalog = TraitCatalog::builtin();
    let mut rng = PcgRng::new(seed);
    let heroes = generate_hero_shop(catalog, level, 3, &mut rng).unwrap();
    let enemies = generate_enemies(catalog, level, 3, &mut rng).unwrap();
    (heroes, enemies)
}

#[test]
fn hp_stays_in_bounds_for_generated_battles() {
    for seed in 0..40 {
        let (heroes, enemies) = generated_rosters(seed, 1 + seed as u32 % 25);
        let config = BattleConfig::default();
        let mut engine = BattleEngine::new(heroes, enemies, config, PcgRng::new(seed)).unwrap();
        engine.start_battle();

        for _ in 0..500 {
            engine.update();
            for unit in engine.players().iter().chain(engine.enemies()) {
                assert!(unit.current_hp() >= 0);
                assert!(unit.current_hp() <= unit.max_hp());
            }
            if engine.is_terminal() {
                break;
            }
        }
        assert!(engine.state().log.len() <= config.max_log_entries);
    }
}

#[test]
fn updates_past_the_end_change_nothing() {
    let (heroes, enemies) = generated_rosters(5, 3);
    let mut engine = BattleEngine::new(
        heroes,
        enemies,
        BattleConfig::default(),
        PcgRng::new(5),
    )
    .unwrap();
    engine.start_battle();
    engine.force_outcome(Outcome::Victory, "Called early.");

    let players = engine.players().to_vec();
    let enemies = engine.enemies().to_vec();
    let log = engine.state().log.clone();
    for _ in 0..3 {
        assert_eq!(engine.update(), Some(Outcome::Victory));
    }
    engine.start_battle();
    engine.force_outcome(Outcome::Defeat, "Too late.");

    assert_eq!(engine.players(), players.as_slice());
    assert_eq!(engine.enemies(), enemies.as_slice());
    assert_eq!(engine.state().log, log);
    assert!(!engine.state().is_active);
    assert_eq!(engine.state().active_fighter, None);
}

#[test]
fn defeat_wins_when_both_sides_are_down() {
    let mut engine = BattleEngine::new(
        [fighter("Ghost Hero", 0, 10, 10)],
        [fighter("Ghost Foe", 0, 10, 10)],
        BattleConfig::default(),
        ScriptedRng::new(vec![0.5]),
    )
    .unwrap();
    engine.start_battle();

    assert_eq!(engine.update(), Some(Outcome::Defeat));
    let last = engine.state().log.last().unwrap();
    assert_eq!(last.category, LogCategory::Defeat);
}

#[test]
fn empty_enemy_team_is_a_victory_after_one_update() {
    let mut engine = BattleEngine::new(
        [fighter("Lonely", 100, 10, 10)],
        Vec::<Character>::new(),
        BattleConfig::default(),
        PcgRng::new(1),
    )
    .unwrap();
    engine.start_battle();
    assert_eq!(engine.outcome(), None);
    assert_eq!(engine.update(), Some(Outcome::Victory));

    let nobody: [Character; 0] = [];
    let result = auto_battle([fighter("Lonely", 100, 10, 10)], nobody, 30, PcgRng::new(1)).unwrap();
    assert!(result.victory);
    assert_eq!(result.turns, 1);
    assert_eq!(result.killed_enemies, 0);
    assert_eq!(result.remaining_heroes, 1);
}

#[test]
fn empty_player_roster_is_rejected() {
    let result = auto_battle(
        Vec::<Character>::new(),
        [fighter("Foe", 100, 10, 10)],
        30,
        PcgRng::new(1),
    );
    assert!(matches!(result, Err(BattleError::InvalidRoster { .. })));
}

#[test]
fn overkill_ends_at_zero_with_a_death_entry() {
    // 0.99 never crits, defends or specials; targets are picked at index 0
    let result = auto_battle(
        [fighter("Giant", 1000, 150, 50)],
        [fighter("Slime", 100, 1, 10)],
        30,
        ScriptedRng::new(vec![0.99]),
    )
    .unwrap();

    assert!(result.victory);
    assert_eq!(result.killed_enemies, 1);
    let death = result
        .log
        .iter()
        .find(|e| e.category == LogCategory::Death)
        .unwrap();
    assert_eq!(death.message, "Slime has fallen!");
    assert_eq!(result.log.last().unwrap().category, LogCategory::Victory);
}

#[test]
fn stalemates_are_called_off_as_defeat() {
    let result = auto_battle(
        [fighter("Wall", 10_000, 1, 10)],
        [fighter("Other Wall", 10_000, 1, 10)],
        5,
        ScriptedRng::new(vec![0.99]),
    )
    .unwrap();

    assert!(!result.victory);
    let last = result.log.last().unwrap();
    assert_eq!(last.category, LogCategory::System);
    assert!(last.message.contains("5 steps"));
}

#[test]
fn seeded_battles_replay_identically() {
    let replay = |seed: u64| {
        let (heroes, enemies) = generated_rosters(seed, 12);
        let result = auto_battle(heroes, enemies, 200, PcgRng::new(seed)).unwrap();
        let messages: Vec<String> = result.log.into_iter().map(|e| e.message).collect();
        (result.victory, result.turns, messages)
    };
    assert_eq!(replay(17), replay(17));
}

/// Counts lifecycle events it is subscribed to.
struct Tally {
    starts: AtomicUsize,
    ends: AtomicUsize,
}

impl BattleHook for Tally {
    fn name(&self) -> &str {
        "tally"
    }

    fn triggers(&self) -> &[TriggerKind] {
        &[TriggerKind::BattleStart, TriggerKind::BattleEnd]
    }

    fn apply(&self, event: &BattleEvent, _ctx: &mut HookContext<'_>) {
        match event {
            BattleEvent::BattleStarted => self.starts.fetch_add(1, Ordering::SeqCst),
            _ => self.ends.fetch_add(1, Ordering::SeqCst),
        };
    }
}

/// Brings a downed hero back at half health, a limited number of times.
struct Rebirth {
    uses: AtomicU32,
}

impl BattleHook for Rebirth {
    fn name(&self) -> &str {
        "rebirth"
    }

    fn triggers(&self) -> &[TriggerKind] {
        &[TriggerKind::OnDeath]
    }

    fn apply(&self, event: &BattleEvent, ctx: &mut HookContext<'_>) {
        let BattleEvent::UnitDowned { unit, .. } = event else {
            return;
        };
        if unit.team != arena_core::Team::Player {
            return;
        }
        let charged = self
            .uses
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if !charged {
            return;
        }
        let Some(hero) = ctx.unit_mut(*unit) else {
            return;
        };
        let amount = hero.max_hp() / 2;
        hero.heal(amount);
        let message = format!("{} rises from the ashes!", hero.name());
        ctx.record(message, LogCategory::Effect);
    }
}

#[test]
fn hooks_see_start_and_end_once() {
    let tally = Arc::new(Tally {
        starts: AtomicUsize::new(0),
        ends: AtomicUsize::new(0),
    });
    let (heroes, enemies) = generated_rosters(9, 4);
    let mut engine = BattleEngine::new(heroes, enemies, BattleConfig::default(), PcgRng::new(9))
        .unwrap()
        .with_hooks([tally.clone() as Arc<dyn BattleHook>]);

    engine.run();
    engine.update();

    assert_eq!(tally.starts.load(Ordering::SeqCst), 1);
    assert_eq!(tally.ends.load(Ordering::SeqCst), 1);
}

#[test]
fn death_hooks_can_revive_heroes() {
    let rebirth: Arc<dyn BattleHook> = Arc::new(Rebirth {
        uses: AtomicU32::new(1),
    });
    let mut engine = BattleEngine::new(
        [fighter("Phoenix", 100, 10, 50)],
        [fighter("Brute", 1000, 500, 10)],
        BattleConfig::default(),
        ScriptedRng::new(vec![0.99]),
    )
    .unwrap()
    .with_hooks([rebirth]);

    let result = engine.run();

    assert!(!result.victory);
    let revivals = result
        .log
        .iter()
        .filter(|e| e.message == "Phoenix rises from the ashes!")
        .count();
    let deaths = result
        .log
        .iter()
        .filter(|e| e.category == LogCategory::Death)
        .count();
    assert_eq!(revivals, 1);
    assert_eq!(deaths, 2);
}
