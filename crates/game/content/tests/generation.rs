use arena_content::TraitCatalog;
use arena_core::generation::{boss_rarity, is_boss_level};
use arena_core::{
    PcgRng, Rarity, ScriptedRng, StatKind, TraitOracle, derive_power, generate_character,
    generate_enemies, generate_hero_shop, upgrade_hero,
};

#[test]
fn level_one_common_hero() {
    let catalog = TraitCatalog::builtin();
    let mut rng = PcgRng::new(7);

    for _ in 0..100 {
        let hero = generate_character(catalog, 1, Rarity::Common, true, &mut rng).unwrap();
        assert_eq!(hero.level, 1);
        assert_eq!(hero.rarity, Rarity::Common);
        assert!(hero.is_hero);
        assert!(hero.skills.len() <= 3, "{:?}", hero.skills);
        for kind in StatKind::ALL {
            assert!(hero.stats.get(kind) >= 0, "{} {kind} < 0", hero.name);
        }
        assert_eq!(hero.power, derive_power(&hero.stats));
        assert!(hero.cost >= 5);
    }
}

#[test]
fn same_seed_same_character() {
    let catalog = TraitCatalog::builtin();
    let a = generate_character(catalog, 5, Rarity::Rare, true, &mut PcgRng::new(42)).unwrap();
    let b = generate_character(catalog, 5, Rarity::Rare, true, &mut PcgRng::new(42)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn generated_modules_come_from_the_catalog() {
    let catalog = TraitCatalog::builtin();
    let mut rng = PcgRng::new(3);
    let hero = generate_character(catalog, 20, Rarity::Epic, true, &mut rng).unwrap();

    assert!(catalog.race(&hero.race.id).is_some());
    assert!(catalog.class(&hero.class.id).is_some());
    assert!(catalog.special_ability(&hero.special_ability.id).is_some());
    assert!(catalog.combat_style(hero.combat_style).is_some());

    let prefix_matches = catalog
        .names()
        .hero_prefixes
        .iter()
        .any(|p| hero.name.starts_with(p.as_str()));
    assert!(prefix_matches, "unexpected hero name {}", hero.name);
}

#[test]
fn enemies_have_monster_names_and_no_cost() {
    let catalog = TraitCatalog::builtin();
    let mut rng = PcgRng::new(11);
    let enemy = generate_character(catalog, 4, Rarity::Uncommon, false, &mut rng).unwrap();

    assert!(!enemy.is_hero);
    assert_eq!(enemy.cost, 0);
    let type_matches = catalog
        .names()
        .monster_types
        .iter()
        .any(|t| enemy.name.starts_with(t.as_str()));
    assert!(type_matches, "unexpected monster name {}", enemy.name);
}

#[test]
fn out_of_range_levels_are_clamped() {
    let catalog = TraitCatalog::builtin();
    let mut rng = PcgRng::new(5);
    let low = generate_character(catalog, 0, Rarity::Common, true, &mut rng).unwrap();
    let high = generate_character(catalog, 500, Rarity::Common, true, &mut rng).unwrap();
    assert_eq!(low.level, 1);
    assert_eq!(high.level, 100);
}

#[test]
fn hero_shop_fills_every_slot() {
    let catalog = TraitCatalog::builtin();
    let mut rng = PcgRng::new(99);
    let shop = generate_hero_shop(catalog, 10, 5, &mut rng).unwrap();

    assert_eq!(shop.len(), 5);
    for hero in &shop {
        assert!(hero.is_hero);
        assert!((8..=12).contains(&hero.level), "level {}", hero.level);
        assert_eq!(hero.power, derive_power(&hero.stats));
    }
    assert!(generate_hero_shop(catalog, 10, 0, &mut rng).unwrap().is_empty());
}

#[test]
fn regular_levels_field_the_requested_enemies() {
    let catalog = TraitCatalog::builtin();
    let mut rng = PcgRng::new(1);
    let enemies = generate_enemies(catalog, 7, 3, &mut rng).unwrap();

    assert_eq!(enemies.len(), 3);
    assert!(enemies.iter().all(|e| !e.is_hero && e.cost == 0));
    assert!(enemies.iter().all(|e| (6..=8).contains(&e.level)));
}

#[test]
fn boss_levels_field_one_fewer_with_a_boss_first() {
    let catalog = TraitCatalog::builtin();
    let mut rng = PcgRng::new(2);

    assert!(is_boss_level(30));
    let enemies = generate_enemies(catalog, 30, 3, &mut rng).unwrap();
    assert_eq!(enemies.len(), 2);
    assert_eq!(enemies[0].rarity, boss_rarity(30));
    assert_eq!(enemies[0].rarity, Rarity::Legendary);

    assert_eq!(generate_enemies(catalog, 10, 1, &mut rng).unwrap().len(), 1);
    assert!(generate_enemies(catalog, 10, 0, &mut rng).unwrap().is_empty());
}

#[test]
fn upgrading_with_a_generated_sacrifice() {
    let catalog = TraitCatalog::builtin();
    let mut rng = PcgRng::new(8);
    let mut base = generate_character(catalog, 10, Rarity::Rare, true, &mut rng).unwrap();
    base.level = 10;
    let mut sacrifice = generate_character(catalog, 9, Rarity::Common, true, &mut rng).unwrap();
    sacrifice.level = 9;

    // 0.99 never passes the 30% skill roll
    let upgraded = upgrade_hero(&base, sacrifice.clone(), &mut ScriptedRng::new(vec![0.99]));
    assert_eq!(upgraded.level, 13);
    assert_eq!(upgraded.skills, base.skills);
    for kind in StatKind::ALL {
        let gain = sacrifice.stats.get(kind) * 20 / 100;
        assert_eq!(upgraded.stats.get(kind), base.stats.get(kind) + gain);
    }
    assert_eq!(upgraded.power, derive_power(&upgraded.stats));
    assert!(upgraded.power >= base.power);
}
