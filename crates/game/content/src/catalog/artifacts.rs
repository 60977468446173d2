//! Built-in artifacts and synergies.

use arena_core::env::{EffectProc, TeamSizeCondition};
use arena_core::{
    Artifact, ArtifactEffect, ArtifactKind, Rarity, StatKind, Synergy, TriggeredEffect,
};

use ArtifactKind::{Conditional, Meta, Passive, Transformative};

struct Entry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    kind: ArtifactKind,
    rarity: Rarity,
    flavor: &'static str,
}

impl Entry {
    fn with(self, effect: ArtifactEffect) -> Artifact {
        Artifact {
            id: self.id.into(),
            name: self.name.into(),
            description: self.description.into(),
            kind: self.kind,
            rarity: self.rarity,
            effect,
            flavor: self.flavor.into(),
        }
    }
}

fn percent(stat: StatKind, value: f64) -> ArtifactEffect {
    ArtifactEffect::HeroStatPercent { stat, value }
}

fn on_attack(procs: &[(f64, TriggeredEffect)]) -> ArtifactEffect {
    ArtifactEffect::OnAttack {
        procs: procs
            .iter()
            .map(|(chance, effect)| EffectProc {
                chance: *chance,
                effect: effect.clone(),
            })
            .collect(),
    }
}

pub(crate) fn builtin_artifacts() -> Vec<Artifact> {
    vec![
        // ----- common stat boosts -----
        Entry {
            id: "health_crystal",
            name: "Health Crystal",
            description: "Hero max HP +15%.",
            kind: Passive,
            rarity: Rarity::Common,
            flavor: "A crystal brimming with life. Legend says it is a shard of a dragon's heart.",
        }
        .with(percent(StatKind::Hp, 0.15)),
        Entry {
            id: "strength_talisman",
            name: "Strength Talisman",
            description: "Hero attack +12%.",
            kind: Passive,
            rarity: Rarity::Common,
            flavor: "A tribal warrior's charm humming with raw strength.",
        }
        .with(percent(StatKind::Atk, 0.12)),
        Entry {
            id: "iron_armor",
            name: "Iron Armor Plate",
            description: "Hero defense +15%.",
            kind: Passive,
            rarity: Rarity::Common,
            flavor: "A plate from a lost kingdom's armory, still as solid as the day it was forged.",
        }
        .with(percent(StatKind::Def, 0.15)),
        Entry {
            id: "swift_boots",
            name: "Swift Boots",
            description: "Hero speed +10%.",
            kind: Passive,
            rarity: Rarity::Common,
            flavor: "They say these boots can outrun the wind. The soles wear out fast.",
        }
        .with(percent(StatKind::Spd, 0.1)),
        Entry {
            id: "lucky_coin",
            name: "Lucky Coin",
            description: "Hero crit +8.",
            kind: Passive,
            rarity: Rarity::Common,
            flavor: "Heads is a smile, tails is doom. Think twice before flipping.",
        }
        .with(ArtifactEffect::HeroStatFlat {
            stat: StatKind::Crit,
            value: 8,
        }),
        // ----- compound and triggered -----
        Entry {
            id: "dragon_heart",
            name: "Dragon Heart",
            description: "Hero max HP +30%, regenerates 2% per turn.",
            kind: Passive,
            rarity: Rarity::Epic,
            flavor: "A true dragon's heart, still beating with ancient power.",
        }
        .with(ArtifactEffect::Multi {
            effects: vec![
                percent(StatKind::Hp, 0.3),
                ArtifactEffect::RegenPercent { value: 0.02 },
            ],
        }),
        Entry {
            id: "titans_might",
            name: "Titan's Might",
            description: "Hero attack +25%, speed -5%.",
            kind: Passive,
            rarity: Rarity::Rare,
            flavor: "A titan's fury, too heavy to swing with ease.",
        }
        .with(ArtifactEffect::Multi {
            effects: vec![percent(StatKind::Atk, 0.25), percent(StatKind::Spd, -0.05)],
        }),
        Entry {
            id: "vampiric_fang",
            name: "Vampiric Fang",
            description: "Attacks have a 15% chance to heal 10% of the damage dealt.",
            kind: Conditional,
            rarity: Rarity::Uncommon,
            flavor: "Left behind by an old vampire clan. It is still thirsty.",
        }
        .with(on_attack(&[(0.15, TriggeredEffect::Lifesteal { value: 0.1 })])),
        Entry {
            id: "phoenix_feather",
            name: "Phoenix Feather",
            description: "The first time a hero drops to 0 HP, it returns with 50% HP.",
            kind: Conditional,
            rarity: Rarity::Epic,
            flavor: "A burning feather, the phoenix's promise of rebirth.",
        }
        .with(ArtifactEffect::OnDeath {
            uses: 1,
            effect: TriggeredEffect::Revive {
                health_percent: 0.5,
            },
        }),
        Entry {
            id: "mirror_shield",
            name: "Mirror Shield",
            description: "When hit, 20% chance to reflect 30% of the damage.",
            kind: Conditional,
            rarity: Rarity::Rare,
            flavor: "So smooth that even light bounces back.",
        }
        .with(ArtifactEffect::OnHit {
            chance: 0.2,
            effect: TriggeredEffect::ReflectDamage { value: 0.3 },
        }),
        // ----- rule changers -----
        Entry {
            id: "merchant_contract",
            name: "Merchant Contract",
            description: "Shop refresh cost -50%, hero cost +10%.",
            kind: Transformative,
            rarity: Rarity::Uncommon,
            flavor: "The fine print is very fine. Read every clause.",
        }
        .with(ArtifactEffect::ShopModifier {
            refresh_cost_modifier: -0.5,
            hero_cost_modifier: 0.1,
        }),
        Entry {
            id: "time_hourglass",
            name: "Time Hourglass",
            description: "At battle start, your heroes gain an extra action.",
            kind: Transformative,
            rarity: Rarity::Legendary,
            flavor: "The sand never runs out, as if time itself had frozen.",
        }
        .with(ArtifactEffect::BattleStart {
            chance: None,
            effect: TriggeredEffect::ExtraTurn,
        }),
        Entry {
            id: "chaos_dice",
            name: "Chaos Dice",
            description: "At battle start, one random hero stat +50% and another -25%.",
            kind: Transformative,
            rarity: Rarity::Epic,
            flavor: "The number of faces keeps changing. Nobody can predict it.",
        }
        .with(ArtifactEffect::BattleStart {
            chance: None,
            effect: TriggeredEffect::RandomStatChange,
        }),
        Entry {
            id: "wisdom_tome",
            name: "Tome of Wisdom",
            description: "Battle experience +20%.",
            kind: Meta,
            rarity: Rarity::Uncommon,
            flavor: "Holds all the world's knowledge. Shame you can't read it.",
        }
        .with(ArtifactEffect::ExpBonus { value: 0.2 }),
        Entry {
            id: "midas_touch",
            name: "Midas Touch",
            description: "Gold earned +25%.",
            kind: Meta,
            rarity: Rarity::Rare,
            flavor: "King Midas turned everything to gold with it, his daughter included.",
        }
        .with(ArtifactEffect::GoldBonus { value: 0.25 }),
        // ----- joke artifacts -----
        Entry {
            id: "rubber_duck",
            name: "Rubber Duck",
            description: "Explain the game mechanics to it when you are stuck. Attack +5%.",
            kind: Passive,
            rarity: Rarity::Common,
            flavor: "A programmer's best friend. Never answers, always listens.",
        }
        .with(percent(StatKind::Atk, 0.05)),
        Entry {
            id: "outdated_meme",
            name: "Outdated Meme",
            description: "10% chance to make the enemy cringe and skip a turn.",
            kind: Conditional,
            rarity: Rarity::Uncommon,
            flavor: "\"Nobody has used this meme in years...\" - an anonymous netizen",
        }
        .with(on_attack(&[(0.1, TriggeredEffect::Stun { duration: 1 })])),
        Entry {
            id: "social_anxiety",
            name: "Social Anxiety",
            description: "With fewer than 3 heroes, all hero stats +15%.",
            kind: Conditional,
            rarity: Rarity::Rare,
            flavor: "Few people means safety. Crowds mean panic.",
        }
        .with(ArtifactEffect::TeamSize {
            condition: TeamSizeCondition::LessThan,
            value: 3,
            effect: TriggeredEffect::AllStatsPercent { value: 0.15 },
        }),
        Entry {
            id: "stackoverflow_badge",
            name: "StackOverflow Badge",
            description: "5% chance to copy and use an enemy skill.",
            kind: Conditional,
            rarity: Rarity::Epic,
            flavor: "Copy-paste is an essential skill. Remember to cite your sources.",
        }
        .with(on_attack(&[(0.05, TriggeredEffect::CopySkill)])),
        Entry {
            id: "crypto_wallet",
            name: "Crypto Wallet",
            description: "After each battle, 50% chance to double the gold reward, 50% chance to lose it.",
            kind: Transformative,
            rarity: Rarity::Legendary,
            flavor: "It says \"TO THE MOON\", but it seems to have landed in the basement.",
        }
        .with(ArtifactEffect::BattleEnd {
            effect: TriggeredEffect::RandomGold {
                chance: 0.5,
                bonus: 1.0,
                penalty: 1.0,
            },
        }),
        Entry {
            id: "keyboard_warrior",
            name: "Keyboard Warrior",
            description: "Attacks have a 15% chance to deal triple damage and a 5% chance to hurt the wielder.",
            kind: Conditional,
            rarity: Rarity::Rare,
            flavor: "Fearless on the internet, trembling in real life.",
        }
        .with(on_attack(&[
            (0.15, TriggeredEffect::CriticalModifier { value: 3.0 }),
            (0.05, TriggeredEffect::SelfDamage { value: 0.1 }),
        ])),
    ]
}

fn synergy(
    id: &str,
    name: &str,
    description: &str,
    required: &[&str],
    effect: ArtifactEffect,
) -> Synergy {
    Synergy {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        required: required.iter().map(|&r| r.into()).collect(),
        effect,
    }
}

pub(crate) fn builtin_synergies() -> Vec<Synergy> {
    vec![
        synergy(
            "elemental_harmony",
            "Elemental Harmony",
            "All elemental damage +20%.",
            &["phoenix_feather", "iron_armor"],
            ArtifactEffect::DamageTypeBonus {
                damage_type: "elemental".into(),
                value: 0.2,
            },
        ),
        synergy(
            "warriors_spirit",
            "Warrior's Spirit",
            "Each kill restores 5% max HP.",
            &["strength_talisman", "vampiric_fang"],
            ArtifactEffect::OnKill {
                effect: TriggeredEffect::HealPercent { value: 0.05 },
            },
        ),
        synergy(
            "internet_famous",
            "Internet Famous",
            "At battle start, 30% chance to lower every enemy stat by 20%.",
            &["outdated_meme", "social_anxiety", "keyboard_warrior"],
            ArtifactEffect::BattleStart {
                chance: Some(0.3),
                effect: TriggeredEffect::EnemyStatPercent { value: -0.2 },
            },
        ),
    ]
}
