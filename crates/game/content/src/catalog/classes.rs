//! Class modules: stat multipliers and skill kits.

use arena_core::{ClassModule, StatFactors};

fn class(
    id: &str,
    name: &str,
    description: &str,
    [hp, atk, def, spd, crit]: [f64; 5],
    skills: [&str; 3],
) -> ClassModule {
    ClassModule {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        stat_multiplier: StatFactors::new(hp, atk, def, spd, crit),
        skills: skills.iter().map(|&s| s.into()).collect(),
    }
}

pub(crate) fn builtin() -> Vec<ClassModule> {
    vec![
        class(
            "warrior",
            "Warrior",
            "Front-line tank with high health and defense.",
            [1.3, 1.1, 1.3, 0.9, 0.9],
            ["Sweeping Strike", "Defensive Stance", "Battle Cry"],
        ),
        class(
            "mage",
            "Mage",
            "Back-line caster with devastating spells.",
            [0.8, 1.5, 0.7, 0.9, 1.2],
            ["Fireball", "Frost Nova", "Mana Shield"],
        ),
        class(
            "rogue",
            "Rogue",
            "Nimble assassin with high crit and speed.",
            [0.9, 1.2, 0.8, 1.4, 1.5],
            ["Backstab", "Smoke Bomb", "Sprint"],
        ),
        class(
            "priest",
            "Priest",
            "Holy healer who keeps the party standing.",
            [1.0, 0.8, 0.9, 1.0, 0.8],
            ["Healing Light", "Holy Shield", "Purify"],
        ),
        class(
            "ranger",
            "Ranger",
            "Ranged marksman who never misses twice.",
            [0.9, 1.3, 0.8, 1.2, 1.3],
            ["Aimed Shot", "Multishot", "Trap"],
        ),
        class(
            "web_dev",
            "Frontend Engineer",
            "Attacks with CSS and conjures optical illusions.",
            [0.8, 1.1, 0.7, 1.1, 1.4],
            ["JavaScript Disaster", "CSS Refactor", "Responsive Strike"],
        ),
        class(
            "influencer",
            "Influencer",
            "Buries enemies under likes and follows.",
            [0.7, 1.2, 0.6, 1.5, 1.6],
            ["Livestream Attack", "Summon Fans", "Sponsored Ad"],
        ),
        class(
            "crypto_bro",
            "Crypto Bro",
            "Breaks the enemy's spirit with price swings.",
            [1.2, 1.3, 0.8, 0.8, 2.0],
            ["Buy the Dip", "Panic Sell", "Diamond Hands"],
        ),
        class(
            "karen",
            "Karen",
            "Crushes opposition with complaints and blame.",
            [1.4, 0.9, 1.2, 0.7, 1.1],
            [
                "Speak to the Manager",
                "Passionate Speech",
                "Righteous Indignation",
            ],
        ),
        class(
            "memeologist",
            "Memeologist",
            "Shatters morale with memes nobody uses anymore.",
            [0.8, 1.4, 0.7, 1.3, 1.3],
            ["Ancient Meme", "Engagement Bait", "Anime Attack"],
        ),
    ]
}
