//! Special abilities.
//!
//! The ability *name* picks the special-attack branch in battle (fire, ice,
//! holy, meme keywords) and the *id* picks the always-on passive, so renaming
//! an entry changes how it fights.

use arena_core::SpecialAbilityModule;

fn special(
    id: &str,
    name: &str,
    description: &str,
    effects: [&str; 2],
    skill: &str,
) -> SpecialAbilityModule {
    SpecialAbilityModule {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        effects: effects.iter().map(|&e| e.into()).collect(),
        skills: vec![skill.into()],
    }
}

pub(crate) fn builtin() -> Vec<SpecialAbilityModule> {
    vec![
        special(
            "fire",
            "Fire Affinity",
            "Deals extra fire damage, takes extra water damage.",
            ["Fire damage +30%", "Water damage taken +20%"],
            "Flame Jet",
        ),
        special(
            "water",
            "Water Affinity",
            "Deals extra water damage, takes extra lightning damage.",
            ["Water damage +30%", "Lightning damage taken +20%"],
            "Water Surge",
        ),
        special(
            "earth",
            "Earth Affinity",
            "Raises defense at the cost of speed.",
            ["Defense +25%", "Speed -10%"],
            "Rock Armor",
        ),
        special(
            "wind",
            "Wind Affinity",
            "Raises speed and evasion.",
            ["Speed +25%", "Evasion +15%"],
            "Wind Step",
        ),
        special(
            "lightning",
            "Lightning Affinity",
            "Raises crit and speed.",
            ["Crit +20%", "Speed +15%"],
            "Chain Lightning",
        ),
        special(
            "meme_power",
            "Meme Awakening",
            "Attacks with internet memes for mental damage.",
            ["Meme damage +50%", "Social resistance -20%"],
            "Outdated Meme Barrage",
        ),
        special(
            "coffee_addict",
            "Coffee Addict",
            "Coffee makes it fast, until the crash.",
            ["Speed +40%", "-10% HP per turn after turn 4"],
            "Caffeine Frenzy",
        ),
        special(
            "crypto_hodler",
            "Diamond Hands",
            "Randomly gains or loses gold.",
            ["50% chance: gold +30% after battle", "50% chance: gold -20% after battle"],
            "Buy-the-Dip Rebound",
        ),
        special(
            "social_media_star",
            "Influencer Aura",
            "Draws fire, but sometimes recovers health.",
            ["Targeted first +30%", "20% chance per turn to recover 10% HP"],
            "Livestream Tips",
        ),
        special(
            "procrastinator",
            "Procrastinator",
            "Acts slower but hits harder.",
            ["Speed -25%", "Attack +35%"],
            "Deadline Burst",
        ),
    ]
}
