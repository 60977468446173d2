//! Race modules: flat stat bonuses layered on the level curve.

use arena_core::{RaceModule, StatBlock};

fn race(
    id: &str,
    name: &str,
    description: &str,
    [hp, atk, def, spd, crit]: [i32; 5],
    abilities: &[&str],
) -> RaceModule {
    RaceModule {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        stat_bonus: StatBlock::new(hp, atk, def, spd, crit),
        abilities: abilities.iter().map(|&a| a.into()).collect(),
    }
}

pub(crate) fn builtin() -> Vec<RaceModule> {
    vec![
        race(
            "human",
            "Human",
            "Adaptable and well-rounded.",
            [0, 0, 0, 0, 5],
            &["Human Tenacity"],
        ),
        race(
            "elf",
            "Elf",
            "Graceful and quick, at home at range.",
            [-10, 5, -5, 15, 10],
            &["Nature Bond"],
        ),
        race(
            "dwarf",
            "Dwarf",
            "Sturdy, stubborn and a master of the forge.",
            [20, 0, 15, -10, 0],
            &["Stone Skin"],
        ),
        race(
            "orc",
            "Orc",
            "Warlike brutes with strength to spare.",
            [15, 15, 5, -5, -5],
            &["Savage Strength"],
        ),
        race(
            "undead",
            "Undead",
            "Refuses to stay down. Terrifying at parties.",
            [0, 0, 10, -5, 0],
            &["Undying"],
        ),
        race(
            "meme",
            "Meme Lord",
            "A native of the internet who speaks only in references.",
            [-5, 10, -5, 10, 15],
            &["Full Meme Power"],
        ),
        race(
            "cat",
            "Catgirl",
            "Nya? Nya!",
            [-10, 5, -5, 20, 15],
            &["Nine Lives"],
        ),
        race(
            "programmer",
            "Programmer",
            "Runs on energy drinks and all-nighters. Hairline optional.",
            [-15, 15, -10, -5, 20],
            &["Recursive Strike"],
        ),
        race(
            "boomer",
            "Boomer",
            "Plain, hard-working and suspicious of apps.",
            [15, 10, 5, -15, -5],
            &["Overtime Spirit"],
        ),
        race(
            "zoomer",
            "Zoomer",
            "Thumbs faster than thought, socially omnipresent.",
            [-10, 0, -10, 25, 10],
            &["Spam Attack"],
        ),
    ]
}
