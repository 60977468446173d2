use arena_core::{AttributeModule, StatFactors};

fn attribute(
    id: &str,
    name: &str,
    description: &str,
    [hp, atk, def, spd, crit]: [f64; 5],
) -> AttributeModule {
    AttributeModule {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        stat_distribution: StatFactors::new(hp, atk, def, spd, crit),
    }
}

pub(crate) fn builtin() -> Vec<AttributeModule> {
    vec![
        attribute(
            "balanced",
            "Balanced",
            "Even growth across the board.",
            [1.0; 5],
        ),
        attribute(
            "tank",
            "Tank",
            "Exceptional health and defense.",
            [1.5, 0.8, 1.4, 0.7, 0.6],
        ),
        attribute(
            "glass",
            "Glass Cannon",
            "Huge attack and crit, paper-thin otherwise.",
            [0.6, 1.7, 0.5, 1.2, 1.8],
        ),
        attribute(
            "swift",
            "Swift",
            "Blazing speed, strikes first.",
            [0.8, 1.1, 0.7, 1.8, 1.2],
        ),
        attribute(
            "juggernaut",
            "Juggernaut",
            "Hits hard and shrugs off blows, but slowly.",
            [1.2, 1.4, 1.3, 0.5, 0.9],
        ),
        attribute(
            "yolo",
            "YOLO",
            "All attack, nothing else matters.",
            [0.5, 2.5, 0.3, 1.0, 1.5],
        ),
        attribute(
            "tryhard",
            "Tryhard",
            "Grinds every stat, gains a little on each.",
            [1.1; 5],
        ),
        attribute(
            "noob",
            "Noob",
            "Slightly weak everywhere, but incredibly lucky.",
            [0.9, 0.9, 0.9, 0.9, 2.0],
        ),
        attribute(
            "whiner",
            "Punching Bag",
            "Took so many hits it stopped feeling them.",
            [1.3, 0.7, 1.6, 0.8, 0.6],
        ),
        attribute(
            "op",
            "Overpowered",
            "The designer's favorite. Every stat over budget.",
            [1.3; 5],
        ),
    ]
}
