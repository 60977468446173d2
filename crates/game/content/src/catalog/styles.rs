use arena_core::{CombatStyle, CombatStyleModule};

fn style(
    style: CombatStyle,
    name: &str,
    description: &str,
    behavior: &str,
    effects: [&str; 2],
) -> CombatStyleModule {
    CombatStyleModule {
        style,
        name: name.into(),
        description: description.into(),
        behavior: behavior.into(),
        effects: effects.iter().map(|&e| e.into()).collect(),
    }
}

pub(crate) fn builtin() -> Vec<CombatStyleModule> {
    vec![
        style(
            CombatStyle::Aggressive,
            "Aggressive",
            "Goes after wounded enemies first.",
            "Targets the enemy with the lowest health percentage.",
            ["Attack +15%", "Defense -10%"],
        ),
        style(
            CombatStyle::Defensive,
            "Defensive",
            "Protects itself first and turtles up when hurt.",
            "Raises defense by 30% below half health.",
            ["Defense +20%", "Attack -5%"],
        ),
        style(
            CombatStyle::Support,
            "Support",
            "Prefers skills that help the team.",
            "Uses buffing skills whenever possible.",
            ["Healing +25%", "Attack -15%"],
        ),
        style(
            CombatStyle::Tactical,
            "Tactical",
            "Adapts its plan to the battlefield.",
            "Picks the best action for the current situation.",
            ["Crit +10%", "Speed +10%"],
        ),
        style(
            CombatStyle::Berserk,
            "Berserk",
            "The lower its health, the harder it hits.",
            "Gains 5% attack for every 10% health lost.",
            ["Max attack bonus +50%", "Defense -20%"],
        ),
        style(
            CombatStyle::Trolling,
            "Trolling",
            "Acts at random and may hurt itself.",
            "30% chance to pick a random action, 10% chance to hit itself.",
            ["Chaos +100%", "Luck +50%"],
        ),
        style(
            CombatStyle::Afk,
            "AFK",
            "Sometimes does nothing, but builds up energy.",
            "25% chance to skip a turn, next attack deals double damage.",
            ["Action interval +50%", "Crit damage +70%"],
        ),
        style(
            CombatStyle::PayToWin,
            "Pay-to-Win",
            "Spends gold mid-battle to get stronger.",
            "Can spend 1 gold per turn for +10% attack.",
            ["Gold spent +30%", "Stat boosts +30%"],
        ),
        style(
            CombatStyle::BackseatGaming,
            "Backseat Gamer",
            "Boosts allies but is weak on its own.",
            "Allies gain 15% attack, own attack -20%.",
            ["Team buffs +25%", "Personal penalty +20%"],
        ),
        style(
            CombatStyle::Ragequit,
            "Ragequitter",
            "May snap after taking a heavy hit.",
            "After losing 20% health in one hit, 50% chance to double attack and lose control.",
            ["Rage chance +50%", "Control -80%"],
        ),
    ]
}
