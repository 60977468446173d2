use arena_core::NameTables;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|&w| w.into()).collect()
}

pub(crate) fn builtin() -> NameTables {
    NameTables {
        hero_prefixes: words(&[
            "Brave",
            "Fearless",
            "Legendary",
            "Mysterious",
            "Shadow",
            "Radiant",
            "Chaos",
            "Order",
            "Just",
            "Wicked",
        ]),
        hero_roots: words(&[
            "Alpha", "Omega", "Sebas", "Atlas", "Nova", "Orion", "Cassandra", "Draco", "Hera",
            "Colt",
        ]),
        hero_suffixes: words(&[
            "Guardian",
            "Breaker",
            "Conqueror",
            "Explorer",
            "Walker",
            "Hunter",
            "King",
            "Warrior",
            "Master",
            "Herald",
        ]),
        monster_types: words(&[
            "Goblin",
            "Troll",
            "Lizardman",
            "Skeleton",
            "Zombie",
            "Ghost",
            "Demon",
            "Elemental",
            "Behemoth",
            "Swarm",
        ]),
        monster_ranks: words(&[
            "Grunt",
            "Elite",
            "Chief",
            "General",
            "King",
            "Overlord",
            "Lord",
            "Ruler",
            "Destroyer",
            "Calamity",
        ]),
    }
}
