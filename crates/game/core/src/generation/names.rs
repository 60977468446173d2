//! Name synthesis from catalog word lists.

use crate::env::{NameTables, RngOracle};

fn pick<'a>(words: &'a [String], rng: &mut (impl RngOracle + ?Sized)) -> Option<&'a str> {
    if words.is_empty() {
        return None;
    }
    Some(words[rng.index(words.len())].as_str())
}

fn compose(parts: &[Option<&str>], fallback: &str) -> String {
    let name = parts.iter().flatten().copied().collect::<Vec<_>>().join(" ");
    if name.is_empty() {
        fallback.to_string()
    } else {
        name
    }
}

/// `prefix root suffix`, e.g. "Fearless Atlas Hunter".
pub fn hero_name(tables: &NameTables, rng: &mut (impl RngOracle + ?Sized)) -> String {
    let prefix = pick(&tables.hero_prefixes, rng);
    let root = pick(&tables.hero_roots, rng);
    let suffix = pick(&tables.hero_suffixes, rng);
    compose(&[prefix, root, suffix], "Nameless Hero")
}

/// `type rank`, e.g. "Goblin Overlord".
pub fn monster_name(tables: &NameTables, rng: &mut (impl RngOracle + ?Sized)) -> String {
    let kind = pick(&tables.monster_types, rng);
    let rank = pick(&tables.monster_ranks, rng);
    compose(&[kind, rank], "Nameless Monster")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn hero_names_use_all_three_parts() {
        let tables = NameTables {
            hero_prefixes: words(&["Brave"]),
            hero_roots: words(&["Nova"]),
            hero_suffixes: words(&["Hunter"]),
            ..NameTables::default()
        };
        assert_eq!(hero_name(&tables, &mut PcgRng::new(1)), "Brave Nova Hunter");
    }

    #[test]
    fn empty_tables_still_produce_a_name() {
        let tables = NameTables::default();
        assert_eq!(monster_name(&tables, &mut PcgRng::new(1)), "Nameless Monster");
    }
}
