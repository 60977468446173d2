//! Named, timed stat modifiers (buffs and debuffs).
//!
//! A combatant holds at most one modifier per name in each set. Re-applying
//! a name refreshes it: the duration becomes the longer of the two and the
//! value only accumulates when the incoming modifier is stackable.
//!
//! # Tick-based Duration
//!
//! Durations count battle update steps. [`ModifierSet::tick`] decrements
//! every entry and purges the ones that reach zero.

use std::collections::BTreeMap;

use super::block::StatKind;

/// A temporary stat modifier.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifier {
    pub name: String,
    pub stat: StatKind,
    pub value: i32,
    /// Remaining update steps.
    pub duration: u32,
    pub stackable: bool,
    /// Damage-over-time (in a debuff set) or heal-over-time (in a buff set).
    pub is_dot: bool,
}

impl Modifier {
    pub fn new(name: impl Into<String>, stat: StatKind, value: i32, duration: u32) -> Self {
        Self {
            name: name.into(),
            stat,
            value,
            duration,
            stackable: false,
            is_dot: false,
        }
    }

    #[must_use]
    pub fn stackable(mut self) -> Self {
        self.stackable = true;
        self
    }

    #[must_use]
    pub fn over_time(mut self) -> Self {
        self.is_dot = true;
        self
    }
}

/// Modifiers keyed by name.
///
/// Iteration order is by name, which keeps DoT resolution order stable for
/// a given seed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModifierSet {
    entries: BTreeMap<String, Modifier>,
}

impl ModifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a modifier or refreshes the existing entry with the same name.
    pub fn upsert(&mut self, modifier: Modifier) {
        match self.entries.get_mut(&modifier.name) {
            Some(existing) => {
                existing.duration = existing.duration.max(modifier.duration);
                if modifier.stackable {
                    existing.value = existing.value.saturating_add(modifier.value);
                }
            }
            None => {
                self.entries.insert(modifier.name.clone(), modifier);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Modifier> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Modifier> {
        self.entries.values()
    }

    /// Active modifiers affecting `stat`.
    pub fn for_stat(&self, stat: StatKind) -> impl Iterator<Item = &Modifier> {
        self.entries.values().filter(move |m| m.stat == stat)
    }

    /// Sum of active values affecting `stat`.
    pub fn total(&self, stat: StatKind) -> i32 {
        self.for_stat(stat).map(|m| m.value).sum()
    }

    /// Over-time entries as `(name, value)` pairs, in iteration order.
    pub fn over_time(&self) -> Vec<(String, i32)> {
        self.entries
            .values()
            .filter(|m| m.is_dot)
            .map(|m| (m.name.clone(), m.value))
            .collect()
    }

    /// Decrements every duration and purges expired entries.
    ///
    /// Returns the names that expired.
    pub fn tick(&mut self) -> Vec<String> {
        let mut expired = Vec::new();
        self.entries.retain(|name, modifier| {
            modifier.duration = modifier.duration.saturating_sub(1);
            if modifier.duration == 0 {
                expired.push(name.clone());
                false
            } else {
                true
            }
        });
        expired
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_stackable_refresh_keeps_value_and_longest_duration() {
        let mut set = ModifierSet::new();
        set.upsert(Modifier::new("defend", StatKind::Def, 5, 2));
        set.upsert(Modifier::new("defend", StatKind::Def, 9, 1));

        let entry = set.get("defend").unwrap();
        assert_eq!(entry.value, 5);
        assert_eq!(entry.duration, 2);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn stackable_refresh_accumulates_value() {
        let mut set = ModifierSet::new();
        set.upsert(Modifier::new("rage", StatKind::Atk, 10, 2).stackable());
        set.upsert(Modifier::new("rage", StatKind::Atk, 10, 3).stackable());

        let entry = set.get("rage").unwrap();
        assert_eq!(entry.value, 20);
        assert_eq!(entry.duration, 3);
    }

    #[test]
    fn tick_purges_expired_entries() {
        let mut set = ModifierSet::new();
        set.upsert(Modifier::new("short", StatKind::Atk, 1, 1));
        set.upsert(Modifier::new("long", StatKind::Atk, 2, 2));

        assert_eq!(set.total(StatKind::Atk), 3);
        assert_eq!(set.tick(), vec!["short".to_string()]);
        assert_eq!(set.total(StatKind::Atk), 2);
        assert_eq!(set.tick(), vec!["long".to_string()]);
        assert!(set.is_empty());
    }

    #[test]
    fn over_time_lists_only_dot_entries() {
        let mut set = ModifierSet::new();
        set.upsert(Modifier::new("burn", StatKind::Hp, 4, 3).over_time());
        set.upsert(Modifier::new("chill", StatKind::Spd, 3, 2));
        assert_eq!(set.over_time(), vec![("burn".to_string(), 4)]);
    }
}
