//! The five-stat block shared by characters, trait modules and artifacts.

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Identifies one of the five character stats.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, AsRefStr, EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StatKind {
    Hp,
    Atk,
    Def,
    Spd,
    Crit,
}

impl StatKind {
    pub const ALL: [StatKind; 5] = [
        StatKind::Hp,
        StatKind::Atk,
        StatKind::Def,
        StatKind::Spd,
        StatKind::Crit,
    ];
}

/// A value per stat.
///
/// `Stats<i32>` is a character's stat block, `Stats<f64>` carries per-stat
/// multipliers (class multipliers, attribute distributions).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats<T> {
    pub hp: T,
    pub atk: T,
    pub def: T,
    pub spd: T,
    pub crit: T,
}

/// Integer stat block carried by characters and combatants.
pub type StatBlock = Stats<i32>;

/// Per-stat multipliers.
pub type StatFactors = Stats<f64>;

impl<T: Copy> Stats<T> {
    pub const fn new(hp: T, atk: T, def: T, spd: T, crit: T) -> Self {
        Self {
            hp,
            atk,
            def,
            spd,
            crit,
        }
    }

    /// Same value for every stat.
    pub const fn splat(value: T) -> Self {
        Self::new(value, value, value, value, value)
    }

    #[inline]
    pub fn get(&self, kind: StatKind) -> T {
        match kind {
            StatKind::Hp => self.hp,
            StatKind::Atk => self.atk,
            StatKind::Def => self.def,
            StatKind::Spd => self.spd,
            StatKind::Crit => self.crit,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, kind: StatKind) -> &mut T {
        match kind {
            StatKind::Hp => &mut self.hp,
            StatKind::Atk => &mut self.atk,
            StatKind::Def => &mut self.def,
            StatKind::Spd => &mut self.spd,
            StatKind::Crit => &mut self.crit,
        }
    }

    #[inline]
    pub fn set(&mut self, kind: StatKind, value: T) {
        *self.get_mut(kind) = value;
    }

    /// Applies `f` to every stat.
    pub fn map<U: Copy>(self, mut f: impl FnMut(StatKind, T) -> U) -> Stats<U> {
        Stats {
            hp: f(StatKind::Hp, self.hp),
            atk: f(StatKind::Atk, self.atk),
            def: f(StatKind::Def, self.def),
            spd: f(StatKind::Spd, self.spd),
            crit: f(StatKind::Crit, self.crit),
        }
    }

    /// Combines two blocks stat by stat.
    pub fn zip_with<U: Copy, V: Copy>(
        self,
        other: Stats<U>,
        mut f: impl FnMut(T, U) -> V,
    ) -> Stats<V> {
        Stats {
            hp: f(self.hp, other.hp),
            atk: f(self.atk, other.atk),
            def: f(self.def, other.def),
            spd: f(self.spd, other.spd),
            crit: f(self.crit, other.crit),
        }
    }
}

impl StatFactors {
    /// Neutral multipliers.
    pub const ONE: StatFactors = Stats::splat(1.0);
}

impl StatBlock {
    /// Promotes the block to floating point for multiplicative pipelines.
    pub fn to_f64(self) -> Stats<f64> {
        self.map(|_, value| f64::from(value))
    }
}
