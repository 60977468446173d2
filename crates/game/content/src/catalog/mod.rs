//! Built-in catalogs implementing the core oracles.
//!
//! [`TraitCatalog::builtin`] and [`ArtifactCatalog::builtin`] are
//! process-wide, lazily built and never mutated. File-backed catalogs are
//! produced by the loaders and behave the same way once constructed.

mod artifacts;
mod attributes;
mod classes;
mod names;
mod races;
mod specials;
mod styles;

use std::sync::LazyLock;

use arena_core::{
    Artifact, ArtifactOracle, AttributeModule, ClassModule, CombatStyleModule, NameTables,
    RaceModule, SpecialAbilityModule, Synergy, TraitOracle,
};

static BUILTIN_TRAITS: LazyLock<TraitCatalog> = LazyLock::new(|| {
    TraitCatalog::new(
        races::builtin(),
        classes::builtin(),
        attributes::builtin(),
        specials::builtin(),
        styles::builtin(),
        names::builtin(),
    )
});

static BUILTIN_ARTIFACTS: LazyLock<ArtifactCatalog> = LazyLock::new(|| {
    ArtifactCatalog::new(
        artifacts::builtin_artifacts(),
        artifacts::builtin_synergies(),
    )
});

/// Trait modules for all five dimensions plus the name tables.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TraitCatalog {
    races: Vec<RaceModule>,
    classes: Vec<ClassModule>,
    attributes: Vec<AttributeModule>,
    special_abilities: Vec<SpecialAbilityModule>,
    combat_styles: Vec<CombatStyleModule>,
    names: NameTables,
}

impl TraitCatalog {
    pub fn new(
        races: Vec<RaceModule>,
        classes: Vec<ClassModule>,
        attributes: Vec<AttributeModule>,
        special_abilities: Vec<SpecialAbilityModule>,
        combat_styles: Vec<CombatStyleModule>,
        names: NameTables,
    ) -> Self {
        Self {
            races,
            classes,
            attributes,
            special_abilities,
            combat_styles,
            names,
        }
    }

    /// The shipped catalog: ten modules per dimension, five standard and
    /// five comedic.
    pub fn builtin() -> &'static Self {
        &BUILTIN_TRAITS
    }
}

impl TraitOracle for TraitCatalog {
    fn races(&self) -> &[RaceModule] {
        &self.races
    }

    fn classes(&self) -> &[ClassModule] {
        &self.classes
    }

    fn attributes(&self) -> &[AttributeModule] {
        &self.attributes
    }

    fn special_abilities(&self) -> &[SpecialAbilityModule] {
        &self.special_abilities
    }

    fn combat_styles(&self) -> &[CombatStyleModule] {
        &self.combat_styles
    }

    fn names(&self) -> &NameTables {
        &self.names
    }
}

/// Artifacts on offer and the synergies between them.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArtifactCatalog {
    artifacts: Vec<Artifact>,
    #[cfg_attr(feature = "serde", serde(default))]
    synergies: Vec<Synergy>,
}

impl ArtifactCatalog {
    pub fn new(artifacts: Vec<Artifact>, synergies: Vec<Synergy>) -> Self {
        Self {
            artifacts,
            synergies,
        }
    }

    /// The shipped catalog of 20 artifacts and 3 synergies.
    pub fn builtin() -> &'static Self {
        &BUILTIN_ARTIFACTS
    }
}

impl ArtifactOracle for ArtifactCatalog {
    fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    fn synergies(&self) -> &[Synergy] {
        &self.synergies
    }
}
