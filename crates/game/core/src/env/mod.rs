//! Read-only collaborators injected into the rules engine.
//!
//! The core never owns content. Catalogs arrive through oracle traits and
//! randomness through [`RngOracle`], so the same rules run against the
//! built-in catalog, a file-loaded one, or test fixtures.

pub mod artifacts;
pub mod rng;
pub mod traits;

pub use artifacts::{
    Artifact, ArtifactEffect, ArtifactKind, ArtifactOracle, EffectProc, Synergy,
    TeamSizeCondition, TriggerKind, TriggeredEffect,
};
pub use rng::{PcgRng, RngOracle, ScriptedRng};
pub use traits::{
    AttributeModule, ClassModule, CombatStyle, CombatStyleModule, NameTables, RaceModule,
    SpecialAbilityModule, TraitOracle,
};
