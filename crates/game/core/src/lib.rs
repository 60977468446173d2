//! Deterministic rules of the arena auto-battler.
//!
//! `arena-core` defines the canonical rules (stat model, character
//! generation, artifacts, the battle engine) and exposes pure APIs that are
//! reused by content loaders and offline tools. Catalog data is read through
//! the oracle traits in [`env`]; randomness always comes from an injected
//! [`RngOracle`], so a seed fully determines every roll.
pub mod artifact;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod generation;
pub mod rarity;
pub mod state;
pub mod stats;

pub use artifact::{
    AppliedArtifacts, DEFAULT_CHOICE_COUNT, apply_effects, check_synergies, generate_choices,
    rarity_weight,
};
pub use combat::{Passive, SpecialKind, calculate_damage};
pub use config::BattleConfig;
pub use engine::{
    ActionKind, BattleEngine, BattleError, BattleEvent, BattleHook, BattleResult, HookContext,
    auto_battle,
};
pub use env::{
    Artifact, ArtifactEffect, ArtifactKind, ArtifactOracle, AttributeModule, ClassModule,
    CombatStyle, CombatStyleModule, NameTables, PcgRng, RaceModule, RngOracle, ScriptedRng,
    SpecialAbilityModule, Synergy, TraitOracle, TriggerKind, TriggeredEffect,
};
pub use error::{ErrorSeverity, GameError};
pub use generation::{
    GenerationError, generate_character, generate_enemies, generate_hero_shop, upgrade_hero,
};
pub use rarity::Rarity;
pub use state::{
    BattleLog, BattleState, Character, Combatant, LogCategory, LogEntry, Outcome, RunState, Team,
    TraitRef, UnitRef,
};
pub use stats::{Modifier, ModifierSet, StatBlock, StatFactors, StatKind, derive_power};
