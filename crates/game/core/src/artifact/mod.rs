//! Artifact offers, synergy checks and effect application.

pub mod apply;
pub mod choices;
pub mod synergy;

pub use apply::{AppliedArtifacts, apply_effects, apply_stat_effect};
pub use choices::{DEFAULT_CHOICE_COUNT, generate_choices, rarity_weight, rarity_weights};
pub use synergy::check_synergies;
