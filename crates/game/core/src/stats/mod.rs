//! Stat model.
//!
//! # Pipeline
//!
//! ```text
//! [ Level curve ]            base values per level
//!      ↓
//! [ Race bonus ]             additive
//!      ↓
//! [ Class / Attribute ]      multiplicative
//!      ↓
//! [ Rarity ]                 multiplicative, then a single rounding
//!      ↓
//! [ Artifacts ]              percent (floored) or flat, in acquisition order
//!      ↓
//! [ Battle modifiers ]       named buffs / debuffs, timed
//! ```
//!
//! Power is always recomputed from the final block with [`derive_power`].

pub mod block;
pub mod formula;
pub mod modifiers;

pub use block::{StatBlock, StatFactors, StatKind, Stats};
pub use formula::{apply_flat, apply_percent, derive_power, floor_scaled, percent_of};
pub use modifiers::{Modifier, ModifierSet};
