//! State representation.
//!
//! Characters are plain values owned by callers. A battle copies them into
//! [`Combatant`]s and mutates only those copies, so the originals never see
//! battle damage.

pub mod battle;
pub mod character;
pub mod combatant;
pub mod run;

pub use battle::{BattleLog, BattleState, LogCategory, LogEntry, Outcome};
pub use character::{Character, MIN_HERO_COST, Skills, TraitRef, hero_cost, total_power};
pub use combatant::{Combatant, SPECIAL_COOLDOWN, Team, UnitRef};
pub use run::RunState;
