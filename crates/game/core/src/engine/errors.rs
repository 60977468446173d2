//! Error types for battle construction.

use crate::error::{ErrorSeverity, GameError};

/// Errors surfaced while setting up a battle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleError {
    /// The rosters cannot produce a meaningful battle.
    #[error("invalid roster: {reason}")]
    InvalidRoster { reason: String },
}

impl BattleError {
    pub(crate) fn invalid_roster(reason: impl Into<String>) -> Self {
        Self::InvalidRoster {
            reason: reason.into(),
        }
    }
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidRoster { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRoster { .. } => "BATTLE_INVALID_ROSTER",
        }
    }
}
