//! Common error infrastructure for arena-core.
//!
//! This module provides the shared severity classification and the
//! [`GameError`] trait implemented by every error type in the crate.
//! Domain-specific errors (e.g. [`BattleError`](crate::engine::BattleError))
//! live next to the code that raises them.
//!
//! Most of the rules engine is total: out-of-range inputs are clamped and
//! empty selections degrade to no-ops. Errors are reserved for contract
//! violations at construction time.

/// Severity level of an error, used for categorization.
///
/// The rules engine only rejects invalid input; everything else is clamped
/// or degrades to a no-op, so there is a single level today.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: empty roster handed to the battle engine
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
        }
    }
}

/// Common trait for all arena-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BattleError;
    use crate::generation::GenerationError;

    #[test]
    fn core_errors_are_validation_errors() {
        let roster = BattleError::InvalidRoster {
            reason: "player roster is empty".into(),
        };
        assert_eq!(roster.severity(), ErrorSeverity::Validation);
        assert_eq!(roster.error_code(), "BATTLE_INVALID_ROSTER");
        assert_eq!(roster.to_string(), "invalid roster: player roster is empty");

        let catalog = GenerationError::EmptyCatalog { dimension: "race" };
        assert_eq!(catalog.severity().as_str(), "validation");
        assert_eq!(catalog.error_code(), "GENERATION_EMPTY_CATALOG");
    }
}
