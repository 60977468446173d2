use crate::error::{ErrorSeverity, GameError};

/// Errors raised while generating characters.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// The catalog has no modules for a dimension, so nothing can be drawn.
    #[error("trait catalog has no {dimension} modules")]
    EmptyCatalog { dimension: &'static str },
}

impl GameError for GenerationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyCatalog { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyCatalog { .. } => "GENERATION_EMPTY_CATALOG",
        }
    }
}
