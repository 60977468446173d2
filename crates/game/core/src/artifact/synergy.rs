//! Synergy detection.

use crate::env::{ArtifactOracle, Synergy};

/// Synergies whose required artifacts are all in `owned`.
pub fn check_synergies<'a>(
    catalog: &'a (impl ArtifactOracle + ?Sized),
    owned: &[impl AsRef<str>],
) -> Vec<&'a Synergy> {
    catalog
        .synergies()
        .iter()
        .filter(|synergy| {
            synergy
                .required
                .iter()
                .all(|required| owned.iter().any(|id| id.as_ref() == required))
        })
        .collect()
}
