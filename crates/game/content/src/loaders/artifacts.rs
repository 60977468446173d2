//! Artifact catalog loader.

use std::collections::HashSet;
use std::path::Path;

use arena_core::{ArtifactEffect, ArtifactOracle};

use crate::catalog::ArtifactCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for artifact catalogs stored as JSON.
///
/// File format:
/// ```json
/// {
///   "artifacts": [
///     {
///       "id": "lucky_coin",
///       "name": "Lucky Coin",
///       "description": "Hero crit +8.",
///       "kind": "passive",
///       "rarity": "common",
///       "effect": { "type": "hero_stat_flat", "stat": "crit", "value": 8 },
///       "flavor": "Think twice before flipping."
///     }
///   ],
///   "synergies": []
/// }
/// ```
///
/// Unrecognized effect tags load as inert effects and are reported with a
/// warning. Duplicate artifact ids and synergies requiring unknown artifacts
/// are errors.
pub struct ArtifactLoader;

impl ArtifactLoader {
    pub fn load(path: &Path) -> LoadResult<ArtifactCatalog> {
        let content = read_file(path)?;
        let catalog: ArtifactCatalog = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse artifact catalog JSON: {}", e))?;

        let mut ids = HashSet::new();
        for artifact in catalog.artifacts() {
            anyhow::ensure!(
                ids.insert(artifact.id.as_str()),
                "Duplicate artifact id '{}' in {:?}",
                artifact.id,
                path
            );
            if artifact.effect == ArtifactEffect::Unknown {
                tracing::warn!(artifact = %artifact.id, "unrecognized artifact effect");
            }
        }
        for synergy in catalog.synergies() {
            if let Some(missing) = synergy.required.iter().find(|id| !ids.contains(id.as_str())) {
                anyhow::bail!(
                    "Synergy '{}' requires unknown artifact '{}'",
                    synergy.id,
                    missing
                );
            }
        }

        tracing::debug!(
            artifacts = catalog.artifacts().len(),
            synergies = catalog.synergies().len(),
            "loaded artifact catalog"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use arena_core::{Rarity, StatKind};

    use super::*;

    fn write(contents: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), contents).unwrap();
        file
    }

    #[test]
    fn loads_the_builtin_catalog_from_json() {
        let json = serde_json::to_string_pretty(ArtifactCatalog::builtin()).unwrap();
        let file = write(&json);

        let loaded = ArtifactLoader::load(file.path()).unwrap();
        assert_eq!(&loaded, ArtifactCatalog::builtin());
    }

    #[test]
    fn reads_tagged_effects() {
        let file = write(
            r#"{
                "artifacts": [
                    {
                        "id": "lucky_coin",
                        "name": "Lucky Coin",
                        "description": "Hero crit +8.",
                        "kind": "passive",
                        "rarity": "common",
                        "effect": { "type": "hero_stat_flat", "stat": "crit", "value": 8 },
                        "flavor": ""
                    },
                    {
                        "id": "mystery_box",
                        "name": "Mystery Box",
                        "description": "???",
                        "kind": "meta",
                        "rarity": "epic",
                        "effect": { "type": "summon_goose" },
                        "flavor": ""
                    }
                ]
            }"#,
        );

        let catalog = ArtifactLoader::load(file.path()).unwrap();
        assert!(catalog.synergies().is_empty());

        let coin = catalog.artifact("lucky_coin").unwrap();
        assert_eq!(
            coin.effect,
            ArtifactEffect::HeroStatFlat {
                stat: StatKind::Crit,
                value: 8
            }
        );
        let mystery = catalog.artifact("mystery_box").unwrap();
        assert_eq!(mystery.rarity, Rarity::Epic);
        assert_eq!(mystery.effect, ArtifactEffect::Unknown);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let artifact = r#"{
            "id": "rubber_duck", "name": "Rubber Duck", "description": "", "kind": "passive",
            "rarity": "common", "effect": { "type": "exp_bonus", "value": 0.1 }, "flavor": ""
        }"#;
        let file = write(&format!(r#"{{ "artifacts": [{artifact}, {artifact}] }}"#));

        let err = ArtifactLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Duplicate artifact id 'rubber_duck'"));
    }

    #[test]
    fn synergy_with_unknown_requirement_is_rejected() {
        let file = write(
            r#"{
                "artifacts": [],
                "synergies": [
                    {
                        "id": "lonely",
                        "name": "Lonely",
                        "description": "",
                        "required": ["nothing"],
                        "effect": { "type": "gold_bonus", "value": 0.1 }
                    }
                ]
            }"#,
        );

        let err = ArtifactLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("unknown artifact 'nothing'"));
    }
}
