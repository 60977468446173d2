//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use arena_core::BattleConfig;

use crate::catalog::{ArtifactCatalog, TraitCatalog};
use crate::loaders::{ArtifactLoader, CatalogLoader, ConfigLoader, LoadResult};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── artifacts.json
/// └── traits/
///     ├── races.ron
///     ├── classes.ron
///     ├── attributes.ron
///     ├── specials.ron
///     ├── styles.ron
///     └── names.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the trait catalog from the `traits/` directory.
    pub fn load_traits(&self) -> LoadResult<TraitCatalog> {
        CatalogLoader::load(&self.data_dir.join("traits"))
    }

    /// Load artifacts and synergies from `artifacts.json`.
    pub fn load_artifacts(&self) -> LoadResult<ArtifactCatalog> {
        ArtifactLoader::load(&self.data_dir.join("artifacts.json"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
