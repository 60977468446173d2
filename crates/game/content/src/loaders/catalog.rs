//! Trait catalog loader.
//!
//! Loads one RON file per dimension into a [`TraitCatalog`].

use std::path::Path;

use arena_core::NameTables;
use serde::de::DeserializeOwned;

use crate::catalog::TraitCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for trait catalogs stored as RON files.
///
/// Expected directory structure:
/// ```text
/// traits/
///   ├── races.ron
///   ├── classes.ron
///   ├── attributes.ron
///   ├── specials.ron
///   ├── styles.ron
///   └── names.ron
/// ```
///
/// Every module file is a list of records, e.g. `races.ron`:
/// ```ron
/// [
///     (
///         id: "dwarf",
///         name: "Dwarf",
///         description: "Sturdy and stubborn.",
///         stat_bonus: (hp: 20, atk: 0, def: 15, spd: -10, crit: 0),
///         abilities: ["Stone Skin"],
///     ),
/// ]
/// ```
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load every dimension from `traits_dir`.
    ///
    /// Fails if a file is missing or malformed, or if a dimension is empty.
    pub fn load(traits_dir: &Path) -> LoadResult<TraitCatalog> {
        let races = load_list(&traits_dir.join("races.ron"), "race")?;
        let classes = load_list(&traits_dir.join("classes.ron"), "class")?;
        let attributes = load_list(&traits_dir.join("attributes.ron"), "attribute")?;
        let specials = load_list(&traits_dir.join("specials.ron"), "special ability")?;
        let styles = load_list(&traits_dir.join("styles.ron"), "combat style")?;

        let names_path = traits_dir.join("names.ron");
        let names: NameTables = ron::from_str(&read_file(&names_path)?).map_err(|e| {
            anyhow::anyhow!("Failed to parse name tables RON at {:?}: {}", names_path, e)
        })?;

        tracing::debug!(dir = %traits_dir.display(), "loaded trait catalog");
        Ok(TraitCatalog::new(
            races, classes, attributes, specials, styles, names,
        ))
    }
}

fn load_list<T: DeserializeOwned>(path: &Path, dimension: &str) -> LoadResult<Vec<T>> {
    let content = read_file(path)?;
    let modules: Vec<T> = ron::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {} RON at {:?}: {}", dimension, path, e))?;
    anyhow::ensure!(
        !modules.is_empty(),
        "{} file {:?} has no modules",
        dimension,
        path
    );
    Ok(modules)
}
