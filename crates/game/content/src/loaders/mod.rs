//! Content loaders for reading catalogs and configuration from files.
//!
//! Trait modules are RON, artifact catalogs are JSON and the battle
//! configuration is TOML. Every loader produces the same owned types the
//! built-in catalogs use, so loaded content plugs into the core oracles
//! unchanged.

pub mod artifacts;
pub mod catalog;
pub mod config;
pub mod factory;

pub use artifacts::ArtifactLoader;
pub use catalog::CatalogLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
