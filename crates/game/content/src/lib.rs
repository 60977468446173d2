//! Data-driven content definitions and loaders.
//!
//! This crate houses the static game content and provides loaders for data
//! files:
//! - Trait modules for the five character dimensions plus name tables
//! - Artifacts and artifact synergies
//! - Battle configuration (data-driven via TOML)
//!
//! Content is consumed through the core oracles ([`arena_core::TraitOracle`],
//! [`arena_core::ArtifactOracle`]) and never appears in battle state.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{ArtifactCatalog, TraitCatalog};

#[cfg(feature = "loaders")]
pub use loaders::{ArtifactLoader, CatalogLoader, ConfigLoader, ContentFactory, LoadResult};
