//! Battle configuration loader.

use std::path::Path;

use arena_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys that are absent keep their [`BattleConfig::default`] value.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing BattleConfig
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        let config: BattleConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        anyhow::ensure!(
            config.min_action_interval > 0,
            "min_action_interval must be positive, got {}",
            config.min_action_interval
        );
        anyhow::ensure!(config.max_log_entries > 0, "max_log_entries must be positive");

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "max_steps = 200\nspecial_cooldown = 5\n").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.max_steps, 200);
        assert_eq!(config.special_cooldown, 5);
        assert_eq!(config.base_action_interval, 100);
        assert_eq!(config.max_log_entries, 100);
    }

    #[test]
    fn non_positive_interval_is_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "min_action_interval = 0\n").unwrap();

        assert!(ConfigLoader::load(file.path()).is_err());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "max_steps = \"many\"\n").unwrap();

        let err = ConfigLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
