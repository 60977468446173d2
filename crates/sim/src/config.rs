//! Environment-driven defaults for the simulation harness.
use std::env;

/// Defaults used when the matching command-line flag is absent.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Seed for every roll of the run. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Run level used for the shop, artifact offers and enemies.
    pub level: u32,
}

impl SimConfig {
    pub const DEFAULT_LEVEL: u32 = 1;

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_SEED` - Seed for the run (default: random)
    /// - `ARENA_LEVEL` - Run level, clamped to 1..=100 (default: 1)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("ARENA_SEED") {
            config.seed = Some(seed);
        }
        if let Some(level) = read_env::<u32>("ARENA_LEVEL") {
            config.level = level.clamp(1, 100);
        }

        config
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            level: Self::DEFAULT_LEVEL,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
