/// Battle configuration constants and tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Battle log capacity. Oldest entries are evicted first.
    pub max_log_entries: usize,
    /// Number of `update()` steps `auto_battle` runs before forcing defeat.
    pub max_steps: u32,
    /// Timer ceiling; a unit's timer is `base_action_interval - spd`.
    pub base_action_interval: i32,
    /// Lower bound of the timer a unit receives after acting.
    pub min_action_interval: i32,
    /// Cooldown (in update steps) applied after a special ability.
    pub special_cooldown: u32,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum skills a character can hold.
    pub const MAX_SKILLS: usize = 5;
    /// Highest character level.
    pub const MAX_LEVEL: u32 = 100;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_LOG_ENTRIES: usize = 100;
    pub const DEFAULT_MAX_STEPS: u32 = 30;
    pub const DEFAULT_BASE_ACTION_INTERVAL: i32 = 100;
    pub const DEFAULT_MIN_ACTION_INTERVAL: i32 = 10;
    pub const DEFAULT_SPECIAL_COOLDOWN: u32 = 3;

    pub fn new() -> Self {
        Self {
            max_log_entries: Self::DEFAULT_MAX_LOG_ENTRIES,
            max_steps: Self::DEFAULT_MAX_STEPS,
            base_action_interval: Self::DEFAULT_BASE_ACTION_INTERVAL,
            min_action_interval: Self::DEFAULT_MIN_ACTION_INTERVAL,
            special_cooldown: Self::DEFAULT_SPECIAL_COOLDOWN,
        }
    }

    #[must_use]
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }

    #[must_use]
    pub fn with_max_log_entries(mut self, max_log_entries: usize) -> Self {
        self.max_log_entries = max_log_entries;
        self
    }

    #[must_use]
    pub fn with_special_cooldown(mut self, special_cooldown: u32) -> Self {
        self.special_cooldown = special_cooldown;
        self
    }

    /// Timer a unit starts the battle with.
    pub fn initial_timer(&self, spd: i32) -> i32 {
        (self.base_action_interval - spd).max(0)
    }

    /// Timer a unit receives after it acts.
    pub fn reset_timer(&self, spd: i32) -> i32 {
        (self.base_action_interval - spd).max(self.min_action_interval)
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
