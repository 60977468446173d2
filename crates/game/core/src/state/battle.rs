//! Battle bookkeeping: turn counter, outcome and the narrative log.

use std::collections::VecDeque;

use strum::{AsRefStr, Display};

use crate::config::BattleConfig;
use crate::state::UnitRef;

/// Terminal result of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Outcome {
    Victory,
    Defeat,
}

/// Category tag of a log entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LogCategory {
    Info,
    Damage,
    Critical,
    Defend,
    Special,
    Heal,
    Buff,
    Dot,
    Death,
    Effect,
    Turn,
    Victory,
    Defeat,
    System,
}

/// One line of the battle narrative.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    pub turn: u32,
    pub message: String,
    pub category: LogCategory,
    /// Wall-clock milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// Bounded battle log. The oldest entry is evicted once capacity is reached.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl BattleLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(BattleConfig::DEFAULT_MAX_LOG_ENTRIES)),
            capacity,
        }
    }

    pub fn push(&mut self, turn: u32, message: impl Into<String>, category: LogCategory) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            turn,
            message: message.into(),
            category,
            timestamp: chrono::Utc::now().timestamp_millis(),
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn to_vec(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }
}

impl Default for BattleLog {
    fn default() -> Self {
        Self::with_capacity(BattleConfig::DEFAULT_MAX_LOG_ENTRIES)
    }
}

/// Mutable battle status.
///
/// Lifecycle: `NotStarted` (inactive, no outcome) → `Active` → terminal
/// (`outcome` set). A terminal battle never changes again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    pub turn: u32,
    pub is_active: bool,
    pub active_fighter: Option<UnitRef>,
    pub log: BattleLog,
    pub outcome: Option<Outcome>,
}

impl BattleState {
    pub fn new(config: &BattleConfig) -> Self {
        Self {
            turn: 0,
            is_active: false,
            active_fighter: None,
            log: BattleLog::with_capacity(config.max_log_entries),
            outcome: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Appends a log entry stamped with the current turn.
    pub fn record(&mut self, message: impl Into<String>, category: LogCategory) {
        self.log.push(self.turn, message, category);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_evicts_oldest_first() {
        let mut log = BattleLog::with_capacity(3);
        for i in 0..5 {
            log.push(1, format!("entry {i}"), LogCategory::Info);
        }
        let messages: Vec<&str> = log.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["entry 2", "entry 3", "entry 4"]);
    }

    #[test]
    fn default_log_holds_one_hundred_entries() {
        let mut log = BattleLog::default();
        for i in 0..150 {
            log.push(1, format!("entry {i}"), LogCategory::Info);
        }
        assert_eq!(log.len(), 100);
        assert_eq!(log.iter().next().map(|e| e.message.as_str()), Some("entry 50"));
    }
}
