//! Run-level economy values touched by artifacts.

use crate::stats::floor_scaled;

/// Slice of the run state that artifact effects adjust.
///
/// Gold bookkeeping and purchases belong to the shop layer; this only
/// carries the prices it reads.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunState {
    /// Gold cost of rerolling the hero shop. Never below 1.
    pub shop_refresh_cost: u32,
    /// Accumulated fractional modifier on hero purchase prices.
    pub hero_cost_modifier: f64,
}

impl RunState {
    pub const DEFAULT_SHOP_REFRESH_COST: u32 = 2;

    pub fn new() -> Self {
        Self {
            shop_refresh_cost: Self::DEFAULT_SHOP_REFRESH_COST,
            hero_cost_modifier: 0.0,
        }
    }

    /// Hero price after the accumulated cost modifier, floored, minimum 1.
    pub fn hero_price(&self, base_cost: u32) -> u32 {
        floor_scaled(f64::from(base_cost) * (1.0 + self.hero_cost_modifier)).max(1) as u32
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}
