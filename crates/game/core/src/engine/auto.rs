use crate::config::BattleConfig;
use crate::env::RngOracle;
use crate::state::Character;

use super::{BattleEngine, BattleError, BattleResult};

/// Runs a whole battle without interaction.
///
/// Starts the battle and calls `update()` until an outcome is reached or
/// `max_steps` updates have elapsed; an undecided battle ends in defeat.
pub fn auto_battle<R: RngOracle>(
    players: impl IntoIterator<Item = Character>,
    enemies: impl IntoIterator<Item = Character>,
    max_steps: u32,
    rng: R,
) -> Result<BattleResult, BattleError> {
    let config = BattleConfig::default().with_max_steps(max_steps);
    let mut engine = BattleEngine::new(players, enemies, config, rng)?;
    Ok(engine.run())
}
