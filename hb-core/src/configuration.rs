use serde::{Deserialize, Serialize};

/// Tuning knobs of the dispatch engine that are not part of the engine's game constants.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StrategyConfig {
    /// Last turn (inclusive) in which new ships are spawned.
    pub build_cutoff_turn: usize,
    /// A collecting ship keeps harvesting its cell while the cell holds at least `max_halite / harvest_threshold_divisor`.
    pub harvest_threshold_divisor: usize,
    /// A collecting ship turns to depositing once its cargo exceeds `max_halite / deposit_threshold_divisor`.
    pub deposit_threshold_divisor: usize,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            build_cutoff_turn: 200,
            harvest_threshold_divisor: 10,
            deposit_threshold_divisor: 2,
        }
    }
}

impl StrategyConfig {
    pub fn is_worth_harvesting(&self, cell_halite: usize, max_halite: usize) -> bool {
        cell_halite * self.harvest_threshold_divisor >= max_halite
    }

    pub fn should_deposit(&self, cargo: usize, max_halite: usize) -> bool {
        cargo * self.deposit_threshold_divisor > max_halite
    }
}
