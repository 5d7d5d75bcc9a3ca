pub mod claim_set;
pub mod configuration;
pub mod error;
pub mod evaluator;
pub mod fleet_admiral;
pub mod navigator;
pub mod pathfinder;
pub mod role_store;
pub mod spawn_policy;

#[cfg(test)]
pub mod test_objects;

pub use claim_set::ClaimSet;
pub use configuration::StrategyConfig;
pub use error::DispatchError;
pub use fleet_admiral::{FleetAdmiral, TurnReport, TurnSnapshot};
pub use pathfinder::{HaliteAwarePathOracle, PathOracle};
