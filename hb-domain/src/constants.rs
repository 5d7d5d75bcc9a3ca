use serde::{Deserialize, Serialize};

/// Game constants as sent by the engine in the first line of the init handshake.
/// Missing keys fall back to the engine's defaults.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameConstants {
    #[serde(rename = "MAX_ENERGY")]
    pub max_halite: usize,
    #[serde(rename = "NEW_ENTITY_ENERGY_COST")]
    pub ship_cost: usize,
    #[serde(rename = "DROPOFF_COST")]
    pub dropoff_cost: usize,
    #[serde(rename = "MAX_TURNS")]
    pub max_turns: usize,
    #[serde(rename = "EXTRACT_RATIO")]
    pub extract_ratio: usize,
    #[serde(rename = "MOVE_COST_RATIO")]
    pub move_cost_ratio: usize,
    #[serde(rename = "INSPIRATION_ENABLED")]
    pub inspiration_enabled: bool,
    #[serde(rename = "INSPIRATION_RADIUS")]
    pub inspiration_radius: usize,
    #[serde(rename = "INSPIRATION_SHIP_COUNT")]
    pub inspiration_ship_count: usize,
    #[serde(rename = "INSPIRED_EXTRACT_RATIO")]
    pub inspired_extract_ratio: usize,
    #[serde(rename = "INSPIRED_BONUS_MULTIPLIER")]
    pub inspired_bonus_multiplier: f64,
    #[serde(rename = "INSPIRED_MOVE_COST_RATIO")]
    pub inspired_move_cost_ratio: usize,
}

impl Default for GameConstants {
    fn default() -> Self {
        Self {
            max_halite: 1_000,
            ship_cost: 1_000,
            dropoff_cost: 4_000,
            max_turns: 400,
            extract_ratio: 4,
            move_cost_ratio: 10,
            inspiration_enabled: true,
            inspiration_radius: 4,
            inspiration_ship_count: 2,
            inspired_extract_ratio: 4,
            inspired_bonus_multiplier: 2.0,
            inspired_move_cost_ratio: 10,
        }
    }
}

impl GameConstants {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn parses_engine_constants_and_ignores_unknown_keys() {
        let json = r#"{"CAPTURE_ENABLED":false,"DROPOFF_COST":4000,"EXTRACT_RATIO":4,"MAX_ENERGY":1000,"MAX_TURNS":501,
            "MOVE_COST_RATIO":10,"NEW_ENTITY_ENERGY_COST":1000,"INSPIRED_BONUS_MULTIPLIER":2.0,"game_seed":1541002200}"#;

        let constants = GameConstants::from_json(json).unwrap();

        assert_eq!(constants.max_halite, 1_000);
        assert_eq!(constants.ship_cost, 1_000);
        assert_eq!(constants.max_turns, 501);
        assert_eq!(constants.move_cost_ratio, 10);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let constants = GameConstants::from_json(r#"{"MAX_TURNS":300}"#).unwrap();

        assert_eq!(constants.max_turns, 300);
        assert_eq!(constants.max_halite, GameConstants::default().max_halite);
    }
}
