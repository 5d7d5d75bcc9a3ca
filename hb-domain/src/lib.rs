pub mod constants;
pub mod game_map;
pub mod hb_model;

pub use constants::*;
pub use game_map::*;
pub use hb_model::*;
