use hb_domain::{GameConstants, GameMap, PlayerId, Position, Ship, ShipId};
use strum::IntoEnumIterator;

/// `size`x`size` map without halite except for the five cells around `center`,
/// given in canonical direction order (north, south, east, west, still).
pub fn map_with_cross(size: usize, center: Position, halite: [usize; 5]) -> GameMap {
    let mut map = GameMap::new(size, size, vec![0; size * size]).unwrap();
    for (direction, amount) in hb_domain::Direction::iter().zip(halite) {
        map.set_halite(&center.directional_offset(direction), amount);
    }
    map
}

pub fn empty_map(size: usize) -> GameMap {
    GameMap::new(size, size, vec![0; size * size]).unwrap()
}

pub fn test_ship(id: u32, position: Position, halite: usize) -> Ship {
    Ship {
        id: ShipId(id),
        owner: PlayerId(0),
        position,
        halite,
    }
}

pub fn test_constants() -> GameConstants {
    GameConstants::default()
}
