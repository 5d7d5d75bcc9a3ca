use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, IntoEnumIterator};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct PlayerId(pub u32);

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct ShipId(pub u32);

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct DropoffId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A grid coordinate. Positions are not wrapped by themselves, use `GameMap::normalize` for that.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn directional_offset(&self, direction: Direction) -> Position {
        let (dx, dy) = direction.offset();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn surrounding_cardinals(&self) -> Vec<Position> {
        Direction::all_cardinals().into_iter().map(|d| self.directional_offset(d)).collect()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The declaration order is the canonical order used for iteration and tie-breaks.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Display, EnumIter)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Still,
}

impl Direction {
    /// y grows downwards, like the engine's coordinates.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Still => (0, 0),
        }
    }

    pub fn to_wire_char(&self) -> char {
        match self {
            Direction::North => 'n',
            Direction::South => 's',
            Direction::East => 'e',
            Direction::West => 'w',
            Direction::Still => 'o',
        }
    }

    pub fn all_cardinals() -> Vec<Direction> {
        Direction::iter().filter(|d| *d != Direction::Still).collect()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    pub id: ShipId,
    pub owner: PlayerId,
    pub position: Position,
    pub halite: usize,
}

impl Ship {
    pub fn is_full(&self, max_halite: usize) -> bool {
        self.halite >= max_halite
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Dropoff {
    pub id: DropoffId,
    pub owner: PlayerId,
    pub position: Position,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub shipyard: Position,
    pub halite: usize,
    pub ships: Vec<Ship>,
    pub dropoffs: Vec<Dropoff>,
}

impl Player {
    pub fn new(id: PlayerId, shipyard: Position) -> Self {
        Self {
            id,
            shipyard,
            halite: 0,
            ships: Vec::new(),
            dropoffs: Vec::new(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
pub enum Role {
    #[default]
    Collecting,
    Depositing,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Move(ShipId, Direction),
    Spawn,
}

/// Renders the engine's wire format, e.g. `m 4 n` or `g`.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Move(id, direction) => write!(f, "m {} {}", id, direction.to_wire_char()),
            Command::Spawn => write!(f, "g"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use test_log::test;

    #[test]
    fn directions_iterate_in_canonical_order() {
        let order = Direction::iter().collect_vec();
        assert_eq!(order, vec![Direction::North, Direction::South, Direction::East, Direction::West, Direction::Still]);
    }

    #[test]
    fn surrounding_cardinals_follow_direction_order() {
        let origin = Position::new(3, 3);
        assert_eq!(
            origin.surrounding_cardinals(),
            vec![Position::new(3, 2), Position::new(3, 4), Position::new(4, 3), Position::new(2, 3)]
        );
    }

    #[test]
    fn commands_render_wire_format() {
        assert_eq!(Command::Move(ShipId(12), Direction::West).to_string(), "m 12 w");
        assert_eq!(Command::Move(ShipId(0), Direction::Still).to_string(), "m 0 o");
        assert_eq!(Command::Spawn.to_string(), "g");
    }

    #[test]
    fn default_role_is_collecting() {
        assert_eq!(Role::default(), Role::Collecting);
    }
}
