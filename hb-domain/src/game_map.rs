use crate::{Position, ShipId};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("Invalid map dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("Expected {expected} cells for the map, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },
}

/// Halite amounts and ship occupancy of the toroidal grid for the current turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMap {
    pub width: usize,
    pub height: usize,
    halite: Vec<usize>,
    occupancy: HashMap<Position, ShipId>,
}

impl GameMap {
    /// `halite` is row-major, `height` rows of `width` cells.
    pub fn new(width: usize, height: usize, halite: Vec<usize>) -> Result<Self, MapError> {
        let cell_count = Self::cell_count(width, height)?;
        if halite.len() != cell_count {
            return Err(MapError::CellCountMismatch {
                expected: cell_count,
                actual: halite.len(),
            });
        }

        Ok(Self {
            width,
            height,
            halite,
            occupancy: HashMap::new(),
        })
    }

    /// Number of cells of a `width`x`height` map, or `InvalidDimensions` if positions can't address it.
    pub fn cell_count(width: usize, height: usize) -> Result<usize, MapError> {
        if width == 0 || height == 0 || width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(MapError::InvalidDimensions { width, height });
        }
        width.checked_mul(height).ok_or(MapError::InvalidDimensions { width, height })
    }

    pub fn normalize(&self, position: &Position) -> Position {
        Position {
            x: position.x.rem_euclid(self.width as i32),
            y: position.y.rem_euclid(self.height as i32),
        }
    }

    fn index_of(&self, position: &Position) -> usize {
        let normalized = self.normalize(position);
        normalized.y as usize * self.width + normalized.x as usize
    }

    pub fn halite_at(&self, position: &Position) -> usize {
        self.halite[self.index_of(position)]
    }

    pub fn set_halite(&mut self, position: &Position, halite: usize) {
        let idx = self.index_of(position);
        self.halite[idx] = halite;
    }

    pub fn is_occupied(&self, position: &Position) -> bool {
        self.occupancy.contains_key(&self.normalize(position))
    }

    pub fn occupant(&self, position: &Position) -> Option<ShipId> {
        self.occupancy.get(&self.normalize(position)).copied()
    }

    pub fn clear_occupancy(&mut self) {
        self.occupancy.clear();
    }

    pub fn mark_occupied(&mut self, position: &Position, ship_id: ShipId) {
        let normalized = self.normalize(position);
        self.occupancy.insert(normalized, ship_id);
    }

    /// Wrap-aware manhattan distance.
    pub fn calculate_distance(&self, from: &Position, to: &Position) -> usize {
        let from = self.normalize(from);
        let to = self.normalize(to);

        let dx = (from.x - to.x).unsigned_abs() as usize;
        let dy = (from.y - to.y).unsigned_abs() as usize;

        dx.min(self.width - dx) + dy.min(self.height - dy)
    }
}
