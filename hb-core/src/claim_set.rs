use hb_domain::Position;
use std::collections::HashSet;

/// Cells chosen as destination by ships processed earlier in the current turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimSet {
    claimed: HashSet<Position>,
}

impl ClaimSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the position had already been claimed this turn.
    pub fn claim(&mut self, position: Position) -> bool {
        self.claimed.insert(position)
    }

    pub fn is_claimed(&self, position: &Position) -> bool {
        self.claimed.contains(position)
    }

    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.claimed.iter()
    }
}
