use crate::claim_set::ClaimSet;
use crate::evaluator;
use crate::pathfinder::PathOracle;
use hb_domain::{Direction, GameMap, Position, Ship};
use tracing::{event, Level};

/// The single step a ship commits to this turn and the cell it ends up on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationDecision {
    pub direction: Direction,
    pub destination: Position,
}

/// Turns a ship's wish into one direction, never picking a cell that an earlier ship claimed this turn.
/// Every decision claims its destination.
pub struct Navigator<'a> {
    map: &'a GameMap,
    path_oracle: &'a dyn PathOracle,
}

impl<'a> Navigator<'a> {
    pub fn new(map: &'a GameMap, path_oracle: &'a dyn PathOracle) -> Self {
        Self { map, path_oracle }
    }

    /// Moves to the richest unclaimed neighbouring cell. With `keep_harvesting` the ship stays on its
    /// own cell instead, unless another ship already claimed it.
    pub fn collect(&self, ship: &Ship, keep_harvesting: bool, claims: &mut ClaimSet) -> NavigationDecision {
        let here = self.map.normalize(&ship.position);

        if keep_harvesting && !claims.is_claimed(&here) {
            return self.commit(ship, Direction::Still, here, claims);
        }

        match evaluator::best_unclaimed_candidate(ship, self.map, claims) {
            Ok(candidate) => self.commit(ship, candidate.direction, candidate.position, claims),
            Err(e) => {
                event!(Level::ERROR, "Failed to find a free cell, staying still: {}", e);
                self.commit(ship, Direction::Still, here, claims)
            }
        }
    }

    /// Takes the path oracle's step towards `target` or stays still if that cell is already claimed.
    pub fn deposit(&self, ship: &Ship, target: &Position, claims: &mut ClaimSet) -> NavigationDecision {
        let here = self.map.normalize(&ship.position);
        let direction = self.path_oracle.next_direction(&ship.position, target, self.map);
        let next = self.map.normalize(&ship.position.directional_offset(direction));

        if claims.is_claimed(&next) {
            event!(
                Level::DEBUG,
                "Ship {} wanted to move {} to {}, but it's claimed. Waiting at {}",
                ship.id,
                direction,
                next,
                here
            );
            self.commit(ship, Direction::Still, here, claims)
        } else {
            self.commit(ship, direction, next, claims)
        }
    }

    fn commit(&self, ship: &Ship, direction: Direction, destination: Position, claims: &mut ClaimSet) -> NavigationDecision {
        if !claims.claim(destination) {
            event!(Level::WARN, "Ship {} commits to {} which is already claimed this turn", ship.id, destination);
        }
        NavigationDecision { direction, destination }
    }
}
