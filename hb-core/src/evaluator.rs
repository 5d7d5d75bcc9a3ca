use crate::claim_set::ClaimSet;
use crate::error::DispatchError;
use hb_domain::{Direction, GameMap, Position, Ship};
use std::cmp::Reverse;
use strum::IntoEnumIterator;

/// One reachable cell for a ship this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub direction: Direction,
    pub position: Position,
    pub halite: usize,
}

/// The five cells a ship can end up on this turn, in canonical direction order (Still last).
pub fn candidates(origin: &Position, map: &GameMap) -> Vec<Candidate> {
    Direction::iter()
        .map(|direction| {
            let position = map.normalize(&origin.directional_offset(direction));
            Candidate {
                direction,
                position,
                halite: map.halite_at(&position),
            }
        })
        .collect()
}

/// Richest unclaimed candidate. Ties go to the direction that comes first in canonical order.
pub fn select_best(candidates: &[Candidate], claims: &ClaimSet) -> Option<Candidate> {
    candidates
        .iter()
        .filter(|c| !claims.is_claimed(&c.position))
        .min_by_key(|c| (Reverse(c.halite), c.direction))
        .copied()
}

pub fn best_unclaimed_candidate(ship: &Ship, map: &GameMap, claims: &ClaimSet) -> Result<Candidate, DispatchError> {
    let all = candidates(&ship.position, map);
    select_best(&all, claims).ok_or(DispatchError::NoUnclaimedCandidate {
        ship_id: ship.id,
        position: map.normalize(&ship.position),
    })
}
