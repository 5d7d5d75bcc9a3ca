use hb_domain::{Position, ShipId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("Ship {ship_id} at {position} has no unclaimed candidate cell left, its own cell has been claimed by another ship")]
    NoUnclaimedCandidate { ship_id: ShipId, position: Position },
}
