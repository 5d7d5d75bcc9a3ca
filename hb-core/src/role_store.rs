use hb_domain::{Role, ShipId};
use std::collections::{HashMap, HashSet};

/// Per-ship roles that survive across turns. Lives as long as the game session.
#[derive(Debug, Clone, Default)]
pub struct RoleStore {
    roles: HashMap<ShipId, Role>,
}

impl RoleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// First sighting of a ship records and returns `Role::Collecting`.
    pub fn get_role(&mut self, ship_id: ShipId) -> Role {
        *self.roles.entry(ship_id).or_default()
    }

    pub fn set_role(&mut self, ship_id: ShipId, role: Role) {
        self.roles.insert(ship_id, role);
    }

    /// Forgets ships that are no longer part of the fleet. Returns the ids that were dropped.
    pub fn retain_fleet(&mut self, fleet: &HashSet<ShipId>) -> Vec<ShipId> {
        let mut dropped: Vec<ShipId> = self.roles.keys().filter(|id| !fleet.contains(id)).copied().collect();
        dropped.sort();

        self.roles.retain(|id, _| fleet.contains(id));
        dropped
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
