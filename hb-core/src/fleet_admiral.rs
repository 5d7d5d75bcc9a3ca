use crate::claim_set::ClaimSet;
use crate::configuration::StrategyConfig;
use crate::navigator::{NavigationDecision, Navigator};
use crate::pathfinder::PathOracle;
use crate::role_store::RoleStore;
use crate::spawn_policy;
use hb_domain::{Command, GameConstants, GameMap, Position, Role, Ship, ShipId};
use itertools::Itertools;
use std::collections::HashSet;
use tracing::{event, Level};

/// Everything the admiral needs to know about the current turn.
#[derive(Debug, Clone, Copy)]
pub struct TurnSnapshot<'a> {
    pub turn_number: usize,
    pub treasury: usize,
    pub shipyard: Position,
    /// our own ships only
    pub ships: &'a [Ship],
    pub map: &'a GameMap,
    pub constants: &'a GameConstants,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub commands: Vec<Command>,
    pub claims: ClaimSet,
}

/// Dispatches the fleet once per turn. Owns the ship roles for the whole session.
///
/// Ships are processed in ascending id order, so ships with lower ids get first pick of contested
/// cells and a turn replays identically for the same snapshot.
pub struct FleetAdmiral {
    cfg: StrategyConfig,
    role_store: RoleStore,
    path_oracle: Box<dyn PathOracle>,
}

impl FleetAdmiral {
    pub fn new(cfg: StrategyConfig, path_oracle: Box<dyn PathOracle>) -> Self {
        Self {
            cfg,
            role_store: RoleStore::new(),
            path_oracle,
        }
    }

    pub fn role_of(&mut self, ship_id: ShipId) -> Role {
        self.role_store.get_role(ship_id)
    }

    pub fn role_store(&self) -> &RoleStore {
        &self.role_store
    }

    pub fn dispatch_turn(&mut self, snapshot: &TurnSnapshot) -> TurnReport {
        let fleet: HashSet<ShipId> = snapshot.ships.iter().map(|s| s.id).collect();
        let vanished = self.role_store.retain_fleet(&fleet);
        if !vanished.is_empty() {
            event!(Level::DEBUG, "Forgetting roles of vanished ships: {}", vanished.iter().join(", "));
        }

        let navigator = Navigator::new(snapshot.map, self.path_oracle.as_ref());
        let mut claims = ClaimSet::new();
        let mut commands = Vec::with_capacity(snapshot.ships.len() + 1);

        for ship in snapshot.ships.iter().sorted_by_key(|s| s.id).dedup_by(|a, b| a.id == b.id) {
            let decision = Self::dispatch_ship(&self.cfg, &mut self.role_store, ship, snapshot, &navigator, &mut claims);
            commands.push(Command::Move(ship.id, decision.direction));
        }

        let shipyard_occupied = snapshot.map.is_occupied(&snapshot.shipyard);
        if spawn_policy::should_spawn(
            snapshot.turn_number,
            snapshot.treasury,
            shipyard_occupied,
            self.cfg.build_cutoff_turn,
            snapshot.constants.ship_cost,
        ) {
            event!(Level::INFO, "Spawning a new ship. Treasury: {}", snapshot.treasury);
            commands.push(Command::Spawn);
        } else if let Some(blocker) = snapshot.map.occupant(&snapshot.shipyard) {
            event!(Level::DEBUG, "Not spawning, ship {} sits on the shipyard", blocker);
        }

        TurnReport { commands, claims }
    }

    fn dispatch_ship(
        cfg: &StrategyConfig,
        role_store: &mut RoleStore,
        ship: &Ship,
        snapshot: &TurnSnapshot,
        navigator: &Navigator,
        claims: &mut ClaimSet,
    ) -> NavigationDecision {
        let max_halite = snapshot.constants.max_halite;
        let mut role = role_store.get_role(ship.id);

        // the engine empties the cargo when a ship reaches the shipyard
        if role == Role::Depositing && ship.halite == 0 {
            event!(Level::INFO, "Ship {} unloaded its cargo, back to collecting", ship.id);
            role = Role::Collecting;
            role_store.set_role(ship.id, role);
        }

        let decision = match role {
            Role::Collecting => {
                let cell_halite = snapshot.map.halite_at(&ship.position);
                let keep_harvesting = cfg.is_worth_harvesting(cell_halite, max_halite) && !ship.is_full(max_halite);
                let decision = navigator.collect(ship, keep_harvesting, claims);

                if cfg.should_deposit(ship.halite, max_halite) {
                    event!(Level::INFO, "Ship {} carries {} halite, switching to depositing", ship.id, ship.halite);
                    role_store.set_role(ship.id, Role::Depositing);
                }
                decision
            }
            Role::Depositing => navigator.deposit(ship, &snapshot.shipyard, claims),
        };

        event!(
            Level::DEBUG,
            "Ship {} ({}, {} halite) at {}: {} to {}",
            ship.id,
            role,
            ship.halite,
            ship.position,
            decision.direction,
            decision.destination
        );

        decision
    }
}
