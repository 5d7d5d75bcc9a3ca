/// Spawn a new ship iff we are still within the build window, can afford it and nothing blocks the shipyard.
pub fn should_spawn(turn_number: usize, treasury: usize, shipyard_occupied: bool, build_cutoff_turn: usize, ship_cost: usize) -> bool {
    turn_number <= build_cutoff_turn && treasury >= ship_cost && !shipyard_occupied
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    const CUTOFF: usize = 200;
    const SHIP_COST: usize = 1_000;

    #[test]
    fn spawns_when_all_conditions_hold() {
        assert!(should_spawn(1, 5_000, false, CUTOFF, SHIP_COST));
        assert!(should_spawn(CUTOFF, SHIP_COST, false, CUTOFF, SHIP_COST));
    }

    #[test]
    fn no_spawn_after_the_cutoff_turn() {
        assert!(!should_spawn(CUTOFF + 1, 5_000, false, CUTOFF, SHIP_COST));
    }

    #[test]
    fn no_spawn_without_enough_halite() {
        assert!(!should_spawn(1, SHIP_COST - 1, false, CUTOFF, SHIP_COST));
    }

    #[test]
    fn no_spawn_on_an_occupied_shipyard() {
        assert!(!should_spawn(1, 5_000, true, CUTOFF, SHIP_COST));
    }
}
