use hb_domain::{Direction, GameMap, Position};
use mockall::automock;
use pathfinding::prelude::astar;

/// Multi-step navigation: which single step to take from `from` to get closer to `to`.
#[automock]
pub trait PathOracle {
    fn next_direction(&self, from: &Position, to: &Position, map: &GameMap) -> Direction;
}

/// Plans the cheapest path on the torus, where every step burns `halite / move_cost_ratio`
/// of the cell being left, and returns its first step.
#[derive(Debug, Clone)]
pub struct HaliteAwarePathOracle {
    pub move_cost_ratio: usize,
}

impl HaliteAwarePathOracle {
    pub fn new(move_cost_ratio: usize) -> Self {
        Self { move_cost_ratio }
    }
}

impl PathOracle for HaliteAwarePathOracle {
    fn next_direction(&self, from: &Position, to: &Position, map: &GameMap) -> Direction {
        let start = map.normalize(from);
        let goal = map.normalize(to);

        if start == goal {
            return Direction::Still;
        }

        let problem = Problem {
            map,
            goal,
            move_cost_ratio: self.move_cost_ratio,
        };

        let result = astar(&start, |p| problem.successors(p), |p| problem.heuristic(p), |p| *p == problem.goal);

        result
            .and_then(|(path, _cost)| path.get(1).and_then(|next| direction_towards_neighbour(&start, next, map)))
            .unwrap_or_else(|| greedy_direction(&start, &goal, map))
    }
}

struct Problem<'a> {
    map: &'a GameMap,
    goal: Position,
    move_cost_ratio: usize,
}

impl Problem<'_> {
    fn successors(&self, position: &Position) -> Vec<(Position, usize)> {
        let step_cost = 1 + self.move_cost(position);

        position
            .surrounding_cardinals()
            .into_iter()
            .map(|p| (self.map.normalize(&p), step_cost))
            .collect()
    }

    fn move_cost(&self, position: &Position) -> usize {
        if self.move_cost_ratio == 0 {
            0
        } else {
            self.map.halite_at(position) / self.move_cost_ratio
        }
    }

    // every step costs at least 1, so the distance never overestimates
    fn heuristic(&self, position: &Position) -> usize {
        self.map.calculate_distance(position, &self.goal)
    }
}

fn direction_towards_neighbour(from: &Position, neighbour: &Position, map: &GameMap) -> Option<Direction> {
    Direction::all_cardinals()
        .into_iter()
        .find(|d| map.normalize(&from.directional_offset(*d)) == *neighbour)
}

/// Straight-line step along the x axis first, taking the wrap-around when it is shorter.
pub fn greedy_direction(from: &Position, to: &Position, map: &GameMap) -> Direction {
    let from = map.normalize(from);
    let to = map.normalize(to);

    let width = map.width as i32;
    let height = map.height as i32;

    let dx = to.x - from.x;
    let dy = to.y - from.y;

    if dx != 0 {
        let wraps = dx.abs() > width - dx.abs();
        match (dx > 0, wraps) {
            (true, false) | (false, true) => Direction::East,
            _ => Direction::West,
        }
    } else if dy != 0 {
        let wraps = dy.abs() > height - dy.abs();
        match (dy > 0, wraps) {
            (true, false) | (false, true) => Direction::South,
            _ => Direction::North,
        }
    } else {
        Direction::Still
    }
}
