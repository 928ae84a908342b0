use crate::algorithms::common::{SearchResult, SearchStrategy};
use crate::grid::{Grid, Position};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Random walk that prefers cells it has not stood on yet and falls back to
/// any passable neighbor, so it only stops on a goal, on an isolated start
/// or after `max_steps` moves.
pub struct RandomWalk {
    max_steps: usize,
    rng: StdRng,
}

impl RandomWalk {
    pub fn new(max_steps: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        RandomWalk { max_steps, rng }
    }
}

impl SearchStrategy for RandomWalk {
    fn name(&self) -> &'static str {
        "random_walk"
    }

    fn search(&mut self, grid: &Grid) -> SearchResult {
        let mut current = grid.start();
        let mut walk = vec![current];
        let mut visited = vec![false; grid.cell_count()];
        visited[grid.index(&current)] = true;

        let mut steps = 0;
        while !grid.is_goal(&current) {
            if steps >= self.max_steps {
                warn!(
                    "random walk hit the {} step bound without reaching a goal",
                    self.max_steps
                );
                return SearchResult {
                    visited_order: walk,
                    reached_goal: None,
                    route: Vec::new(),
                };
            }

            let neighbors = grid.neighbors(&current);
            let fresh: Vec<Position> = neighbors
                .iter()
                .copied()
                .filter(|n| !visited[grid.index(n)])
                .collect();
            let next = fresh
                .choose(&mut self.rng)
                .or_else(|| neighbors.choose(&mut self.rng));

            let Some(&next) = next else {
                debug!("random walk is boxed in at ({}, {})", current.x, current.y);
                return SearchResult {
                    visited_order: walk,
                    reached_goal: None,
                    route: Vec::new(),
                };
            };

            visited[grid.index(&next)] = true;
            walk.push(next);
            current = next;
            steps += 1;
        }

        SearchResult {
            route: walk.clone(),
            visited_order: walk,
            reached_goal: Some(current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState::{Obstacle as O, Unexplored as U};

    #[test]
    fn every_step_moves_to_an_adjacent_open_cell() {
        let matrix = vec![vec![U, U, U, U], vec![U, O, O, U], vec![U, U, U, U]];
        let g = Grid::build(&matrix, Position::new(0, 0), &[Position::new(3, 2)]).unwrap();
        let result = RandomWalk::new(10_000, Some(7)).search(&g);

        assert_eq!(result.visited_order.first(), Some(&Position::new(0, 0)));
        assert!(result
            .visited_order
            .windows(2)
            .all(|w| w[0].manhattan(&w[1]) == 1 && g.is_passable(&w[1])));
        assert_eq!(result.reached_goal, Some(Position::new(3, 2)));
        assert_eq!(result.route, result.visited_order);
    }

    #[test]
    fn seeded_walks_repeat() {
        let g = Grid::build(&vec![vec![U; 6]; 6], Position::new(0, 0), &[Position::new(5, 5)])
            .unwrap();
        let first = RandomWalk::new(500, Some(42)).search(&g);
        let second = RandomWalk::new(500, Some(42)).search(&g);
        assert_eq!(first, second);
    }

    #[test]
    fn stops_at_step_bound_when_goal_is_unreachable() {
        let matrix = vec![vec![U, U, O, U], vec![U, U, O, U]];
        let g = Grid::build(&matrix, Position::new(0, 0), &[Position::new(3, 1)]).unwrap();
        let result = RandomWalk::new(25, Some(1)).search(&g);
        assert_eq!(result.reached_goal, None);
        assert_eq!(result.visited_count(), 26);
        assert!(result.visited_order.iter().all(|p| p.x < 2));
    }

    #[test]
    fn isolated_start_returns_immediately() {
        let matrix = vec![vec![U, O], vec![O, U]];
        let g = Grid::build(&matrix, Position::new(0, 0), &[Position::new(1, 1)]).unwrap();
        let result = RandomWalk::new(1_000, None).search(&g);
        assert_eq!(result.visited_order, vec![Position::new(0, 0)]);
        assert_eq!(result.reached_goal, None);
    }

    #[test]
    fn zero_step_bound_still_reports_start() {
        let g = Grid::build(&vec![vec![U; 3]], Position::new(0, 0), &[Position::new(2, 0)])
            .unwrap();
        let result = RandomWalk::new(0, Some(3)).search(&g);
        assert_eq!(result.visited_order, vec![Position::new(0, 0)]);
        assert!(!result.found());
    }
}
