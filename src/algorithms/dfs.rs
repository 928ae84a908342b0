use crate::algorithms::common::{Exploration, SearchResult, SearchStrategy};
use crate::grid::{Grid, Position};

/// Depth-first search driven by an explicit stack. The neighbor pushed last
/// is explored first and a cell counts as visited when it is popped.
#[derive(Default)]
pub struct DepthFirst;

impl DepthFirst {
    pub fn new() -> Self {
        DepthFirst
    }
}

impl SearchStrategy for DepthFirst {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn search(&mut self, grid: &Grid) -> SearchResult {
        let mut exploration = Exploration::new(grid);
        let mut stack: Vec<(Position, Option<Position>)> = vec![(grid.start(), None)];

        while let Some((current, parent)) = stack.pop() {
            if !exploration.visit(current, parent) {
                continue;
            }
            if grid.is_goal(&current) {
                return exploration.finish(Some(current));
            }
            for next in exploration.unvisited_neighbors(&current) {
                stack.push((next, Some(current)));
            }
        }

        exploration.finish(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState::{self, Obstacle as O, Unexplored as U};

    fn grid(matrix: Vec<Vec<CellState>>, start: Position, goal: Position) -> Grid {
        Grid::build(&matrix, start, &[goal]).unwrap()
    }

    #[test]
    fn explores_last_pushed_neighbor_first() {
        // From the centre the push order is up, right, down, left, so left pops first.
        // From (0, 1) the last push is down, so (0, 2) follows.
        let g = grid(vec![vec![U; 3]; 3], Position::new(1, 1), Position::new(0, 2));
        let result = DepthFirst::new().search(&g);
        assert_eq!(
            result.visited_order,
            vec![Position::new(1, 1), Position::new(0, 1), Position::new(0, 2)]
        );
        assert_eq!(result.reached_goal, Some(Position::new(0, 2)));
        assert_eq!(result.route, result.visited_order);
    }

    #[test]
    fn follows_corridor_around_wall() {
        let matrix = vec![vec![U, O, U], vec![U, O, U], vec![U, U, U]];
        let g = grid(matrix, Position::new(0, 0), Position::new(2, 0));
        let result = DepthFirst::new().search(&g);
        assert_eq!(result.reached_goal, Some(Position::new(2, 0)));
        assert_eq!(result.visited_order.last(), Some(&Position::new(2, 0)));
        assert_eq!(result.route.first(), Some(&Position::new(0, 0)));
        assert_eq!(result.route_length(), 6);
    }

    #[test]
    fn backtracks_out_of_dead_end() {
        let matrix = vec![vec![U, U, U], vec![U, O, U], vec![U, O, U]];
        let g = grid(matrix, Position::new(0, 0), Position::new(2, 0));
        let result = DepthFirst::new().search(&g);
        assert_eq!(
            result.visited_order,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 0),
                Position::new(2, 0),
            ]
        );
        assert_eq!(
            result.route,
            vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]
        );
    }

    #[test]
    fn exhausts_when_goal_is_walled_off() {
        let matrix = vec![vec![U, O, U], vec![U, O, U], vec![U, O, U]];
        let g = grid(matrix, Position::new(0, 0), Position::new(2, 2));
        let result = DepthFirst::new().search(&g);
        assert_eq!(result.reached_goal, None);
        assert_eq!(result.visited_count(), 3);
        assert!(result.visited_order.iter().all(|p| p.x == 0));
        assert!(result.route.is_empty());
    }
}
