use crate::algorithms::common::{Exploration, SearchResult, SearchStrategy};
use crate::grid::{Grid, Position};
use std::collections::VecDeque;

/// Breadth-first search. Cells leave the queue in non-decreasing distance
/// from the start, so the first goal dequeued is a nearest one.
#[derive(Default)]
pub struct BreadthFirst;

impl BreadthFirst {
    pub fn new() -> Self {
        BreadthFirst
    }
}

impl SearchStrategy for BreadthFirst {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn search(&mut self, grid: &Grid) -> SearchResult {
        let mut exploration = Exploration::new(grid);
        let mut queue: VecDeque<(Position, Option<Position>)> = VecDeque::new();
        queue.push_back((grid.start(), None));

        while let Some((current, parent)) = queue.pop_front() {
            if !exploration.visit(current, parent) {
                continue;
            }
            if grid.is_goal(&current) {
                return exploration.finish(Some(current));
            }
            for next in exploration.unvisited_neighbors(&current) {
                queue.push_back((next, Some(current)));
            }
        }

        exploration.finish(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState::{Obstacle as O, Unexplored as U};

    #[test]
    fn visits_cells_layer_by_layer() {
        let g = Grid::build(&vec![vec![U; 3]; 3], Position::new(0, 0), &[Position::new(2, 2)])
            .unwrap();
        let result = BreadthFirst::new().search(&g);

        let start = g.start();
        let layers: Vec<usize> = result
            .visited_order
            .iter()
            .map(|p| p.manhattan(&start))
            .collect();
        assert!(layers.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(result.visited_count(), 9);
        assert_eq!(result.visited_order[1], Position::new(1, 0));
        assert_eq!(result.visited_order[2], Position::new(0, 1));
        assert_eq!(result.route_length(), 4);
    }

    #[test]
    fn stops_at_the_nearest_goal() {
        let goals = [Position::new(4, 0), Position::new(0, 1)];
        let g = Grid::build(&vec![vec![U; 5]; 2], Position::new(0, 0), &goals).unwrap();
        let result = BreadthFirst::new().search(&g);
        assert_eq!(result.reached_goal, Some(Position::new(0, 1)));
        assert_eq!(result.route, vec![Position::new(0, 0), Position::new(0, 1)]);
    }

    #[test]
    fn routes_around_obstacles() {
        let matrix = vec![vec![U, O, U], vec![U, O, U], vec![U, U, U]];
        let g = Grid::build(&matrix, Position::new(0, 0), &[Position::new(2, 0)]).unwrap();
        let result = BreadthFirst::new().search(&g);
        assert_eq!(result.reached_goal, Some(Position::new(2, 0)));
        assert_eq!(result.route_length(), 6);
        assert!(result.visited_order.iter().all(|p| g.is_passable(p)));
    }
}
