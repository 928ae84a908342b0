use crate::algorithms::{Algorithm, SearchResult};
use crate::grid::{Grid, Position};
use pathfinding::prelude::bfs;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SearchStatistics {
    pub algorithm: Algorithm,
    pub visited_count: usize,
    pub route_length: usize,
    pub optimal_path_length: Option<usize>,
    pub route_efficiency: f64,
    pub reached_goal: Option<Position>,
    pub elapsed: Duration,
}

impl SearchStatistics {
    pub fn new(
        algorithm: Algorithm,
        result: &SearchResult,
        optimal_path_length: Option<usize>,
        elapsed: Duration,
    ) -> Self {
        let mut stats = SearchStatistics {
            algorithm,
            visited_count: result.visited_count(),
            route_length: result.route_length(),
            optimal_path_length,
            route_efficiency: 0.0,
            reached_goal: result.reached_goal,
            elapsed,
        };
        stats.calculate_efficiency();
        stats
    }

    pub fn calculate_efficiency(&mut self) {
        self.route_efficiency = match (self.reached_goal, self.optimal_path_length) {
            (Some(_), Some(optimal)) if optimal > 0 => self.route_length as f64 / optimal as f64,
            _ => 0.0,
        };
    }
}

/// Shortest number of moves from the start to any goal, computed
/// independently of the engine's own strategies.
pub fn optimal_path_length(grid: &Grid) -> Option<usize> {
    bfs(
        &grid.start(),
        |p| grid.neighbors(p),
        |p| grid.is_goal(p),
    )
    .map(|path| path.len() - 1)
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        writeln!(f, "Visited Cells: {}", self.visited_count)?;
        match self.reached_goal {
            Some(goal) => writeln!(f, "Reached Goal: ({}, {})", goal.x, goal.y)?,
            None => writeln!(f, "Reached Goal: none (no path found)")?,
        }
        writeln!(f, "Route Length: {}", self.route_length)?;
        match self.optimal_path_length {
            Some(optimal) => writeln!(f, "Optimal Path Length: {}", optimal)?,
            None => writeln!(f, "Optimal Path Length: unreachable")?,
        }
        if self.route_efficiency > 0.0 {
            writeln!(f, "Route Efficiency: {:.3}", self.route_efficiency)?;
        }
        writeln!(f, "Search Time: {:.2?}", self.elapsed)?;
        Ok(())
    }
}
