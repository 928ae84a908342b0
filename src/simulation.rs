use crate::algorithms::{self, Algorithm, SearchOptions, SearchResult};
use crate::config::Config;
use crate::grid::{CellState, Grid, Position};
use crate::protocol::{SolveError, SolveRequest};
use crate::statistics::{self, SearchStatistics};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::time::Instant;

/// A randomly painted grid: start, goals and obstacles.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub rows: usize,
    pub cols: usize,
    pub start: Position,
    pub goals: Vec<Position>,
    pub obstacles: HashSet<Position>,
}

impl Scenario {
    /// Paints a new scenario. The start lands in the top-left quadrant and the
    /// goals anywhere else that is free.
    pub fn generate(config: &Config, seed: Option<u64>) -> Result<Self, String> {
        let (rows, cols) = (config.rows, config.cols);
        if rows == 0 || cols == 0 {
            return Err("grid needs at least one row and one column".to_string());
        }
        if config.num_goals == 0 {
            return Err("at least one goal is required".to_string());
        }
        if config.num_goals + 1 > rows * cols {
            return Err(format!(
                "{} goals plus a start do not fit in a {}x{} grid",
                config.num_goals, rows, cols
            ));
        }

        // Use seed for reproducible results
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let start = Position::new(
            rng.gen_range(0..cols.div_ceil(2)),
            rng.gen_range(0..rows.div_ceil(2)),
        );

        let mut goals = Vec::with_capacity(config.num_goals);
        while goals.len() < config.num_goals {
            let pos = Position::new(rng.gen_range(0..cols), rng.gen_range(0..rows));
            if pos != start && !goals.contains(&pos) {
                goals.push(pos);
            }
        }

        let mut obstacles = HashSet::new();
        let mut attempts = 0;
        while obstacles.len() < config.num_obstacles && attempts < config.num_obstacles * 3 {
            let pos = Position::new(rng.gen_range(0..cols), rng.gen_range(0..rows));
            if pos != start && !goals.contains(&pos) {
                obstacles.insert(pos);
            }
            attempts += 1;
        }

        info!(
            "Generated scenario - Start: {:?}, Goals: {:?}, Obstacles: {}",
            start,
            goals,
            obstacles.len()
        );

        Ok(Scenario {
            rows,
            cols,
            start,
            goals,
            obstacles,
        })
    }

    /// The scenario as the editor would send it.
    pub fn to_request(&self, algorithm: &str) -> SolveRequest {
        let mut maze = vec![vec![CellState::Unexplored; self.cols]; self.rows];
        for pos in &self.obstacles {
            maze[pos.y][pos.x] = CellState::Obstacle;
        }
        for goal in &self.goals {
            maze[goal.y][goal.x] = CellState::Goal;
        }
        maze[self.start.y][self.start.x] = CellState::Start;

        SolveRequest {
            maze,
            start: self.start,
            goals: self.goals.clone(),
            algorithm: algorithm.to_string(),
        }
    }

    pub fn create_grid(&self) -> Result<Grid, SolveError> {
        let request = self.to_request(Algorithm::AStar.tag());
        Ok(Grid::build(&request.maze, request.start, &request.goals)?)
    }
}

#[derive(Debug, Clone)]
pub struct AlgorithmResult {
    pub algorithm: Algorithm,
    pub result: SearchResult,
    pub statistics: SearchStatistics,
}

pub struct Simulation {
    grid: Grid,
    options: SearchOptions,
    optimal_path_length: Option<usize>,
}

impl Simulation {
    pub fn new(grid: Grid, options: SearchOptions) -> Self {
        let optimal_path_length = statistics::optimal_path_length(&grid);
        Simulation {
            grid,
            options,
            optimal_path_length,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn optimal_path_length(&self) -> Option<usize> {
        self.optimal_path_length
    }

    pub fn run(&self, algorithm: Algorithm) -> AlgorithmResult {
        let started = Instant::now();
        let result = algorithms::search(&self.grid, algorithm, &self.options);
        let elapsed = started.elapsed();

        let statistics =
            SearchStatistics::new(algorithm, &result, self.optimal_path_length, elapsed);
        AlgorithmResult {
            algorithm,
            result,
            statistics,
        }
    }

    /// Runs every strategy against the same grid.
    pub fn run_all_algorithms(&self) -> Vec<AlgorithmResult> {
        Algorithm::ALL
            .into_iter()
            .map(|algorithm| self.run(algorithm))
            .collect()
    }

    pub fn print_comparison_results(&self, results: &[AlgorithmResult]) {
        println!("\n=== ALGORITHM COMPARISON ===");
        match self.optimal_path_length {
            Some(optimal) => println!("Optimal path length: {}", optimal),
            None => println!("Optimal path length: unreachable"),
        }
        println!(
            "{:<12} {:>8} {:>10} {:>8} {:>12} {:>12}",
            "Algorithm", "Found", "Visited", "Route", "Efficiency", "Time"
        );
        println!("{}", "-".repeat(67));

        for entry in results {
            let stats = &entry.statistics;
            println!(
                "{:<12} {:>8} {:>10} {:>8} {:>12.3} {:>12}",
                entry.algorithm.tag(),
                if entry.result.found() { "yes" } else { "no" },
                stats.visited_count,
                stats.route_length,
                stats.route_efficiency,
                format!("{:.2?}", stats.elapsed)
            );
        }

        let fewest_visits = results
            .iter()
            .filter(|entry| entry.result.found())
            .min_by_key(|entry| entry.statistics.visited_count);
        if let Some(best) = fewest_visits {
            println!(
                "\nFewest cells explored: {} ({} cells)",
                best.algorithm, best.statistics.visited_count
            );
        }
    }
}
