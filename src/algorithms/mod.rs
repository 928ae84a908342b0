pub mod a_star;
pub mod bfs;
pub mod common;
pub mod dfs;
pub mod random_walk;

use crate::grid::Grid;
use a_star::AStar;
use bfs::BreadthFirst;
use common::SearchStrategy;
use dfs::DepthFirst;
use log::debug;
use random_walk::RandomWalk;
use std::fmt;
use std::str::FromStr;

pub use common::SearchResult;

/// Default cap on random-walk moves.
pub const DEFAULT_MAX_STEPS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
    AStar,
    RandomWalk,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::DepthFirst,
        Algorithm::BreadthFirst,
        Algorithm::AStar,
        Algorithm::RandomWalk,
    ];

    /// Wire tag of the algorithm.
    pub fn tag(&self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "dfs",
            Algorithm::BreadthFirst => "bfs",
            Algorithm::AStar => "astar",
            Algorithm::RandomWalk => "random_walk",
        }
    }

    pub fn strategy(&self, options: &SearchOptions) -> Box<dyn SearchStrategy> {
        match self {
            Algorithm::DepthFirst => Box::new(DepthFirst::new()),
            Algorithm::BreadthFirst => Box::new(BreadthFirst::new()),
            Algorithm::AStar => Box::new(AStar::new()),
            Algorithm::RandomWalk => Box::new(RandomWalk::new(options.max_steps, options.seed)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm '{}', expected one of dfs, bfs, astar, random_walk",
            self.0
        )
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.tag() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub max_steps: usize,
    pub seed: Option<u64>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            max_steps: DEFAULT_MAX_STEPS,
            seed: None,
        }
    }
}

/// Runs `algorithm` over `grid` to completion.
pub fn search(grid: &Grid, algorithm: Algorithm, options: &SearchOptions) -> SearchResult {
    let mut strategy = algorithm.strategy(options);
    debug!(
        "{} search on {}x{} grid from ({}, {}) towards {} goal(s)",
        strategy.name(),
        grid.rows(),
        grid.cols(),
        grid.start().x,
        grid.start().y,
        grid.goals().len()
    );
    let result = strategy.search(grid);
    debug!(
        "{} explored {} cell(s), reached {:?}",
        strategy.name(),
        result.visited_count(),
        result.reached_goal
    );
    result
}
