use clap::Parser;
use std::path::PathBuf;

use crate::algorithms::{Algorithm, SearchOptions, DEFAULT_MAX_STEPS};
use crate::protocol::SolveRequest;
use log::warn;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// JSON solve request to answer, `-` reads stdin. Without it a random
    /// scenario is generated.
    #[arg(long)]
    pub input: Option<PathBuf>,

    #[arg(long, default_value_t = 20)]
    pub rows: usize,

    #[arg(long, default_value_t = 20)]
    pub cols: usize,

    #[arg(long, default_value_t = 80)]
    pub num_obstacles: usize,

    #[arg(long, default_value_t = 1)]
    pub num_goals: usize,

    /// dfs, bfs, astar, random_walk or all. Defaults to astar and, when
    /// given, replaces the tag of an `--input` request.
    #[arg(long)]
    pub algorithm: Option<String>,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Step bound for the random walk
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    pub max_steps: usize,

    /// Print the JSON response instead of the text report. With `all` it
    /// prints one response per algorithm.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

impl Config {
    pub fn algorithm(&self) -> &str {
        self.algorithm
            .as_deref()
            .unwrap_or_else(|| Algorithm::AStar.tag())
    }

    /// Lets an explicit `--algorithm` take over a loaded request's tag.
    pub fn apply_to(&self, request: &mut SolveRequest) {
        if let Some(tag) = &self.algorithm {
            if *tag != request.algorithm {
                warn!(
                    "--algorithm {} overrides the request's '{}'",
                    tag, request.algorithm
                );
                request.algorithm = tag.clone();
            }
        }
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            max_steps: self.max_steps,
            seed: self.seed,
        }
    }
}
