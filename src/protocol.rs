//! JSON request and response shapes of the `/solve` contract.
//!
//! Requests carry the maze as `maze[y][x]` state tags and coordinates as
//! `{x, y}` objects; responses report cells as `[y, x]` pairs.

use crate::algorithms::{self, Algorithm, SearchOptions, SearchResult, UnknownAlgorithm};
use crate::grid::{CellState, Grid, GridError, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRequest {
    pub maze: Vec<Vec<CellState>>,
    pub start: Position,
    pub goals: Vec<Position>,
    pub algorithm: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveResponse {
    /// Exploration order when a goal was reached, empty otherwise.
    pub path: Vec<[usize; 2]>,
    pub visited_count: usize,
    #[serde(default)]
    pub route: Vec<[usize; 2]>,
    #[serde(default)]
    pub reached_goal: Option<Position>,
}

impl SolveResponse {
    pub fn from_result(result: &SearchResult) -> Self {
        let path = if result.found() {
            to_pairs(&result.visited_order)
        } else {
            Vec::new()
        };
        SolveResponse {
            path,
            visited_count: result.visited_count(),
            route: to_pairs(&result.route),
            reached_goal: result.reached_goal,
        }
    }
}

fn to_pairs(cells: &[Position]) -> Vec<[usize; 2]> {
    cells.iter().map(|p| [p.y, p.x]).collect()
}

#[derive(Debug)]
pub enum SolveError {
    InvalidGrid(GridError),
    UnknownAlgorithm(UnknownAlgorithm),
    Json(serde_json::Error),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::InvalidGrid(e) => write!(f, "invalid grid: {e}"),
            SolveError::UnknownAlgorithm(e) => write!(f, "{e}"),
            SolveError::Json(e) => write!(f, "malformed request: {e}"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolveError::InvalidGrid(e) => Some(e),
            SolveError::UnknownAlgorithm(e) => Some(e),
            SolveError::Json(e) => Some(e),
        }
    }
}

impl From<GridError> for SolveError {
    fn from(e: GridError) -> Self {
        SolveError::InvalidGrid(e)
    }
}

impl From<UnknownAlgorithm> for SolveError {
    fn from(e: UnknownAlgorithm) -> Self {
        SolveError::UnknownAlgorithm(e)
    }
}

impl From<serde_json::Error> for SolveError {
    fn from(e: serde_json::Error) -> Self {
        SolveError::Json(e)
    }
}

impl SolveRequest {
    /// Validates the request into a grid and the selected algorithm.
    pub fn prepare(&self) -> Result<(Grid, Algorithm), SolveError> {
        let algorithm = self.algorithm.parse::<Algorithm>()?;
        let grid = Grid::build(&self.maze, self.start, &self.goals)?;
        Ok((grid, algorithm))
    }
}

pub fn solve(request: &SolveRequest, options: &SearchOptions) -> Result<SolveResponse, SolveError> {
    let (grid, algorithm) = request.prepare()?;
    let result = algorithms::search(&grid, algorithm, options);
    Ok(SolveResponse::from_result(&result))
}

/// Decodes a JSON request, solves it and encodes the response.
pub fn solve_json(body: &str, options: &SearchOptions) -> Result<String, SolveError> {
    let request: SolveRequest = serde_json::from_str(body)?;
    let response = solve(&request, options)?;
    Ok(serde_json::to_string(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(algorithm: &str) -> SolveRequest {
        serde_json::from_value(json!({
            "maze": [
                ["START", "UNEXPLORED", "UNEXPLORED"],
                ["UNEXPLORED", "OBSTACLE", "UNEXPLORED"],
                ["UNEXPLORED", "UNEXPLORED", "GOAL"]
            ],
            "start": { "x": 0, "y": 0 },
            "goals": [{ "x": 2, "y": 2 }],
            "algorithm": algorithm
        }))
        .unwrap()
    }

    #[test]
    fn decodes_client_request() {
        let req = request("bfs");
        assert_eq!(req.maze[1][1], CellState::Obstacle);
        assert_eq!(req.maze[0][0], CellState::Start);
        assert_eq!(req.start, Position::new(0, 0));
        assert_eq!(req.goals, vec![Position::new(2, 2)]);
    }

    #[test]
    fn response_uses_row_column_pairs() {
        let response = solve(&request("bfs"), &SearchOptions::default()).unwrap();
        assert_eq!(response.path.first(), Some(&[0, 0]));
        assert_eq!(response.path.last(), Some(&[2, 2]));
        assert_eq!(response.visited_count, response.path.len());
        assert_eq!(response.route.len(), 5);
        assert_eq!(response.reached_goal, Some(Position::new(2, 2)));

        let encoded = serde_json::to_value(&response).unwrap();
        assert_eq!(encoded["path"][0], json!([0, 0]));
        assert_eq!(encoded["reached_goal"], json!({ "x": 2, "y": 2 }));
    }

    #[test]
    fn unreachable_goal_yields_empty_path() {
        let mut req = request("dfs");
        req.maze[1][2] = CellState::Obstacle;
        req.maze[2][1] = CellState::Obstacle;
        let response = solve(&req, &SearchOptions::default()).unwrap();
        assert!(response.path.is_empty());
        assert!(response.route.is_empty());
        assert_eq!(response.reached_goal, None);
        assert_eq!(response.visited_count, 5);
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let err = solve(&request("greedy"), &SearchOptions::default()).unwrap_err();
        assert!(matches!(err, SolveError::UnknownAlgorithm(_)));
        assert!(err.to_string().contains("greedy"));
    }

    #[test]
    fn invalid_grid_is_rejected() {
        let mut req = request("astar");
        req.goals.clear();
        let err = solve(&req, &SearchOptions::default()).unwrap_err();
        assert!(matches!(err, SolveError::InvalidGrid(GridError::NoGoals)));
    }

    #[test]
    fn unknown_cell_tag_is_a_json_error() {
        let body = r#"{"maze":[["START","LAVA"]],"start":{"x":0,"y":0},"goals":[{"x":1,"y":0}],"algorithm":"bfs"}"#;
        let err = solve_json(body, &SearchOptions::default()).unwrap_err();
        assert!(matches!(err, SolveError::Json(_)));
    }

    #[test]
    fn solves_json_round_trip() {
        let body = r#"{"maze":[["START","UNEXPLORED","GOAL"]],"start":{"x":0,"y":0},"goals":[{"x":2,"y":0}],"algorithm":"astar"}"#;
        let out = solve_json(body, &SearchOptions::default()).unwrap();
        let response: SolveResponse = serde_json::from_str(&out).unwrap();
        assert_eq!(response.path, vec![[0, 0], [0, 1], [0, 2]]);
        assert_eq!(response.visited_count, 3);
    }
}
