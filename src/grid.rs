use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }

    pub fn manhattan(&self, other: &Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// State tag of a single cell, spelled the way clients send it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CellState {
    Unexplored,
    Obstacle,
    Start,
    Goal,
}

/// Which coordinate of a request failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRole {
    Start,
    Goal,
}

impl fmt::Display for CellRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellRole::Start => write!(f, "start"),
            CellRole::Goal => write!(f, "goal"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    Empty,
    Ragged { row: usize, expected: usize, found: usize },
    OutOfBounds { role: CellRole, position: Position, rows: usize, cols: usize },
    ObstacleAtStart(Position),
    ObstacleAtGoal(Position),
    NoGoals,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "grid must have at least one row and one column"),
            GridError::Ragged { row, expected, found } => write!(
                f,
                "row {row} has {found} cells but the first row has {expected}"
            ),
            GridError::OutOfBounds { role, position, rows, cols } => write!(
                f,
                "{role} ({}, {}) lies outside the {rows}x{cols} grid",
                position.x, position.y
            ),
            GridError::ObstacleAtStart(p) => write!(f, "start ({}, {}) is an obstacle", p.x, p.y),
            GridError::ObstacleAtGoal(p) => write!(f, "goal ({}, {}) is an obstacle", p.x, p.y),
            GridError::NoGoals => write!(f, "at least one goal is required"),
        }
    }
}

impl std::error::Error for GridError {}

/// Immutable snapshot of one search request's grid.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
    start: Position,
    goals: Vec<Position>,
    goal_mask: Vec<bool>,
}

impl Grid {
    /// Validates `matrix` (indexed `matrix[y][x]`) together with the start and
    /// goal coordinates and builds the grid view used by every strategy.
    pub fn build(
        matrix: &[Vec<CellState>],
        start: Position,
        goals: &[Position],
    ) -> Result<Self, GridError> {
        let rows = matrix.len();
        let cols = matrix.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in matrix.iter().enumerate() {
            if line.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            cells.extend_from_slice(line);
        }

        let in_bounds = |p: &Position| p.x < cols && p.y < rows;
        if !in_bounds(&start) {
            return Err(GridError::OutOfBounds {
                role: CellRole::Start,
                position: start,
                rows,
                cols,
            });
        }
        if cells[start.y * cols + start.x] == CellState::Obstacle {
            return Err(GridError::ObstacleAtStart(start));
        }
        if goals.is_empty() {
            return Err(GridError::NoGoals);
        }

        let mut goal_mask = vec![false; rows * cols];
        let mut unique_goals = Vec::with_capacity(goals.len());
        for &goal in goals {
            if !in_bounds(&goal) {
                return Err(GridError::OutOfBounds {
                    role: CellRole::Goal,
                    position: goal,
                    rows,
                    cols,
                });
            }
            let idx = goal.y * cols + goal.x;
            if cells[idx] == CellState::Obstacle {
                return Err(GridError::ObstacleAtGoal(goal));
            }
            // Duplicates are redundant; keep the first occurrence for display order.
            if !goal_mask[idx] {
                goal_mask[idx] = true;
                unique_goals.push(goal);
            }
        }

        // Coordinates are authoritative: stray START/GOAL tags are cleared and
        // the start tag wins when the start is also a goal.
        for (idx, cell) in cells.iter_mut().enumerate() {
            if goal_mask[idx] {
                *cell = CellState::Goal;
            } else if matches!(*cell, CellState::Start | CellState::Goal) {
                *cell = CellState::Unexplored;
            }
        }
        cells[start.y * cols + start.x] = CellState::Start;

        Ok(Grid {
            rows,
            cols,
            cells,
            start,
            goals: unique_goals,
            goal_mask,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goals(&self) -> &[Position] {
        &self.goals
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.x < self.cols && pos.y < self.rows
    }

    /// Stable dense encoding of a coordinate, `y * cols + x`.
    pub fn index(&self, pos: &Position) -> usize {
        pos.y * self.cols + pos.x
    }

    pub fn state_at(&self, pos: &Position) -> Option<CellState> {
        self.contains(pos).then(|| self.cells[self.index(pos)])
    }

    pub fn is_passable(&self, pos: &Position) -> bool {
        matches!(self.state_at(pos), Some(state) if state != CellState::Obstacle)
    }

    pub fn is_goal(&self, pos: &Position) -> bool {
        self.contains(pos) && self.goal_mask[self.index(pos)]
    }

    /// Passable 4-neighbors of `pos` in the fixed order up, right, down, left.
    pub fn neighbors(&self, pos: &Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(4);
        let (x, y) = (pos.x as isize, pos.y as isize);

        for (dx, dy) in [(0, -1), (1, 0), (0, 1), (-1, 0)] {
            let nx = x + dx;
            let ny = y + dy;
            if nx < 0 || ny < 0 {
                continue;
            }
            let next_pos = Position::new(nx as usize, ny as usize);
            if self.is_passable(&next_pos) {
                neighbors.push(next_pos);
            }
        }
        neighbors
    }

    /// Minimum Manhattan distance from `pos` to any goal.
    pub fn goal_distance(&self, pos: &Position) -> usize {
        self.goals
            .iter()
            .map(|goal| pos.manhattan(goal))
            .min()
            .unwrap_or(0)
    }

    /// Text picture of the grid, marking every cell of `overlay` that is not
    /// the start or a goal.
    pub fn render(&self, overlay: &[Position]) -> String {
        let mut marked = vec![false; self.cell_count()];
        for pos in overlay.iter().filter(|p| self.contains(p)) {
            marked[self.index(pos)] = true;
        }

        let mut out = String::new();
        out.push_str("Legend: S=Start, G=Goal, #=Obstacle, *=Visited, .=Empty\n");
        out.push_str("   ");
        for x in 0..self.cols {
            out.push_str(&format!("{:2}", x % 10));
        }
        out.push('\n');

        for y in 0..self.rows {
            out.push_str(&format!("{:2} ", y));
            for x in 0..self.cols {
                let pos = Position::new(x, y);
                let idx = self.index(&pos);
                let symbol = if pos == self.start {
                    'S'
                } else if self.goal_mask[idx] {
                    'G'
                } else if self.cells[idx] == CellState::Obstacle {
                    '#'
                } else if marked[idx] {
                    '*'
                } else {
                    '.'
                };
                out.push(symbol);
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}
