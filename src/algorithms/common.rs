use crate::grid::{Grid, Position};
use rustc_hash::FxHashMap;

/// Outcome of one search: every cell in the order it was explored, the goal
/// that stopped the search and the start-to-goal route behind it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub visited_order: Vec<Position>,
    pub reached_goal: Option<Position>,
    pub route: Vec<Position>,
}

impl SearchResult {
    pub fn visited_count(&self) -> usize {
        self.visited_order.len()
    }

    pub fn found(&self) -> bool {
        self.reached_goal.is_some()
    }

    /// Number of moves along the route, 0 when nothing was reached.
    pub fn route_length(&self) -> usize {
        self.route.len().saturating_sub(1)
    }
}

pub trait SearchStrategy {
    fn name(&self) -> &'static str;

    fn search(&mut self, grid: &Grid) -> SearchResult;
}

/// Visited set, exploration order and parent links shared by the
/// frontier-based strategies.
pub(crate) struct Exploration<'a> {
    grid: &'a Grid,
    visited: Vec<bool>,
    order: Vec<Position>,
    parents: FxHashMap<Position, Position>,
}

impl<'a> Exploration<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Exploration {
            grid,
            visited: vec![false; grid.cell_count()],
            order: Vec::new(),
            parents: FxHashMap::default(),
        }
    }

    pub fn is_visited(&self, pos: &Position) -> bool {
        self.visited[self.grid.index(pos)]
    }

    /// Records the first dequeue of `pos`. Returns false when it was already
    /// visited, in which case nothing changes.
    pub fn visit(&mut self, pos: Position, parent: Option<Position>) -> bool {
        let idx = self.grid.index(&pos);
        if self.visited[idx] {
            return false;
        }
        self.visited[idx] = true;
        self.order.push(pos);
        if let Some(parent) = parent {
            self.parents.insert(pos, parent);
        }
        true
    }

    pub fn unvisited_neighbors(&self, pos: &Position) -> Vec<Position> {
        self.grid
            .neighbors(pos)
            .into_iter()
            .filter(|n| !self.is_visited(n))
            .collect()
    }

    pub fn finish(self, reached_goal: Option<Position>) -> SearchResult {
        let route = match reached_goal {
            Some(goal) => backtrack_route(&self.parents, self.grid.start(), goal),
            None => Vec::new(),
        };
        SearchResult {
            visited_order: self.order,
            reached_goal,
            route,
        }
    }
}

/// Walks parent links back from `goal` to `start`.
pub(crate) fn backtrack_route(
    parents: &FxHashMap<Position, Position>,
    start: Position,
    goal: Position,
) -> Vec<Position> {
    let mut route = vec![goal];
    let mut child = goal;
    while child != start {
        match parents.get(&child) {
            Some(&parent) => {
                route.push(parent);
                child = parent;
            }
            None => break,
        }
    }
    route.reverse();
    route
}
