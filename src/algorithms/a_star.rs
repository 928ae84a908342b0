use crate::algorithms::common::{Exploration, SearchResult, SearchStrategy};
use crate::grid::{Grid, Position};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry ordered by `f = g + h`; equal `f` falls back to insertion
/// order so the earlier push wins.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct QueueEntry {
    f: usize,
    g: usize,
    seq: u64,
    pos: Position,
    parent: Option<Position>,
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse for min-heap behavior
        match other.f.cmp(&self.f) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            other => other,
        }
    }
}

/// A* over unit-cost 4-connected moves. The heuristic is the Manhattan
/// distance to the nearest goal, which never overestimates.
#[derive(Default)]
pub struct AStar;

impl AStar {
    /// Creates a new instance of the A* search.
    pub fn new() -> Self {
        AStar
    }
}

impl SearchStrategy for AStar {
    fn name(&self) -> &'static str {
        "astar"
    }

    /// Expands cells in `f` order and stops at the first goal taken off the
    /// heap. The visited order is the expansion order, not the route.
    fn search(&mut self, grid: &Grid) -> SearchResult {
        let mut exploration = Exploration::new(grid);
        let mut open_queue = BinaryHeap::new();
        let mut g_scores: FxHashMap<Position, usize> = FxHashMap::default();
        let mut seq = 0u64;

        let start = grid.start();
        g_scores.insert(start, 0);
        open_queue.push(QueueEntry {
            f: grid.goal_distance(&start),
            g: 0,
            seq,
            pos: start,
            parent: None,
        });

        while let Some(entry) = open_queue.pop() {
            if !exploration.visit(entry.pos, entry.parent) {
                continue;
            }
            if grid.is_goal(&entry.pos) {
                return exploration.finish(Some(entry.pos));
            }

            let tentative_g = entry.g + 1;
            for next in exploration.unvisited_neighbors(&entry.pos) {
                if g_scores.get(&next).is_some_and(|&g| g <= tentative_g) {
                    continue;
                }
                g_scores.insert(next, tentative_g);
                seq += 1;
                open_queue.push(QueueEntry {
                    f: tentative_g + grid.goal_distance(&next),
                    g: tentative_g,
                    seq,
                    pos: next,
                    parent: Some(entry.pos),
                });
            }
        }

        exploration.finish(None)
    }
}
