//! Multi-goal grid search: depth-first, breadth-first, A* and random-walk
//! exploration over a static snapshot of a painted grid.

pub mod algorithms;
pub mod config;
pub mod grid;
pub mod protocol;
pub mod simulation;
pub mod statistics;
