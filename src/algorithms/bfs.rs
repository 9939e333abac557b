use log::warn;

use crate::algorithms::SolutionFinder;
use crate::config::SolverConfig;
use crate::models::{Board, Distance, Solution};

/// Breadth-first strategy slot. Not implemented: every solve reports that
/// no route was found.
pub struct BreadthFirstFinder<'a> {
    board: &'a Board,
    capacity: u8,
}

impl<'a> BreadthFirstFinder<'a> {
    pub fn new(board: &'a Board, config: &SolverConfig) -> Self {
        BreadthFirstFinder {
            board,
            capacity: config.capacity,
        }
    }
}

impl SolutionFinder for BreadthFirstFinder<'_> {
    fn solve(&mut self) -> Option<Distance> {
        warn!(
            "Breadth-first search is not implemented; {} pets with capacity {} left unsolved",
            self.board.pet_count(),
            self.capacity
        );
        None
    }

    fn solution(&self) -> Solution {
        Solution::none()
    }

    fn solution_moves_count(&self) -> Option<Distance> {
        None
    }
}
