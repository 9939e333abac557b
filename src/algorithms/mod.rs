pub mod bfs;
pub mod dijkstra;
pub mod reconstruct;

use log::info;
use rayon::prelude::*;

use crate::config::{SolverConfig, Strategy};
use crate::error::SolverError;
use crate::models::{Board, Distance, RawBoard, Solution};
use crate::utils::init_board::init_board;

use self::bfs::BreadthFirstFinder;
use self::dijkstra::DijkstraFinder;

/// Trait for pickup/delivery route finders
pub trait SolutionFinder {
    /// Run the search and return the optimal total distance, `None` if no
    /// route delivers every pet
    fn solve(&mut self) -> Option<Distance>;

    /// Route found by the last `solve`
    fn solution(&self) -> Solution;

    /// Distance driven by the route found by the last `solve`
    fn solution_moves_count(&self) -> Option<Distance>;
}

/// Create the finder selected by `config.strategy`
pub fn finder_for<'a>(board: &'a Board, config: &SolverConfig) -> Box<dyn SolutionFinder + 'a> {
    match config.strategy {
        Strategy::Dijkstra => Box::new(DijkstraFinder::new(board, config)),
        Strategy::BreadthFirst => Box::new(BreadthFirstFinder::new(board, config)),
    }
}

/// Parse a raw board and solve it with the configured strategy
pub fn solve_board(raw: &RawBoard, config: &SolverConfig) -> Result<Solution, SolverError> {
    let board = init_board(raw)?;
    let mut finder = finder_for(&board, config);
    finder.solve();
    Ok(finder.solution())
}

/// Solve independent boards in parallel, one result per board in input order
pub fn solve_batch(
    boards: &[RawBoard],
    config: &SolverConfig,
) -> Vec<Result<Solution, SolverError>> {
    info!("Solving {} boards in parallel", boards.len());
    boards
        .par_iter()
        .map(|raw| solve_board(raw, config))
        .collect()
}
