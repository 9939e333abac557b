// Public modules
pub mod algorithms;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::dijkstra::{DijkstraFinder, SearchStats};
pub use algorithms::{finder_for, solve_batch, solve_board, SolutionFinder};
pub use config::{SolverConfig, Strategy};
pub use error::SolverError;
pub use models::{Board, CarMove, MoveAction, PetRequest, RawBoard, Solution};
